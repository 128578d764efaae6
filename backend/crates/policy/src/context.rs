//! Policy Context
//!
//! Per-identity inputs to an evaluation: the account's email address
//! and the strength score its privilege level mandates. The engine is
//! role-agnostic; roles only appear here, as a source of the numeric
//! threshold.

use crate::oracle::MAX_SCORE;

/// 権限区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaffRole {
    /// 一般社員
    #[default]
    General,
    /// 管理者
    Admin,
}

impl StaffRole {
    pub const fn code(&self) -> &'static str {
        match self {
            StaffRole::General => "GENERAL",
            StaffRole::Admin => "ADMIN",
        }
    }

    /// Parse a role code; unknown codes fall back to General
    ///
    /// The portal UI sends the display label 管理者 for administrators,
    /// so it is accepted alongside the stored code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ADMIN" | "管理者" => StaffRole::Admin,
            _ => StaffRole::General,
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Minimum oracle score a privilege level mandates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequiredScore(u8);

impl RequiredScore {
    /// Threshold for ordinary accounts
    pub const GENERAL: RequiredScore = RequiredScore(3);
    /// Threshold for administrative accounts
    pub const ADMIN: RequiredScore = RequiredScore(4);

    /// Build from a raw number, clamped into the oracle's 0-4 range
    pub const fn new(score: u8) -> Self {
        Self(if score > MAX_SCORE { MAX_SCORE } else { score })
    }

    pub const fn for_role(role: StaffRole) -> Self {
        match role {
            StaffRole::General => Self::GENERAL,
            StaffRole::Admin => Self::ADMIN,
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for RequiredScore {
    fn default() -> Self {
        Self::GENERAL
    }
}

/// Inputs the evaluation depends on besides the candidate itself
///
/// Both fields change the verdict for the same candidate, so callers
/// must re-evaluate whenever either changes; the engine caches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyContext {
    /// Email of the target identity, if known
    pub associated_email: Option<String>,
    /// Score the target identity's privilege level mandates
    pub required_score: RequiredScore,
}

impl PolicyContext {
    pub fn new(required_score: RequiredScore) -> Self {
        Self {
            associated_email: None,
            required_score,
        }
    }

    /// Context for a target identity with the given role
    pub fn for_role(role: StaffRole) -> Self {
        Self::new(RequiredScore::for_role(role))
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.associated_email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_thresholds() {
        assert_eq!(RequiredScore::for_role(StaffRole::General).value(), 3);
        assert_eq!(RequiredScore::for_role(StaffRole::Admin).value(), 4);
    }

    #[test]
    fn test_required_score_clamped() {
        assert_eq!(RequiredScore::new(9).value(), 4);
        assert_eq!(RequiredScore::new(0).value(), 0);
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(StaffRole::Admin.code(), "ADMIN");
        assert_eq!(StaffRole::from_code("ADMIN"), StaffRole::Admin);
        assert_eq!(StaffRole::from_code("GENERAL"), StaffRole::General);
        // unknown codes degrade to the lowest privilege
        assert_eq!(StaffRole::from_code("manager"), StaffRole::General);
    }

    #[test]
    fn test_japanese_admin_label_maps_to_admin() {
        assert_eq!(StaffRole::from_code("管理者"), StaffRole::Admin);
        // the label mandates the admin threshold, not the general one
        assert_eq!(
            RequiredScore::for_role(StaffRole::from_code("管理者")).value(),
            4
        );
        // the general display label is not the admin one
        assert_eq!(StaffRole::from_code("一般"), StaffRole::General);
    }

    #[test]
    fn test_context_builder() {
        let ctx = PolicyContext::for_role(StaffRole::Admin).with_email("tanaka123@example.com");
        assert_eq!(ctx.required_score, RequiredScore::ADMIN);
        assert_eq!(ctx.associated_email.as_deref(), Some("tanaka123@example.com"));
    }
}
