//! Password Policy Engine
//!
//! The single evaluator behind every password form in the portal:
//! employee creation, profile edit, and password change all feed a
//! candidate plus identity context through here instead of carrying
//! their own copies of the rules.

use thiserror::Error;

use crate::candidate::PasswordCandidate;
use crate::context::PolicyContext;
use crate::dictionary::derive_dictionary;
use crate::format::check_format;
use crate::oracle::{StrengthOracle, ZxcvbnOracle};

/// Outcome of one evaluation; computed per call, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthVerdict {
    /// Hard format rules satisfied
    pub format_valid: bool,
    /// Oracle score, 0 when format-invalid
    pub score: u8,
    /// Score reached the context's required threshold
    pub meets_requirement: bool,
}

impl StrengthVerdict {
    /// Verdict for format-invalid input; the oracle is never consulted
    const fn format_rejected() -> Self {
        Self {
            format_valid: false,
            score: 0,
            meets_requirement: false,
        }
    }

    pub fn is_acceptable(&self) -> bool {
        self.meets_requirement
    }
}

/// Recoverable policy violations for caller messaging
///
/// Never carries the candidate text. Role-specific wording is resolved
/// by the caller; this only names the rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    /// Length, character-class, or whitespace rule failed
    #[error("password does not satisfy the format rules")]
    FormatInvalid,
    /// Format passed but the strength estimate is below the threshold
    #[error("password strength {score} is below the required {required}")]
    StrengthInsufficient { score: u8, required: u8 },
}

/// Stateless password acceptability evaluator
///
/// Pure besides the injected oracle: identical candidate and context
/// always produce the same verdict.
#[derive(Debug, Clone)]
pub struct PasswordPolicy<O> {
    oracle: O,
}

impl PasswordPolicy<ZxcvbnOracle> {
    /// Engine wired to the production zxcvbn oracle
    pub fn standard() -> Self {
        Self::new(ZxcvbnOracle)
    }
}

impl<O: StrengthOracle> PasswordPolicy<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Evaluate a candidate for the given identity context
    ///
    /// Format-invalid input short-circuits to score 0; the oracle is
    /// only consulted for candidates that pass the format scan.
    pub fn evaluate(&self, candidate: &PasswordCandidate, ctx: &PolicyContext) -> StrengthVerdict {
        if !check_format(candidate.expose()).is_valid() {
            return StrengthVerdict::format_rejected();
        }

        let dictionary = derive_dictionary(ctx.associated_email.as_deref());
        let score = self.oracle.estimate(candidate.expose(), &dictionary);
        let verdict = StrengthVerdict {
            format_valid: true,
            score,
            meets_requirement: score >= ctx.required_score.value(),
        };
        tracing::debug!(
            score = verdict.score,
            required = ctx.required_score.value(),
            meets_requirement = verdict.meets_requirement,
            "password candidate evaluated"
        );
        verdict
    }

    /// Violation behind a verdict, `None` when the candidate is acceptable
    pub fn violation(
        &self,
        verdict: &StrengthVerdict,
        ctx: &PolicyContext,
    ) -> Option<PolicyViolation> {
        if !verdict.format_valid {
            return Some(PolicyViolation::FormatInvalid);
        }
        if !verdict.meets_requirement {
            return Some(PolicyViolation::StrengthInsufficient {
                score: verdict.score,
                required: ctx.required_score.value(),
            });
        }
        None
    }
}
