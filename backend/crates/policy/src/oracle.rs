//! Strength Oracle
//!
//! Pluggable crack-time estimator behind the policy engine. The engine
//! only requires a deterministic 0-4 score where higher means harder to
//! guess; the production implementation delegates to zxcvbn.

/// Highest score the oracle can return
pub const MAX_SCORE: u8 = 4;

/// Crack-time based strength estimator
///
/// Implementations must be deterministic for identical inputs.
pub trait StrengthOracle {
    /// Score a candidate from 0 (trivial) to 4 (very strong)
    ///
    /// `user_inputs` are identity-derived tokens the estimator must
    /// treat as guessable rather than as entropy.
    fn estimate(&self, candidate: &str, user_inputs: &[String]) -> u8;
}

/// zxcvbn-backed production oracle
#[derive(Debug, Default, Clone, Copy)]
pub struct ZxcvbnOracle;

impl StrengthOracle for ZxcvbnOracle {
    fn estimate(&self, candidate: &str, user_inputs: &[String]) -> u8 {
        let inputs: Vec<&str> = user_inputs.iter().map(String::as_str).collect();
        match zxcvbn::zxcvbn(candidate, &inputs) {
            Ok(entropy) => entropy.score().min(MAX_SCORE),
            // blank input and the like score as trivial
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_stays_in_range() {
        let oracle = ZxcvbnOracle;
        for candidate in ["", "a", "Tr0ub4dour&3", "correct horse battery staple"] {
            assert!(oracle.estimate(candidate, &[]) <= MAX_SCORE);
        }
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let oracle = ZxcvbnOracle;
        let inputs = vec!["tanaka123".to_string(), "tanaka".to_string()];
        let first = oracle.estimate("Megumi$2024x", &inputs);
        let second = oracle.estimate("Megumi$2024x", &inputs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_user_inputs_penalize_derived_passwords() {
        let oracle = ZxcvbnOracle;
        // local part that is not in any built-in dictionary, so the
        // penalty can only come from the supplied tokens
        let inputs = vec![
            "xkwqzr742".to_string(),
            "xkwqzr".to_string(),
            "742".to_string(),
        ];
        let candidate = "xkwqzr742!";
        let with_dictionary = oracle.estimate(candidate, &inputs);
        let without_dictionary = oracle.estimate(candidate, &[]);
        assert!(
            with_dictionary < without_dictionary,
            "token-plus-suffix candidate must score strictly lower with \
             the derived tokens ({with_dictionary} vs {without_dictionary})"
        );
    }
}
