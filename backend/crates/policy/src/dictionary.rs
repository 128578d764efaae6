//! Dictionary Derivation
//!
//! Builds the "known user input" tokens fed to the strength oracle from
//! the account's email address. Feeding the user's own email-derived
//! identifiers closes the loophole of a strong-looking password built
//! from one's own surname and employee number.

/// Derive oracle dictionary tokens from an email address
///
/// `tanaka123@example.com` → `["tanaka123", "tanaka", "123"]`.
/// A local part that is not exactly `<letters><digits>` yields the
/// local part alone; a missing email or an `@` at position 0 yields
/// nothing.
pub fn derive_dictionary(email: Option<&str>) -> Vec<String> {
    let Some(email) = email else {
        return Vec::new();
    };
    let Some(at) = email.find('@') else {
        return Vec::new();
    };
    if at == 0 {
        return Vec::new();
    }

    let local = &email[..at];
    match split_letters_digits(local) {
        Some((letters, digits)) => vec![
            local.to_string(),
            letters.to_string(),
            digits.to_string(),
        ],
        None => vec![local.to_string()],
    }
}

/// Split a `<letters><digits>` local part (surname + employee number)
fn split_letters_digits(local: &str) -> Option<(&str, &str)> {
    let boundary = local.find(|c: char| c.is_ascii_digit())?;
    if boundary == 0 {
        return None;
    }
    let (letters, digits) = local.split_at(boundary);
    let shape_matches = letters.chars().all(|c| c.is_ascii_alphabetic())
        && digits.chars().all(|c| c.is_ascii_digit());
    shape_matches.then_some((letters, digits))
}
