/// Checks that an email address has a local part, a single `@`, and a domain
/// containing a dot. Deliberately loose; real validation happens when mail is
/// actually sent.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

/// Checks that a string is at least `min` characters long.
///
/// Minimum-length rules are about characters the user typed, so the count goes
/// through `chars()` rather than byte length, which overshoots for multibyte
/// input.
pub fn has_min_chars(s: &str, min: usize) -> bool {
    s.chars().count() >= min
}
