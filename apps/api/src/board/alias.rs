/// Lowercases `company_name` and keeps only `[a-z0-9]`.
///
/// Non-ASCII letters are dropped rather than transliterated.
pub fn derive_alias_identifier(company_name: &str) -> String {
    company_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Builds the plus-addressed mailbox for a company, e.g. `me+acme@mail.com`.
/// Returns `None` when `user_email` is not an address.
pub fn alias_email(user_email: &str, alias_identifier: &str) -> Option<String> {
    let (local, domain) = user_email.trim().split_once('@')?;
    if local.is_empty() || domain.is_empty() {
        return None;
    }
    Some(format!("{local}+{alias_identifier}@{domain}"))
}
