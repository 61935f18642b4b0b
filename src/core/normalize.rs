/// Username derivation for the join key. Both helpers only case-fold; no
/// trimming of punctuation and no Unicode normalization, because matching
/// relies on exact substring equality.

/// Local-part of an email, lowercased. Strings without an `@` (or with a
/// leading `@`) are returned whole, lowercased, rather than rejected.
pub fn username_from_email(email: &str) -> String {
    match email.find('@') {
        Some(at) if at > 0 => email[..at].to_lowercase(),
        _ => email.to_lowercase(),
    }
}

/// Account name with its `DOMAIN\` prefix stripped, lowercased. A missing,
/// leading, or trailing backslash leaves the string whole, lowercased.
pub fn username_from_account(account: &str) -> String {
    match account.find('\\') {
        Some(i) if i > 0 && i + 1 < account.len() => account[i + 1..].to_lowercase(),
        _ => account.to_lowercase(),
    }
}
