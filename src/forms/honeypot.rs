use super::schema::RawValues;

/// Hidden field name the page templates render. Bots fill it, people don't.
/// Same convention as the hosted relay the forms can forward to.
pub const HONEYPOT_FIELD: &str = "_gotcha";

/// Check if the honeypot field is filled. Returns true if spam detected.
pub fn is_spam(raw: &RawValues) -> bool {
    raw.get(HONEYPOT_FIELD).is_some_and(|v| !v.is_empty())
}
