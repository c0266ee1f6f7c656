use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\d+\-\s()]").expect("valid regex"));
static CZECH_MOBILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[67]\d{8}$").expect("valid regex"));

/// Normalize a phone cell.
///
/// Keeps digits, `+`, `-`, whitespace and parentheses. Extensions of up to three
/// characters are returned as they are; nine-digit Czech numbers starting with
/// 6 or 7 get the `+420` country code.
pub fn format_phone_number(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let phone = DISALLOWED.replace_all(trimmed, "").into_owned();
    if phone.chars().count() <= 3 {
        return phone;
    }

    if CZECH_MOBILE.is_match(&phone.replace(' ', "")) {
        return format!("+420 {phone}");
    }

    phone
}

/// Internal "flap" extensions are dialled with a leading `*`.
pub fn format_phone_flap(raw: &str) -> String {
    let flap = raw.trim();
    if flap.is_empty() {
        return String::new();
    }
    if flap.starts_with('*') {
        flap.to_string()
    } else {
        format!("*{flap}")
    }
}
