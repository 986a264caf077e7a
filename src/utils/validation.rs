use crate::utils::error::{BankError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// local part is dot-separated atoms; domain needs at least one dot
const EMAIL_PATTERN: &str = r#"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"#;

/// Phone pattern declared for the user record; kept as a rule but not enforced on assignment.
pub const PHONE_PATTERN: &str = r"^\+?0?62[0-9]+$";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(EMAIL_PATTERN)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn phone_regex() -> &'static Regex {
    PHONE_RE.get_or_init(|| {
        Regex::new(PHONE_PATTERN)
            .unwrap_or_else(|error| panic!("phone regex failed to compile: {error}"))
    })
}

/// 非負整數
pub fn is_natural(n: i64) -> bool {
    n >= 0
}

/// 只含 ASCII 字母；空字串視為未提供，回傳 true
pub fn is_alpha(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

/// 只含 ASCII 字母與數字；空字串視為未提供，回傳 true
pub fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// 只含數字字元；空字串視為未提供，回傳 true
pub fn is_numeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

pub fn is_email(s: &str) -> bool {
    email_regex().is_match(s)
}

pub fn is_phone(s: &str) -> bool {
    phone_regex().is_match(s)
}

fn rejected(field_name: &str, value: &str, reason: &str) -> BankError {
    // 只記錄欄位與原因，值可能含個資
    tracing::warn!("Rejected value for {}: {}", field_name, reason);
    BankError::InvalidFieldValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_natural(field_name: &str, value: i64) -> Result<()> {
    if !is_natural(value) {
        return Err(rejected(
            field_name,
            &value.to_string(),
            "must be a non-negative whole number",
        ));
    }
    Ok(())
}

pub fn validate_alpha(field_name: &str, value: &str) -> Result<()> {
    if !is_alpha(value) {
        return Err(rejected(field_name, value, "must contain only letters"));
    }
    Ok(())
}

pub fn validate_alphanumeric(field_name: &str, value: &str) -> Result<()> {
    if !is_alphanumeric(value) {
        return Err(rejected(
            field_name,
            value,
            "must contain only letters and digits",
        ));
    }
    Ok(())
}

pub fn validate_numeric(field_name: &str, value: &str) -> Result<()> {
    if !is_numeric(value) {
        return Err(rejected(field_name, value, "must contain only digits"));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    if !is_email(value) {
        return Err(rejected(field_name, value, "must be a valid email address"));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BankError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BankError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
