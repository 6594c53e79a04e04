use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::EDeptError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), EDeptError> {
    if email.trim().is_empty() {
        return Err(EDeptError::validation("Email cannot be empty"));
    }
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err(EDeptError::validation("Email format is invalid"));
    }
    Ok(())
}

/// 必填文本字段不能为空白
pub fn validate_required(field: &str, value: &str) -> Result<(), EDeptError> {
    if value.trim().is_empty() {
        return Err(EDeptError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// 成绩取值范围
pub const MIN_GRADE: i32 = 1;
pub const MAX_GRADE: i32 = 5;

pub fn validate_grade(grade: i32) -> Result<(), EDeptError> {
    if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(EDeptError::validation(format!(
            "Grade must be between {MIN_GRADE} and {MAX_GRADE}"
        )));
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
/// - 可选：特殊字符（增强安全性）
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), EDeptError> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(EDeptError::validation(result.error_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_lowercase() {
        let result = validate_password("ABCD1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(matches!(
            validate_email("   "),
            Err(EDeptError::Validation(_))
        ));
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_required_field() {
        assert!(validate_required("Name", "CS").is_ok());
        let err = validate_required("Name", "  \t").unwrap_err();
        assert_eq!(err.message(), "Name cannot be empty");
    }

    #[test]
    fn test_grade_bounds() {
        for grade in 1..=5 {
            assert!(validate_grade(grade).is_ok());
        }
        for grade in [i32::MIN, -1, 0, 6, 100] {
            assert!(matches!(
                validate_grade(grade),
                Err(EDeptError::Validation(_))
            ));
        }
    }
}
