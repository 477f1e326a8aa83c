//! 회원가입 요청 DTO
//!
//! 새로운 회원 계정 생성을 위한 요청 데이터 구조를 정의합니다.
//! 호출자 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 회원 계정 생성을 위한 요청 DTO
///
/// 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// 로그인 ID (4-30자, 영문/숫자/언더스코어만 허용)
    #[validate(length(
        min = 4,
        max = 30,
        message = "로그인 ID는 4-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_login_id"))]
    pub login_id: String,

    /// 회원 이름 (1-50자, 유니코드 지원)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    /// 닉네임 (2-30자)
    #[validate(length(
        min = 2,
        max = 30,
        message = "닉네임은 2-30자 사이여야 합니다"
    ))]
    pub nickname: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(
        min = 6,
        message = "비밀번호는 최소 6자 이상이어야 합니다"
    ))]
    pub password: String,

    /// 주소 (최대 200자)
    #[validate(length(max = 200, message = "주소는 최대 200자까지 가능합니다"))]
    pub address: String,

    /// 전화번호 (숫자와 하이픈만 허용)
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
}

/// 로그인 ID 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_login_id(login_id: &str) -> Result<(), ValidationError> {
    if !login_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_login_id")
            .with_message("로그인 ID는 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 전화번호 형식 검증 (숫자와 하이픈만 허용)
fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if phone_number.is_empty()
        || !phone_number.chars().all(|c| c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::new("invalid_phone_number")
            .with_message("전화번호는 숫자와 하이픈만 사용 가능합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SignUpRequest {
        SignUpRequest {
            login_id: "alice_01".to_string(),
            name: "앨리스".to_string(),
            nickname: "al".to_string(),
            password: "secret123".to_string(),
            address: "서울시 강남구".to_string(),
            phone_number: "010-1234-5678".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_short_login_id_rejected() {
        let mut request = valid_request();
        request.login_id = "al".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_id_with_special_characters_rejected() {
        let mut request = valid_request();
        request.login_id = "alice!@#".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut request = valid_request();
        request.password = "short".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_seven_character_password_accepted() {
        let mut request = valid_request();
        request.password = "secret1".to_string();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_phone_number_with_letters_rejected() {
        let mut request = valid_request();
        request.phone_number = "010-abcd-5678".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_nickname_rejected() {
        let mut request = valid_request();
        request.nickname = String::new();
        assert!(request.validate().is_err());
    }
}
