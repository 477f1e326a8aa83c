//! 회원가입 결과 모델
//!
//! 회원가입의 세 가지 결과를 태그된 열거형으로 표현합니다.
//! 단일 boolean 반환과 달리 어떤 필드가 충돌했는지를 호출자가 구분할 수 있습니다.

use crate::domain::entities::members::Member;

/// 회원가입 연산의 결과
///
/// 중복 가입은 에러가 아니라 정상적인 비즈니스 결과이므로
/// `Result`의 에러 채널 대신 이 열거형으로 표현합니다.
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
    /// 가입 성공 - 저장소가 할당한 ID를 포함한 회원 엔티티
    Registered(Member),
    /// 이미 사용 중인 로그인 ID로 인한 가입 거부
    DuplicateLoginId,
    /// 이미 사용 중인 닉네임으로 인한 가입 거부
    DuplicateNickname,
}

impl RegisterOutcome {
    /// 가입이 성공했는지 여부를 반환합니다.
    ///
    /// 기존의 단일 boolean 계약(`true` = 가입, `false` = 중복 거부)이
    /// 필요한 호출자를 위한 뷰입니다.
    pub fn is_registered(&self) -> bool {
        matches!(self, RegisterOutcome::Registered(_))
    }

    /// 가입된 회원 엔티티를 반환합니다. 거부된 경우 `None`입니다.
    pub fn member(&self) -> Option<&Member> {
        match self {
            RegisterOutcome::Registered(member) => Some(member),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_outcome() {
        let member = Member::new(
            "alice".to_string(),
            "앨리스".to_string(),
            "al".to_string(),
            "digest".to_string(),
            "서울".to_string(),
            "010-0000-0000".to_string(),
        );
        let outcome = RegisterOutcome::Registered(member);

        assert!(outcome.is_registered());
        assert_eq!(outcome.member().unwrap().login_id, "alice");
    }

    #[test]
    fn test_duplicate_outcomes_are_not_registered() {
        assert!(!RegisterOutcome::DuplicateLoginId.is_registered());
        assert!(!RegisterOutcome::DuplicateNickname.is_registered());
        assert!(RegisterOutcome::DuplicateLoginId.member().is_none());
    }
}
