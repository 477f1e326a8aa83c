//! # 비밀번호 해싱 계층
//!
//! 비밀번호 해싱/검증을 교체 가능한 능력(capability)으로 추상화합니다.
//! Spring Security의 `PasswordEncoder` 인터페이스와 동일한 역할을 수행하며,
//! 기본 구현은 bcrypt를 사용합니다.
//!
//! ## 보안 특징
//!
//! - **적응형 해싱**: bcrypt cost로 무차별 대입 공격 비용을 조절
//! - **솔트 자동 생성**: bcrypt가 해시마다 고유 솔트를 내부적으로 생성
//! - **타이밍 공격 방지**: bcrypt 검증은 상수 시간 비교를 사용

use bcrypt::{hash, verify};

use crate::config::PasswordConfig;
use crate::errors::MemberError;

/// 비밀번호 해싱 능력 인터페이스
///
/// 회원 워크플로우는 이 trait을 통해서만 해싱을 수행하므로,
/// 해싱 알고리즘을 저장소나 서비스 로직 변경 없이 교체할 수 있습니다.
pub trait PasswordHasher: Send + Sync {
    /// 평문 비밀번호를 일방향 다이제스트로 변환합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 솔트가 포함된 다이제스트
    /// * `Err(MemberError::InternalError)` - 해싱 시스템 장애 (복구 불가)
    fn hash(&self, plain: &str) -> Result<String, MemberError>;

    /// 평문 비밀번호가 다이제스트와 일치하는지 검증합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 일치
    /// * `Ok(false)` - 불일치
    /// * `Err(MemberError::InternalError)` - 다이제스트 형식 오류 등 검증 시스템 장애
    fn verify(&self, plain: &str, digest: &str) -> Result<bool, MemberError>;
}

/// bcrypt 기반 비밀번호 해셔
///
/// 환경별 cost 설정으로 보안 강도를 조절합니다.
/// 개발/테스트 환경에서는 낮은 cost(4)로 빠른 처리를,
/// 프로덕션에서는 높은 cost(12)로 강한 보안을 제공합니다.
pub struct BcryptPasswordHasher {
    /// bcrypt cost (4-15 범위)
    cost: u32,
}

impl BcryptPasswordHasher {
    /// 지정된 cost로 해셔를 생성합니다.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 현재 환경 설정에 맞는 cost로 해셔를 생성합니다.
    ///
    /// `BCRYPT_COST` 환경 변수가 설정된 경우 해당 값을,
    /// 그렇지 않으면 실행 환경별 기본값을 사용합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    /// 설정된 cost를 반환합니다.
    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, MemberError> {
        hash(plain, self.cost)
            .map_err(|e| MemberError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool, MemberError> {
        verify(plain, digest)
            .map_err(|e| MemberError::InternalError(format!("비밀번호 검증 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 테스트 환경의 bcrypt cost (빠른 처리)
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);

        let digest = hasher.hash("secret1").unwrap();
        assert!(hasher.verify("secret1", &digest).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);

        let digest = hasher.hash("secret1").unwrap();
        assert!(!hasher.verify("wrong", &digest).unwrap());
    }

    #[test]
    fn test_digest_is_not_plaintext() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);

        let digest = hasher.hash("secret1").unwrap();
        assert_ne!(digest, "secret1");
    }

    #[test]
    fn test_each_hash_uses_fresh_salt() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);

        let first = hasher.hash("secret1").unwrap();
        let second = hasher.hash("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_digest_is_internal_error() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);

        let result = hasher.verify("secret1", "not-a-bcrypt-digest");
        assert!(matches!(result, Err(MemberError::InternalError(_))));
    }
}
