//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 회원 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 에러 분류
//!
//! - 인증 실패([`MemberError::UnknownUser`], [`MemberError::BadCredential`])는
//!   감지 즉시 호출자에게 전달되며 재시도하지 않습니다.
//! - 중복 가입은 에러가 아니라 [`crate::domain::models::RegisterOutcome`]의
//!   태그된 결과값으로 표현됩니다.
//! - 저장소 장애는 [`MemberError::DatabaseError`]로 래핑 없이 그대로 전파됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use member_service_backend::errors::{MemberError, MemberResult};
//!
//! async fn login(login_id: &str, password: &str) -> MemberResult<Member> {
//!     let member = member_service.authenticate(login_id, password).await?;
//!     Ok(member)
//! }
//! ```

use thiserror::Error;

/// 회원 서비스 전역 에러 타입
///
/// 회원가입/로그인 워크플로우에서 발생할 수 있는 모든 종류의 에러를
/// 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum MemberError {
    /// 해당 로그인 ID의 회원이 존재하지 않음 (로그인 실패)
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// 비밀번호가 저장된 다이제스트와 일치하지 않음 (로그인 실패)
    #[error("Bad credential")]
    BadCredential,

    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 에러 (해싱 실패 등 복구 불가능한 장애)
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type MemberResult<T> = Result<T, MemberError>;
