//! # 회원 저장소 인터페이스
//!
//! Credential Store의 계약을 정의합니다. 회원 워크플로우가 필요로 하는
//! 네 가지 연산(로그인 ID 조회, 닉네임 조회, ID 조회, 생성)만을 노출하며,
//! 구현체는 MongoDB([`member_repo::MongoMemberRepository`])와
//! 인메모리([`memory_repo::InMemoryMemberRepository`]) 두 가지를 제공합니다.
//!
//! ## 유니크 제약의 권위
//!
//! 로그인 ID/닉네임의 유니크성은 저장소가 최종적으로 보장합니다.
//! 사전 조회(check-then-act)는 원자적이지 않으므로, 쓰기 시점에 감지된
//! 중복은 [`CreateResult::Duplicate`]로 반환되어 동일한 "가입 거부" 결과로
//! 수렴합니다.

use async_trait::async_trait;

use crate::domain::entities::members::Member;
use crate::errors::MemberError;

pub mod member_repo;
pub mod memory_repo;

/// 중복이 감지된 유니크 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    /// `login_id` 유니크 제약 위반
    LoginId,
    /// `nickname` 유니크 제약 위반
    Nickname,
}

/// 회원 생성 연산의 결과
///
/// 유니크 제약 위반은 저장소 장애가 아닌 정상적인 결과이므로
/// 에러 채널과 분리하여 표현합니다.
#[derive(Debug, Clone)]
pub enum CreateResult {
    /// 생성 성공 - 저장소가 할당한 ID를 포함한 회원
    Created(Member),
    /// 유니크 제약 위반으로 인한 생성 거부
    Duplicate(DuplicateField),
}

/// 회원 데이터 액세스 인터페이스 (Credential Store)
///
/// 회원 워크플로우가 소비하는 영속화 계약입니다.
/// 조회 연산에서 부재(absence)는 에러가 아닌 `Ok(None)`으로 표현됩니다.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// 로그인 ID로 회원을 조회합니다.
    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<Member>, MemberError>;

    /// 닉네임으로 회원을 조회합니다.
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Member>, MemberError>;

    /// 내부 식별자로 회원을 조회합니다.
    ///
    /// `id`는 ObjectId의 16진수 문자열이어야 하며, 형식이 잘못된 경우
    /// 모든 구현체는 `Err(MemberError::ValidationError)`를 반환합니다.
    /// 형식은 올바르지만 존재하지 않는 식별자는 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, MemberError>;

    /// 새 회원을 생성하고 식별자를 할당합니다.
    ///
    /// 유니크 제약 위반은 `Ok(CreateResult::Duplicate(..))`로 반환되며,
    /// 그 외의 저장소 장애만 `Err`로 전파됩니다.
    async fn create(&self, member: Member) -> Result<CreateResult, MemberError>;
}
