//! 인메모리 회원 리포지토리
//!
//! MongoDB 없이 동작하는 [`MemberStore`] 구현체입니다.
//! 단위 테스트와 임베딩 환경에서 사용하며, 유니크 제약을
//! 쓰기 락 내부에서 원자적으로 강제합니다.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::domain::entities::members::Member;
use crate::errors::MemberError;

use super::{CreateResult, DuplicateField, MemberStore};

/// 인메모리 회원 저장소
///
/// `_id`의 16진수 문자열을 키로 회원을 보관합니다.
/// MongoDB 구현과 달리 별도의 인덱스 없이 전체 순회로 조회하지만,
/// 생성 시의 중복 검사는 동일한 의미([`CreateResult::Duplicate`])로 동작합니다.
#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: Arc<RwLock<HashMap<String, Member>>>,
}

impl InMemoryMemberRepository {
    /// 빈 저장소를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 회원 수를 반환합니다.
    ///
    /// "가입 거부 시 레코드가 생성되지 않는다" 속성을 검증하는 테스트에서 사용합니다.
    pub async fn count(&self) -> usize {
        self.members.read().await.len()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberRepository {
    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<Member>, MemberError> {
        let members = self.members.read().await;
        Ok(members.values().find(|m| m.login_id == login_id).cloned())
    }

    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Member>, MemberError> {
        let members = self.members.read().await;
        Ok(members.values().find(|m| m.nickname == nickname).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, MemberError> {
        // MongoDB 구현과 동일하게 잘못된 ID 형식은 검증 에러로 처리한다
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| MemberError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let members = self.members.read().await;
        Ok(members.get(&object_id.to_hex()).cloned())
    }

    async fn create(&self, mut member: Member) -> Result<CreateResult, MemberError> {
        // 중복 검사와 삽입을 동일한 쓰기 락 안에서 수행한다
        let mut members = self.members.write().await;

        if members.values().any(|m| m.login_id == member.login_id) {
            return Ok(CreateResult::Duplicate(DuplicateField::LoginId));
        }

        if members.values().any(|m| m.nickname == member.nickname) {
            return Ok(CreateResult::Duplicate(DuplicateField::Nickname));
        }

        let oid = ObjectId::new();
        member.id = Some(oid);
        members.insert(oid.to_hex(), member.clone());

        Ok(CreateResult::Created(member))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_member(login_id: &str, nickname: &str) -> Member {
        Member::new(
            login_id.to_string(),
            "회원".to_string(),
            nickname.to_string(),
            "digest".to_string(),
            "서울시".to_string(),
            "010-1111-2222".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let repo = InMemoryMemberRepository::new();

        let result = repo.create(sample_member("alice", "al")).await.unwrap();

        match result {
            CreateResult::Created(member) => {
                assert!(member.id.is_some());
                let id = member.id_string().unwrap();
                let found = repo.find_by_id(&id).await.unwrap().unwrap();
                assert_eq!(found.login_id, "alice");
            }
            other => panic!("expected Created, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_duplicate_login_id_is_rejected() {
        let repo = InMemoryMemberRepository::new();
        repo.create(sample_member("alice", "al")).await.unwrap();

        let result = repo.create(sample_member("alice", "al2")).await.unwrap();

        assert!(matches!(
            result,
            CreateResult::Duplicate(DuplicateField::LoginId)
        ));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_nickname_is_rejected() {
        let repo = InMemoryMemberRepository::new();
        repo.create(sample_member("alice", "al")).await.unwrap();

        let result = repo.create(sample_member("alice2", "al")).await.unwrap();

        assert!(matches!(
            result,
            CreateResult::Duplicate(DuplicateField::Nickname)
        ));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_id_malformed_id_is_validation_error() {
        let repo = InMemoryMemberRepository::new();

        let result = repo.find_by_id("not-an-object-id").await;
        assert!(matches!(result, Err(MemberError::ValidationError(_))));

        // 형식은 올바르지만 존재하지 않는 ID는 부재로 처리
        let missing = ObjectId::new().to_hex();
        assert!(repo.find_by_id(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_login_id_and_nickname() {
        let repo = InMemoryMemberRepository::new();
        repo.create(sample_member("alice", "al")).await.unwrap();

        assert!(repo.find_by_login_id("alice").await.unwrap().is_some());
        assert!(repo.find_by_login_id("bob").await.unwrap().is_none());
        assert!(repo.find_by_nickname("al").await.unwrap().is_some());
        assert!(repo.find_by_nickname("bo").await.unwrap().is_none());
    }
}
