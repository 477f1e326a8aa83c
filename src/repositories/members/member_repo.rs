//! # 회원 리포지토리 구현 (MongoDB)
//!
//! 회원 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하며, 로그인 ID와 닉네임의 유니크 제약을
//! 유니크 인덱스로 강제합니다.
//!
//! ## 특징
//!
//! - **데이터 무결성**: `login_id`/`nickname` 유니크 인덱스가 중복의 권위
//! - **중복 분류**: E11000 duplicate key 에러를 인덱스 이름으로 분류
//! - **인덱스 기반 조회**: 로그인 ID, 닉네임 조회 최적화

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{
    IndexModel,
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};

use crate::{
    db::Database,
    domain::entities::members::Member,
    errors::MemberError,
};

use super::{CreateResult, DuplicateField, MemberStore};

/// 회원 컬렉션 이름
const MEMBERS_COLLECTION: &str = "members";

/// 로그인 ID 유니크 인덱스 이름
const LOGIN_ID_INDEX: &str = "login_id_unique";

/// 닉네임 유니크 인덱스 이름
const NICKNAME_INDEX: &str = "nickname_unique";

/// 회원 데이터 액세스 리포지토리 (MongoDB)
///
/// `members` 컬렉션에 대한 CRUD 연산을 담당합니다.
///
/// ## 인덱스
///
/// - `login_id_unique`: login_id(오름차순), UNIQUE
/// - `nickname_unique`: nickname(오름차순), UNIQUE
/// - `created_at_desc`: created_at(내림차순)
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, MemberError>`를 반환합니다.
/// 유니크 제약 위반(E11000)은 에러가 아닌 [`CreateResult::Duplicate`]로
/// 분류되며, 그 외의 MongoDB 장애는 `DatabaseError`로 전파됩니다.
pub struct MongoMemberRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl MongoMemberRepository {
    /// 새 리포지토리를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 회원 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> mongodb::Collection<Member> {
        self.db.get_database().collection::<Member>(MEMBERS_COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 회원 컬렉션에 필요한 모든 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행하여
    /// 유니크 제약과 조회 성능을 보장합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 모든 인덱스가 성공적으로 생성됨
    /// * `Err(MemberError::DatabaseError)` - 인덱스 생성 중 오류 발생
    ///
    /// # 주의사항
    ///
    /// 이미 중복 데이터가 있는 컬렉션에서는 유니크 인덱스 생성이 실패합니다.
    pub async fn ensure_indexes(&self) -> Result<(), MemberError> {
        let collection = self.collection();

        // 로그인 ID 유니크 인덱스
        let login_id_index = IndexModel::builder()
            .keys(doc! { "login_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(LOGIN_ID_INDEX.to_string())
                .build())
            .build();

        // 닉네임 유니크 인덱스
        let nickname_index = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(NICKNAME_INDEX.to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([login_id_index, nickname_index, created_at_index])
            .await
            .map_err(|e| MemberError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl MemberStore for MongoMemberRepository {
    /// 로그인 ID로 회원 조회
    ///
    /// 로그인 ID는 시스템 전체에서 유니크하므로 최대 1개의 결과만 반환됩니다.
    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<Member>, MemberError> {
        self.collection()
            .find_one(doc! { "login_id": login_id })
            .await
            .map_err(|e| MemberError::DatabaseError(e.to_string()))
    }

    /// 닉네임으로 회원 조회
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Member>, MemberError> {
        self.collection()
            .find_one(doc! { "nickname": nickname })
            .await
            .map_err(|e| MemberError::DatabaseError(e.to_string()))
    }

    /// ID로 회원 조회
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Member))` - 회원을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 회원이 없는 경우
    /// * `Err(MemberError::ValidationError)` - 잘못된 ObjectId 형식
    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, MemberError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| MemberError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| MemberError::DatabaseError(e.to_string()))
    }

    /// 새 회원 생성
    ///
    /// 유니크 인덱스가 중복의 최종 권위입니다. 삽입 시점에 감지된
    /// E11000 duplicate key 에러는 위반된 인덱스 이름으로 분류되어
    /// `CreateResult::Duplicate`로 반환됩니다.
    async fn create(&self, mut member: Member) -> Result<CreateResult, MemberError> {
        let result = self.collection().insert_one(&member).await;

        match result {
            Ok(inserted) => {
                member.id = inserted.inserted_id.as_object_id();
                Ok(CreateResult::Created(member))
            }
            Err(e) => {
                if let Some(field) = duplicate_field_from_error(&e) {
                    return Ok(CreateResult::Duplicate(field));
                }
                Err(MemberError::DatabaseError(e.to_string()))
            }
        }
    }
}

/// MongoDB 쓰기 에러에서 유니크 제약 위반 필드를 추출합니다.
///
/// E11000(duplicate key) 에러인 경우에만 위반된 인덱스 이름으로 분류하며,
/// 그 외의 에러는 `None`을 반환하여 일반 저장소 장애로 처리되게 합니다.
fn duplicate_field_from_error(err: &mongodb::error::Error) -> Option<DuplicateField> {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
        if write_error.code == 11000 {
            return classify_duplicate_message(&write_error.message);
        }
    }
    None
}

/// duplicate key 에러 메시지에서 위반된 인덱스를 분류합니다.
///
/// MongoDB의 E11000 메시지는 `... index: login_id_unique dup key: ...`
/// 형태로 위반된 인덱스 이름을 포함합니다.
fn classify_duplicate_message(message: &str) -> Option<DuplicateField> {
    if message.contains(LOGIN_ID_INDEX) {
        Some(DuplicateField::LoginId)
    } else if message.contains(NICKNAME_INDEX) {
        Some(DuplicateField::Nickname)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_login_id_duplicate() {
        let message = "E11000 duplicate key error collection: member_service_dev.members \
                       index: login_id_unique dup key: { login_id: \"alice\" }";
        assert_eq!(
            classify_duplicate_message(message),
            Some(DuplicateField::LoginId)
        );
    }

    #[test]
    fn test_classify_nickname_duplicate() {
        let message = "E11000 duplicate key error collection: member_service_dev.members \
                       index: nickname_unique dup key: { nickname: \"al\" }";
        assert_eq!(
            classify_duplicate_message(message),
            Some(DuplicateField::Nickname)
        );
    }

    #[test]
    fn test_unknown_index_is_not_classified() {
        let message = "E11000 duplicate key error collection: other.collection \
                       index: email_unique dup key: { email: \"a@b.c\" }";
        assert_eq!(classify_duplicate_message(message), None);
    }
}
