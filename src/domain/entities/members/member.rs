//! Member Entity Implementation
//!
//! 회원 엔티티의 핵심 구현체입니다.
//! 로그인 ID/비밀번호 기반 자격증명과 회원 프로필 정보를 하나의 문서로 표현합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 회원 엔티티
///
/// 시스템의 모든 회원을 표현하는 핵심 도메인 엔티티입니다.
/// 비밀번호는 생성 시점에 해싱된 다이제스트 형태로만 보관되며,
/// 평문은 어떤 경로로도 영속화되지 않습니다.
///
/// ## 유니크 제약
///
/// - `login_id`: 전체 회원에 대해 유니크
/// - `nickname`: 전체 회원에 대해 유니크
///
/// ## 생명주기
///
/// 회원가입으로 한 번 생성되며, 이후에는 로그인 검증과 조회에만 사용됩니다.
/// 수정/삭제 연산은 정의되어 있지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 ID (unique)
    pub login_id: String,
    /// 회원 이름
    pub name: String,
    /// 닉네임 (unique)
    pub nickname: String,
    /// 해시된 비밀번호 (평문은 절대 저장되지 않음)
    pub password_hash: String,
    /// 주소
    pub address: String,
    /// 전화번호
    pub phone_number: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Member {
    /// 새 회원 생성
    ///
    /// 가입 요청 필드와 해싱된 비밀번호로 회원 엔티티를 생성합니다.
    /// `id`는 저장소가 생성 시점에 할당합니다.
    pub fn new(
        login_id: String,
        name: String,
        nickname: String,
        password_hash: String,
        address: String,
        phone_number: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            login_id,
            name,
            nickname,
            password_hash,
            address,
            phone_number,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
