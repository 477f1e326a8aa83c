//! # 회원 관리 서비스 구현
//!
//! 회원 계정의 가입과 로그인 검증을 담당하는 핵심 비즈니스 로직을 구현합니다.
//! Spring Framework의 `@Service`가 적용된 MemberService 패턴을 참고하여
//! 설계되었으며, 회원가입, 로그인 검증, 조회 기능을 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    MemberService                     │
//! ├─────────────────────────────────────────────────────┤
//! │  ┌───────────────┐  ┌───────────────┐  ┌──────────┐ │
//! │  │  Registration │  │Authentication │  │  Lookup  │ │
//! │  │               │  │               │  │          │ │
//! │  │ • Input Valid │  │ • Id Lookup   │  │ • By Id  │ │
//! │  │ • Dup Check   │  │ • Digest Ver  │  │ • By Nick│ │
//! │  │ • Pw Hash     │  │ • Error Map   │  │          │ │
//! │  │ • Create      │  │               │  │          │ │
//! │  └───────────────┘  └───────────────┘  └──────────┘ │
//! └─────────────────────────────────────────────────────┘
//!           │                      │
//!           ▼                      ▼
//!   Arc<dyn MemberStore>   Arc<dyn PasswordHasher>
//! ```
//!
//! ## 보안 설계 원칙
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지
//! - **솔트 자동 생성**: 레인보우 테이블 공격 방지
//! - **타이밍 공격 방지**: 다이제스트 비교는 해셔의 상수 시간 검증 사용
//! - **중복 방지**: 로그인 ID/닉네임 유니크 제약 (저장소가 최종 권위)

use std::sync::Arc;

use validator::Validate;

use crate::{
    domain::{
        dto::members::SignUpRequest,
        entities::members::Member,
        models::RegisterOutcome,
    },
    errors::MemberError,
    repositories::members::{CreateResult, DuplicateField, MemberStore},
    security::PasswordHasher,
};

/// 회원 관리 비즈니스 로직 서비스
///
/// 회원가입과 로그인 검증 워크플로우를 오케스트레이션합니다.
/// 저장소와 해싱 알고리즘은 trait으로 주입되므로 구현체 교체가 자유롭습니다.
///
/// ## 주요 책임
///
/// 1. **회원가입**: 입력 검증 → 중복 사전 검사 → 비밀번호 해싱 → 레코드 생성
/// 2. **로그인 검증**: 로그인 ID 조회 → 다이제스트 비교 → 에러 분류
/// 3. **조회**: 로그인 ID/닉네임 기반 회원 검색 (부재는 정상 결과)
///
/// ## 동시성
///
/// 서비스 자체는 락을 잡지 않습니다. 사전 중복 검사(check-then-act)는
/// 원자적이지 않으므로, 동시 가입 경쟁의 최종 판정은 저장소의 유니크
/// 제약이 담당하며 쓰기 시점의 중복 신호도 동일한 거부 결과로 수렴합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let member_service = MemberService::new(store, hasher);
///
/// match member_service.register(request).await? {
///     RegisterOutcome::Registered(member) => println!("가입 완료: {}", member.login_id),
///     RegisterOutcome::DuplicateLoginId => println!("이미 사용 중인 로그인 ID입니다"),
///     RegisterOutcome::DuplicateNickname => println!("이미 사용 중인 닉네임입니다"),
/// }
/// ```
pub struct MemberService {
    /// 회원 데이터 액세스 저장소
    member_store: Arc<dyn MemberStore>,
    /// 비밀번호 해싱 능력
    password_hasher: Arc<dyn PasswordHasher>,
}

impl MemberService {
    /// 새 회원 서비스를 생성합니다.
    pub fn new(
        member_store: Arc<dyn MemberStore>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            member_store,
            password_hasher,
        }
    }

    /// 비밀번호 암호화
    ///
    /// 평문 비밀번호를 일방향 다이제스트로 변환합니다.
    /// 솔팅은 해싱 알고리즘이 내부적으로 수행합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 해싱된 다이제스트
    /// * `Err(MemberError::InternalError)` - 해싱 시스템 장애 (치명적, 재시도 없음)
    pub fn encrypt(&self, password: &str) -> Result<String, MemberError> {
        self.password_hasher.hash(password)
    }

    /// 회원가입
    ///
    /// 새로운 회원 계정을 생성합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. **입력 검증**: 요청 필드의 형식 검증
    /// 2. **로그인 ID 중복 검사**: 일치 시 저장소 변경 없이 거부
    /// 3. **닉네임 중복 검사**: 일치 시 저장소 변경 없이 거부
    /// 4. **비밀번호 해싱**: 두 검사가 모두 끝난 후에만 수행
    /// 5. **영구 저장**: 저장소가 식별자를 할당
    ///
    /// 두 중복 검사는 항상 쓰기 이전에 완료됩니다. 동시 가입 경쟁으로
    /// 사전 검사를 통과한 중복이 쓰기 시점에 감지되면(유니크 인덱스 위반),
    /// 동일한 거부 결과로 변환됩니다.
    ///
    /// # Returns
    ///
    /// * `Ok(RegisterOutcome::Registered)` - 가입 성공, 정확히 1개의 레코드 생성
    /// * `Ok(RegisterOutcome::DuplicateLoginId)` - 로그인 ID 중복, 부수효과 없음
    /// * `Ok(RegisterOutcome::DuplicateNickname)` - 닉네임 중복, 부수효과 없음
    /// * `Err(MemberError::ValidationError)` - 입력 형식 오류
    /// * `Err(MemberError::DatabaseError)` - 저장소 장애
    pub async fn register(&self, request: SignUpRequest) -> Result<RegisterOutcome, MemberError> {
        let start_time = std::time::Instant::now();

        request
            .validate()
            .map_err(|e| MemberError::ValidationError(e.to_string()))?;

        // 로그인 ID 중복 검사
        if self
            .member_store
            .find_by_login_id(&request.login_id)
            .await?
            .is_some()
        {
            log::info!("회원가입 거부: 이미 사용 중인 로그인 ID ({})", request.login_id);
            return Ok(RegisterOutcome::DuplicateLoginId);
        }

        // 닉네임 중복 검사
        if self
            .member_store
            .find_by_nickname(&request.nickname)
            .await?
            .is_some()
        {
            log::info!("회원가입 거부: 이미 사용 중인 닉네임 ({})", request.nickname);
            return Ok(RegisterOutcome::DuplicateNickname);
        }

        // 비밀번호 해싱
        let hash_start = std::time::Instant::now();
        let password_hash = self.encrypt(&request.password)?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        // 회원 엔티티 생성
        let member = Member::new(
            request.login_id,
            request.name,
            request.nickname,
            password_hash,
            request.address,
            request.phone_number,
        );

        // 저장 - 쓰기 시점의 유니크 제약 위반도 동일한 거부 결과로 수렴
        let outcome = match self.member_store.create(member).await? {
            CreateResult::Created(created) => {
                log::info!("회원가입 완료: {}", created.login_id);
                RegisterOutcome::Registered(created)
            }
            CreateResult::Duplicate(DuplicateField::LoginId) => {
                log::warn!("회원가입 경쟁 감지: 쓰기 시점 로그인 ID 중복");
                RegisterOutcome::DuplicateLoginId
            }
            CreateResult::Duplicate(DuplicateField::Nickname) => {
                log::warn!("회원가입 경쟁 감지: 쓰기 시점 닉네임 중복");
                RegisterOutcome::DuplicateNickname
            }
        };

        log::debug!("Total registration took: {:?}", start_time.elapsed());
        Ok(outcome)
    }

    /// 로그인 검증
    ///
    /// 로그인 ID와 비밀번호로 회원의 자격증명을 검증합니다.
    /// 실패는 항상 에러로 표현되며 boolean `false`를 반환하지 않습니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Member)` - 인증된 회원 엔티티 (로그인 성공)
    /// * `Err(MemberError::UnknownUser)` - 해당 로그인 ID의 회원 없음
    /// * `Err(MemberError::BadCredential)` - 비밀번호 불일치
    /// * `Err(MemberError::DatabaseError)` - 저장소 장애
    pub async fn authenticate(
        &self,
        login_id: &str,
        password: &str,
    ) -> Result<Member, MemberError> {
        // id 조회
        let member = self
            .member_store
            .find_by_login_id(login_id)
            .await?
            .ok_or_else(|| {
                log::warn!("로그인 실패: 존재하지 않는 로그인 ID ({})", login_id);
                MemberError::UnknownUser(login_id.to_string())
            })?;

        // pw 검증
        let verify_start = std::time::Instant::now();
        let is_valid = self.password_hasher.verify(password, &member.password_hash)?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("로그인 실패: 비밀번호 불일치 ({})", login_id);
            return Err(MemberError::BadCredential);
        }

        log::info!("로그인 성공: {}", login_id);
        Ok(member)
    }

    /// 입력한 로그인 ID로 조회
    ///
    /// 순수 조회 연산입니다. 부재는 에러가 아닌 `Ok(None)`으로 표현되며,
    /// 가입 시의 중복 검사에도 내부적으로 사용됩니다.
    pub async fn find_by_login_id(&self, login_id: &str) -> Result<Option<Member>, MemberError> {
        self.member_store.find_by_login_id(login_id).await
    }

    /// 입력한 닉네임으로 조회
    ///
    /// [`Self::find_by_login_id`]와 동일한 계약이며 닉네임을 키로 사용합니다.
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Member>, MemberError> {
        self.member_store.find_by_nickname(nickname).await
    }
}
