//! 회원 서비스 백엔드
//!
//! Rust 기반의 회원 관리 핵심 라이브러리입니다.
//! 회원가입(로그인 ID/닉네임 중복 검사 + 비밀번호 해싱)과
//! 로그인 검증(자격증명 조회 + 해시 비교)을 제공합니다.
//!
//! # Features
//!
//! - **회원가입**: 로그인 ID와 닉네임의 전역 유니크 보장, bcrypt 해싱
//! - **로그인 검증**: 저장된 다이제스트와의 상수 시간 비교
//! - **저장소 추상화**: trait 기반 Credential Store (MongoDB / 인메모리)
//! - **교체 가능한 해싱**: `PasswordHasher` trait 기반 해싱 계층
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     Caller      │ ← HTTP/RPC 계층 (이 크레이트 외부)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 회원 워크플로우 (가입/로그인)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MemberStore trait (데이터 액세스)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 영구 저장소 (유니크 인덱스가 권위)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use member_service_backend::repositories::members::member_repo::MongoMemberRepository;
//! use member_service_backend::security::password::BcryptPasswordHasher;
//! use member_service_backend::services::members::member_service::MemberService;
//!
//! let store = Arc::new(MongoMemberRepository::new(database));
//! store.ensure_indexes().await?;
//!
//! let hasher = Arc::new(BcryptPasswordHasher::from_env());
//! let member_service = MemberService::new(store, hasher);
//!
//! let outcome = member_service.register(request).await?;
//! let member = member_service.authenticate("alice", "secret1").await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod security;
pub mod services;
