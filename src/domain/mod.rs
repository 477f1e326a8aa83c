//! 도메인 계층
//!
//! 회원 서비스의 도메인 모델을 정의합니다.
//!
//! - [`entities`] - 영속화되는 도메인 엔티티 (Member)
//! - [`dto`] - 요청 데이터 전송 객체 (입력 검증 포함)
//! - [`models`] - 워크플로우 결과 모델 (RegisterOutcome)

pub mod dto;
pub mod entities;
pub mod models;
