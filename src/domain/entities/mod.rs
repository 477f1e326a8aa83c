//! 도메인 엔티티 모듈

pub mod members;
