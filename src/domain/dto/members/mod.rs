//! 회원 관련 DTO 모듈

pub mod request;

pub use request::SignUpRequest;
