//! 회원 요청 DTO 모듈

pub mod sign_up_request;

pub use sign_up_request::SignUpRequest;
