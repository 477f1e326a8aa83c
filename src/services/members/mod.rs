//! 회원 서비스 모듈

pub mod member_service;

pub use member_service::MemberService;
