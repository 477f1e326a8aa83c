//! 회원 엔티티 모듈

pub mod member;

pub use member::Member;
