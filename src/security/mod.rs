//! 보안 모듈
//!
//! 비밀번호 해싱/검증 계층을 제공합니다.

pub mod password;

pub use password::{BcryptPasswordHasher, PasswordHasher};
