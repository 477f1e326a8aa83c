//! 서비스 계층
//!
//! 비즈니스 로직을 담당하는 서비스들을 정의합니다.

pub mod members;
