//! 리포지토리 계층
//!
//! 데이터 액세스를 담당하는 리포지토리들을 정의합니다.
//! 서비스 계층은 구체 구현이 아닌 [`members::MemberStore`] trait에만 의존합니다.

pub mod members;
