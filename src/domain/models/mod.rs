//! 워크플로우 결과 모델 모듈

pub mod register_outcome;

pub use register_outcome::RegisterOutcome;
