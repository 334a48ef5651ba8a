//! # 데이터 모델 모듈
//!
//! HTTP 응답으로 직렬화되는 구조체들을 정의합니다.
//!
//! `/data` 응답은 Generator가 만든 바이트를 그대로 내보내므로
//! 여기에 별도의 모델이 없습니다.

pub mod health;

pub use health::*;
