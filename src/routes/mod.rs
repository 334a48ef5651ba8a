//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `data`: Generator 기반 데이터 생성
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod data;
pub mod health;

// 핸들러를 재공개하여 `routes::healthcheck`처럼 바로 접근 가능하게 합니다.
pub use data::*;
pub use health::*;
