//! # 헬스체크(Health Check) 핸들러
//!
//! 서버가 정상적으로 동작하는지 확인하는 엔드포인트입니다.
//!
//! ## 엔드포인트
//! - `ANY /healthcheck` → `{"appName":"Deidata","status":"OK"}`
//!
//! HTTP 메서드와 요청 본문은 보지 않습니다.

use crate::{error::AppError, models::HealthStatus};
use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// `ANY /healthcheck` — 서버 상태를 확인합니다.
///
/// Extractor 없이 고정된 JSON만 반환하며 상태를 갖지 않습니다.
/// 본문 끝에는 JSON 인코더처럼 줄바꿈 하나가 붙습니다.
///
/// 직렬화에 실패하면 `AppError::Serialization` → HTTP 500 `Unexpected Error`.
/// 고정된 구조체라 실제로는 일어나지 않습니다.
pub async fn healthcheck() -> Result<Response, AppError> {
    let mut body = serde_json::to_vec(&HealthStatus::ok())?;
    body.push(b'\n');

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
