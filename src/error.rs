//! # 에러 처리 모듈
//!
//! 요청 처리 중 발생할 수 있는 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 기존 클라이언트와의 호환을 위해 에러 응답 본문은 **고정된 문자열**이며,
//! JSON이 아닌 일반 텍스트(`text/plain`)에 줄바꿈(`\n`)이 붙습니다.

use crate::generator::BoxError;
use axum::{
    http::{header, HeaderValue, StatusCode}, // HTTP 상태 코드와 헤더 이름
    response::{IntoResponse, Response},      // Axum의 응답 변환 트레이트
};
use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

/// 직렬화 실패 시 클라이언트에 보내는 메시지
///
/// 실제 원인은 로그에만 남기고 클라이언트에는 이 문구만 보냅니다.
pub const UNEXPECTED_ERROR: &str = "Unexpected Error";

// #[derive(Debug, Error)]:
// - Debug: 디버깅용 출력 ({:?})
// - Error (thiserror): std::error::Error 트레이트를 자동 구현.
//   #[error("...")] 어트리뷰트로 Display 메시지도 자동 생성합니다.
//   아래 메시지 문자열은 HTTP 응답 본문에 그대로 쓰이므로 바꾸면 안 됩니다.

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
/// 모든 variant는 HTTP 500으로 변환되며 재시도는 없습니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// `/data`에 Generator가 주입되지 않은 상태
    #[error("Generator is not set")]
    GeneratorNotSet,

    /// Generator가 에러를 반환했거나 실행 도중 패닉이 발생함
    /// {0}은 첫 번째 필드(원인 에러)의 Display 출력입니다.
    #[error("Error during data generation: {0}")]
    Generation(BoxError),

    /// 생성은 성공했지만 응답을 만들지 못함
    #[error("Error during data retrieval: {0}")]
    Retrieval(String),

    /// 헬스체크 본문 직렬화 실패
    /// #[from]: serde_json::Error → AppError::Serialization 자동 변환
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    /// AppError를 HTTP 500 응답으로 변환합니다.
    ///
    /// 서버 측 에러(Generation, Retrieval, Serialization)는 로그에도 기록합니다.
    /// Generator 미설정은 설정 상태일 뿐이므로 응답만 보냅니다.
    fn into_response(self) -> Response {
        let message = match self {
            AppError::GeneratorNotSet => self.to_string(),
            AppError::Generation(ref e) => {
                tracing::error!("Data generation failed: {}", e);
                self.to_string()
            }
            AppError::Retrieval(ref e) => {
                tracing::error!("Data retrieval failed: {}", e);
                self.to_string()
            }
            AppError::Serialization(ref e) => {
                tracing::error!("Serialization error: {}", e);
                // 클라이언트에는 일반적인 메시지만 반환 (내부 구현 노출 방지)
                UNEXPECTED_ERROR.to_string()
            }
        };

        plain_text_error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// 일반 텍스트 에러 응답을 만듭니다.
///
/// 본문 끝에 줄바꿈을 붙이고, 브라우저가 내용을 추측하지 않도록
/// `X-Content-Type-Options: nosniff`를 설정합니다.
pub(crate) fn plain_text_error(status: StatusCode, message: impl Into<String>) -> Response {
    let mut body = message.into();
    body.push('\n');

    (
        status,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        ],
        body,
    )
        .into_response()
}
