//! # 데이터 생성(Data) 핸들러
//!
//! 주입된 `Generator`에 페이로드 생성을 맡기고 그 결과를 그대로 응답합니다.
//!
//! ## 엔드포인트
//! - `ANY /data` → Generator가 만든 JSON 바이트 (`application/json`)
//!
//! ## 실패 응답 (모두 HTTP 500, 일반 텍스트)
//! - Generator 미설정 → `Generator is not set`
//! - 생성 실패 → `Error during data generation: <원인>`
//! - 응답 조립 실패 → `Error during data retrieval: <원인>`
//!
//! 응답이 HTTP 계층으로 넘어간 뒤의 전송 실패(클라이언트 연결 끊김 등)는
//! 두 번째 응답으로 바꿀 수 없으므로 클라이언트에 도달하지 못할 수 있습니다.

use crate::{error::AppError, generator::Generator};
use axum::{
    body::Body,
    debug_handler,
    extract::State,
    http::{header, StatusCode},
    response::Response,
};
use std::{fmt, sync::Arc};

/// `/data` 핸들러의 상태
///
/// 생성 시점에 개수와 Generator가 고정되며 이후 바뀌지 않습니다.
/// `Arc<dyn Generator>`: 트레이트 객체를 여러 요청이 공유하도록 참조 카운트로 감쌉니다.
/// Axum의 State Extractor가 요청마다 clone하므로 `Clone`이 필요합니다.
#[derive(Clone)]
pub struct DataGenerationHandler {
    count: i64,
    generator: Option<Arc<dyn Generator>>,
}

impl DataGenerationHandler {
    /// 핸들러를 만듭니다.
    ///
    /// Generator가 없어도(`None`) 성공합니다. 없는 상태는 `/data` 요청 시점의
    /// 런타임 에러일 뿐 조립 에러가 아닙니다.
    pub fn new(count: i64, generator: Option<Arc<dyn Generator>>) -> Result<Self, AppError> {
        Ok(Self { count, generator })
    }

    /// Generator를 실행해 페이로드를 얻습니다.
    ///
    /// Generator는 동기 함수이므로 Tokio의 블로킹 스레드 풀에서 실행합니다.
    /// 오래 걸리는 Generator도 해당 요청만 붙잡고 다른 요청의 비동기 워커는 막지 않습니다.
    async fn generate(&self) -> Result<Vec<u8>, AppError> {
        // Generator 확인은 어떤 생성 로직보다 먼저 합니다.
        let generator = self.generator.clone().ok_or(AppError::GeneratorNotSet)?;
        let count = self.count;

        tracing::debug!(count, "Generating data");

        tokio::task::spawn_blocking(move || generator.generate(count))
            .await
            // JoinError: Generator 안에서 패닉이 발생한 경우
            .map_err(|e| AppError::Generation(e.into()))?
            .map_err(AppError::Generation)
    }
}

impl fmt::Debug for DataGenerationHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataGenerationHandler")
            .field("count", &self.count)
            .field("generator", &self.generator.as_ref().map(|_| "<dyn Generator>"))
            .finish()
    }
}

/// `ANY /data` — 설정된 개수만큼 데이터를 생성해 반환합니다.
///
/// 개수는 요청이 아닌 핸들러 상태에서 가져옵니다.
/// 생성된 바이트는 검증이나 재인코딩 없이 그대로 본문이 됩니다.
///
/// `#[debug_handler]`: 핸들러 시그니처가 Axum 요구사항에 맞지 않으면
/// 읽기 쉬운 컴파일 에러를 보여줍니다.
#[debug_handler]
pub async fn generate_data(
    State(handler): State<DataGenerationHandler>,
) -> Result<Response, AppError> {
    let data = handler.generate().await?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(data))
        .map_err(|e| AppError::Retrieval(e.to_string()))
}
