//! # 서버 조립 모듈
//!
//! 두 개의 고정 경로를 핸들러에 연결한 라우터를 만들고,
//! 이미 바인딩된 리스너 위에서 서버를 실행합니다.
//!
//! 라우터 조립은 순수 함수입니다. 소켓이나 전역 상태 없이 테스트할 수 있습니다.

use crate::{
    error::AppError,
    generator::Generator,
    routes::{generate_data, healthcheck, DataGenerationHandler},
};
use axum::{routing::any, Router};
use std::{io, sync::Arc};
use tokio::net::TcpListener;

/// `/data`가 한 번에 요청하는 기본 원소 개수
pub const DEFAULT_DATA_COUNT: i64 = 100;

/// 헬스체크 경로
pub const HEALTHCHECK_PATH: &str = "/healthcheck";

/// 데이터 생성 경로
pub const DATA_PATH: &str = "/data";

/// 기본 개수(`DEFAULT_DATA_COUNT`)로 라우터를 만듭니다.
pub fn new_server(generator: Option<Arc<dyn Generator>>) -> Result<Router, AppError> {
    build_router(DEFAULT_DATA_COUNT, generator)
}

/// `/healthcheck`와 `/data`를 연결한 라우터를 만듭니다.
///
/// `any()`: HTTP 메서드와 관계없이 모든 요청을 핸들러로 보냅니다.
///
/// Generator가 `None`이어도 실패하지 않으며, `/healthcheck`는 정상 동작합니다.
/// 실패할 수 있는 경우는 `/data` 핸들러를 만들 수 없을 때뿐입니다.
pub fn build_router(
    count: i64,
    generator: Option<Arc<dyn Generator>>,
) -> Result<Router, AppError> {
    let data_handler = DataGenerationHandler::new(count, generator)?;

    Ok(Router::new()
        .route(HEALTHCHECK_PATH, any(healthcheck))
        .route(DATA_PATH, any(generate_data))
        // .with_state(): `/data` 핸들러가 State로 DataGenerationHandler를 받습니다.
        .with_state(data_handler))
}

/// 주소에 TCP 리스너를 바인딩합니다.
///
/// 실패는 치명적입니다. 재시도 없이 로그를 남기고 에러를 그대로 돌려주며,
/// 바이너리는 이 에러로 0이 아닌 코드와 함께 종료합니다.
pub async fn bind(addr: &str) -> io::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .inspect_err(|e| tracing::error!("Failed to bind {}: {}", addr, e))
}

/// 바인딩된 리스너로 서버를 실행합니다.
///
/// 시작 로그를 남긴 뒤 요청을 받습니다. 요청마다 별도의 태스크가 처리하며,
/// 프로세스가 끝날 때까지 반환하지 않습니다.
pub async fn run(listener: TcpListener, app: Router) -> io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .await
        .inspect_err(|e| tracing::error!("Server error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_builds_without_generator() {
        assert!(new_server(None).is_ok());
        assert!(build_router(-1, None).is_ok());
    }
}
