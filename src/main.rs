//! # Deidata 웹 서버 진입점
//!
//! 이 파일은 Deidata 애플리케이션의 **시작점(entry point)**입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 라우터 조립 (Generator 없이)
//! 5. HTTP 서버 시작
//!
//! 구체적인 Generator가 없으므로 `/data`는 항상 500 `Generator is not set`을
//! 반환합니다. 실제 Generator는 라이브러리를 가져다 쓰는 애플리케이션이 주입합니다.

use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use deidata::{config::Config, server};
use tower_http::trace::TraceLayer; // HTTP 요청/응답 로깅 미들웨어
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

// #[tokio::main]: 비동기 런타임을 시작하는 어트리뷰트 매크로
// 요청마다 Tokio 태스크 하나가 배정됩니다.
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG 환경변수가 없으면 deidata, tower_http, axum 모듈을 debug 레벨로 설정
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deidata=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();

    // ── 4단계: 라우터 조립 ──
    // Generator 없이도 조립은 성공합니다. 실패하면 로그를 남기고 0이 아닌 코드로 종료합니다.
    let app = server::build_router(config.data_count, None)
        .inspect_err(|e| tracing::error!("Failed to create server: {}", e))?
        .layer(TraceLayer::new_for_http()); // HTTP 요청/응답 자동 로깅

    // ── 5단계: 서버 시작 ──
    // 바인딩 실패는 치명적입니다. 재시도 없이 에러를 전파하여 프로세스를 종료합니다.
    let listener = server::bind(&config.addr()).await?;
    server::run(listener, app).await?;

    Ok(())
}
