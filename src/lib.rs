//! # Deidata 라이브러리
//!
//! 헬스체크와 데이터 생성 엔드포인트를 제공하는 작은 HTTP 서비스입니다.
//! 바이너리(`main.rs`)는 이 라이브러리의 라우터를 가져다 리스너에 연결만 합니다.
//!
//! 구성:
//! - `config`: 환경변수 기반 설정
//! - `error`: 에러 타입과 HTTP 응답 변환
//! - `generator`: `/data` 페이로드를 만드는 교체 가능한 전략(트레이트)
//! - `models`: 응답 데이터 구조체
//! - `routes`: HTTP 핸들러
//! - `server`: 라우터 조립과 서버 실행
//!
//! 구체적인 `Generator` 구현은 이 크레이트를 사용하는 애플리케이션이 주입합니다.

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use generator::{BoxError, Generator, GeneratorFn};
pub use server::{bind, build_router, new_server, run, DEFAULT_DATA_COUNT};
