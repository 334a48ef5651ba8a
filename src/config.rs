//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목 (모두 선택, 기본값 있음):
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 8080)
//! - `DATA_COUNT`: `/data`가 Generator에 요청할 원소 개수 (기본값: 100)

use crate::server::DEFAULT_DATA_COUNT;
use std::env;

/// 기본 포트 번호
pub const DEFAULT_PORT: u16 = 8080;

/// 기본 바인딩 주소
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후 바뀌지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
    /// `/data` 요청마다 Generator에 전달할 개수
    /// 요청이 아니라 시작 시점에 고정됩니다. 음수도 그대로 전달됩니다.
    pub data_count: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_count: DEFAULT_DATA_COUNT,
        }
    }
}

impl Config {
    /// 프로세스 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 만듭니다.
    ///
    /// 테스트에서 프로세스 환경변수를 건드리지 않고 파싱 규칙을 검증할 수 있습니다.
    /// 값이 없거나 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            // .parse(): 문자열을 다른 타입으로 파싱. .ok()로 실패를 None으로 바꿉니다.
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            data_count: lookup("DATA_COUNT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.data_count),
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
