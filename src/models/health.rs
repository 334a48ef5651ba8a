use serde::Serialize;

/// 헬스체크 응답에 담기는 애플리케이션 이름
pub const APP_NAME: &str = "Deidata";

/// 정상 상태를 나타내는 고정 문자열
pub const STATUS_OK: &str = "OK";

/// 헬스체크 응답 본문
///
/// 요청마다 새로 만들어지고 직렬화 후 버려집니다.
///
/// `#[serde(rename_all = "camelCase")]`: Rust의 snake_case 필드명을
/// JSON의 camelCase 키로 바꿉니다. (`app_name` → `appName`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub app_name: String,
    pub status: String,
}

impl HealthStatus {
    /// 항상 `{"appName": "Deidata", "status": "OK"}`인 값을 만듭니다.
    pub fn ok() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            status: STATUS_OK.to_string(),
        }
    }
}
