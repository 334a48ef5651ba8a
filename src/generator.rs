//! # 데이터 생성 전략(Generator) 모듈
//!
//! `/data` 엔드포인트가 돌려줄 페이로드를 만드는 **교체 가능한 전략**입니다.
//! 이 크레이트는 구체적인 구현을 제공하지 않습니다.
//! 가짜 데이터 라이브러리나 DB 기반 생성기 등은 사용하는 쪽에서 주입합니다.
//!
//! 두 가지 방법으로 Generator를 만들 수 있습니다:
//! - 구조체에 `Generator` 트레이트를 직접 구현
//! - 일반 함수/클로저를 `GeneratorFn`으로 감싸기

use std::fmt;

/// Generator가 반환하는 범용 에러 타입
///
/// `Box<dyn Error>`: 어떤 에러 타입이든 담을 수 있는 트레이트 객체입니다.
/// `Send + Sync`를 붙여야 스레드 사이(spawn_blocking)로 넘길 수 있습니다.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 요청된 개수만큼 데이터를 생성해 직렬화된 바이트로 돌려주는 전략
///
/// 반환된 바이트는 응답 본문에 **그대로** 쓰입니다.
/// 핸들러는 내용을 검증하거나 다시 인코딩하지 않습니다.
///
/// `count`는 검증 없이 전달됩니다. 0이나 음수를 어떻게 다룰지는 구현체가 정합니다.
///
/// 하나의 인스턴스가 여러 요청에서 동시에 공유되므로 `Send + Sync`가 필요합니다.
pub trait Generator: Send + Sync {
    fn generate(&self, count: i64) -> Result<Vec<u8>, BoxError>;
}

/// 일반 함수나 클로저를 `Generator`로 쓰기 위한 어댑터
///
/// ```
/// use deidata::{BoxError, Generator, GeneratorFn};
///
/// let gen = GeneratorFn(|count: i64| Ok::<_, BoxError>(format!("[{count}]").into_bytes()));
/// assert_eq!(gen.generate(3).unwrap(), b"[3]");
/// ```
#[derive(Clone, Copy)]
pub struct GeneratorFn<F>(pub F);

impl<F> Generator for GeneratorFn<F>
where
    F: Fn(i64) -> Result<Vec<u8>, BoxError> + Send + Sync,
{
    fn generate(&self, count: i64) -> Result<Vec<u8>, BoxError> {
        (self.0)(count)
    }
}

// 클로저 타입은 Debug를 구현하지 않으므로 직접 구현합니다.
impl<F> fmt::Debug for GeneratorFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GeneratorFn")
    }
}
