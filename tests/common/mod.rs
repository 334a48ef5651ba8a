//! 라우터 테스트 공용 도우미
//!
//! 라우터를 소켓 없이 `tower::ServiceExt::oneshot`으로 직접 호출합니다.

#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use deidata::{BoxError, Generator};
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use tower::util::ServiceExt;

/// 테스트 전용 Generator가 만드는 원소
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DummyItem {
    pub some_num: i64,
    pub some_text: String,
}

/// `0..count` 범위마다 `{someNum: i, someText: "SomeText"}`를 만드는 Generator
pub struct DummyGenerator;

impl Generator for DummyGenerator {
    fn generate(&self, count: i64) -> Result<Vec<u8>, BoxError> {
        let items: Vec<DummyItem> = (0..count)
            .map(|i| DummyItem {
                some_num: i,
                some_text: "SomeText".to_string(),
            })
            .collect();
        Ok(serde_json::to_vec(&items)?)
    }
}

/// 항상 같은 메시지로 실패하는 Generator
pub struct FailingGenerator(pub &'static str);

impl Generator for FailingGenerator {
    fn generate(&self, _count: i64) -> Result<Vec<u8>, BoxError> {
        Err(self.0.into())
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Body) -> TestResponse {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, Body::empty()).await
}
