//! 실제 TCP 소켓 위에서 서버를 띄우는 테스트

mod common;

use common::DummyGenerator;
use deidata::{bind, build_router, new_server, run};
use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

/// 로그 출력을 메모리에 모으는 writer
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// HTTP/1.1 요청 하나를 보내고 연결이 닫힐 때까지 응답 전체를 읽습니다.
async fn raw_request(addr: std::net::SocketAddr, method: &str, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

#[tokio::test]
async fn run_serves_healthcheck_and_data_over_tcp() {
    let listener = bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(2, Some(Arc::new(DummyGenerator))).unwrap();
    tokio::spawn(run(listener, app));

    let health = raw_request(addr, "GET", "/healthcheck").await;
    assert!(health.starts_with("HTTP/1.1 200 OK\r\n"), "{health}");
    assert!(
        health.to_ascii_lowercase().contains("content-type: application/json\r\n"),
        "{health}"
    );
    assert!(health.ends_with("\r\n\r\n{\"appName\":\"Deidata\",\"status\":\"OK\"}\n"), "{health}");

    let data = raw_request(addr, "POST", "/data").await;
    assert!(data.starts_with("HTTP/1.1 200 OK\r\n"), "{data}");
    assert!(data.ends_with(
        "\r\n\r\n[{\"someNum\":0,\"someText\":\"SomeText\"},{\"someNum\":1,\"someText\":\"SomeText\"}]"
    ), "{data}");
}

#[tokio::test]
async fn run_without_generator_answers_data_with_fixed_message() {
    let listener = bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(run(listener, new_server(None).unwrap()));

    let data = raw_request(addr, "GET", "/data").await;
    assert!(data.starts_with("HTTP/1.1 500 Internal Server Error\r\n"), "{data}");
    assert!(data.ends_with("\r\n\r\nGenerator is not set\n"), "{data}");

    let health = raw_request(addr, "GET", "/healthcheck").await;
    assert!(health.starts_with("HTTP/1.1 200 OK\r\n"), "{health}");
}

#[tokio::test]
async fn run_logs_startup_line_with_bound_address() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    // #[tokio::test]는 단일 스레드 런타임이므로 spawn된 태스크도 이 구독자를 씁니다.
    let _guard = tracing::subscriber::set_default(subscriber);

    let listener = bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(run(listener, new_server(None).unwrap()));

    // 응답을 받았다면 run은 이미 시작 로그를 남긴 뒤입니다.
    let health = raw_request(addr, "GET", "/healthcheck").await;
    assert!(health.starts_with("HTTP/1.1 200 OK\r\n"), "{health}");
    assert!(
        logs.contents().contains(&format!("Starting server on {addr}")),
        "{}",
        logs.contents()
    );
}

#[tokio::test]
async fn bind_fails_when_address_is_in_use() {
    let occupied = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = occupied.local_addr().unwrap();

    let err = bind(&addr.to_string()).await.unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::AddrInUse);
}

#[tokio::test]
async fn bind_rejects_malformed_address() {
    assert!(bind("not an address").await.is_err());
}
