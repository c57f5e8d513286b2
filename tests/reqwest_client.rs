#![cfg(not(target_arch = "wasm32"))]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use wavescan::{
    ApiConfig, HttpClient, HttpMethod, HttpRequest, MenuError, ReqwestHttpClient, WavescanApi,
};
use wavescan_shared::Session;

/// 单连接的本地 HTTP 服务：返回固定响应，并把收到的原始请求交回给测试
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            if request_complete(&raw) {
                break;
            }
        }

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
    });

    (format!("http://{}", addr), rx)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(head_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..head_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= head_end + 4 + content_length
}

#[tokio::test]
async fn test_reqwest_client_sends_headers_and_body() {
    let (base, received) = serve_once("HTTP/1.1 201 Created", r#"{"id":"c9","name":"Soups"}"#).await;
    let client = ReqwestHttpClient::new();

    let req = HttpRequest::new(&format!("{}/store/s1/category", base), HttpMethod::Post)
        .with_header("Authorization", "Bearer tok")
        .with_body(r#"{"name":"Soups"}"#.to_string());
    let resp = client.send(req).await.unwrap();

    assert_eq!(resp.status, 201);
    assert!(resp.is_success());
    assert_eq!(resp.body, r#"{"id":"c9","name":"Soups"}"#);

    let raw = received.await.unwrap();
    assert!(raw.starts_with("POST /store/s1/category HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("authorization: bearer tok"));
    assert!(raw.ends_with(r#"{"name":"Soups"}"#));
}

#[tokio::test]
async fn test_api_over_reqwest_maps_server_error() {
    let (base, _received) = serve_once(
        "HTTP/1.1 401 Unauthorized",
        r#"{"message":"Token expired"}"#,
    )
    .await;
    let api = WavescanApi::new(ReqwestHttpClient::new(), ApiConfig::new(base))
        .with_session(Session::new("old", "s1"));

    let err = api.list_categories().await.unwrap_err();
    assert_eq!(
        err,
        MenuError::Server {
            status: 401,
            message: Some("Token expired".into())
        }
    );
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // 绑定后立即释放端口，连接会被拒绝
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ReqwestHttpClient::new();
    let req = HttpRequest::new(&format!("http://{}/store/s1/product", addr), HttpMethod::Get);
    let err = client.send(req).await.unwrap_err();
    assert!(matches!(err, MenuError::Network(_)));
}
