//! Exercises `HttpAccountSource` against a one-shot local HTTP server.

use marquee_core::account::{Account, AccountSource};
use marquee_infrastructure::HttpAccountSource;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves a single canned response and returns the request line it saw.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base_url, handle)
}

#[tokio::test]
async fn test_lists_accounts_in_order() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"data":[{"_id":"a1","name":"Kids"},{"_id":"a2","name":"Dad","avatarUrl":"https://img/dad.png"}]}"#,
    )
    .await;

    let source = HttpAccountSource::new(base_url);
    let accounts = source.list_accounts("u1").await.unwrap();

    assert_eq!(
        accounts,
        vec![
            Account::new("a1", "Kids"),
            Account::new("a2", "Dad").with_avatar("https://img/dad.png"),
        ]
    );
    assert_eq!(
        server.await.unwrap(),
        "GET /api/account/get-all-accounts/u1 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_empty_data_is_not_an_error() {
    let (base_url, _server) = serve_once("200 OK", r#"{"data":[]}"#).await;

    let accounts = HttpAccountSource::new(base_url)
        .list_accounts("u1")
        .await
        .unwrap();
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let (base_url, _server) =
        serve_once("500 Internal Server Error", r#"{"success":false}"#).await;

    let err = HttpAccountSource::new(base_url)
        .list_accounts("u1")
        .await
        .unwrap_err();
    assert!(err.is_http());
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let (base_url, _server) = serve_once("200 OK", "<html>oops</html>").await;

    let err = HttpAccountSource::new(base_url)
        .list_accounts("u1")
        .await
        .unwrap_err();
    assert!(err.is_serialization());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = HttpAccountSource::new(format!("http://{addr}"))
        .list_accounts("u1")
        .await
        .unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_silent_server_times_out_as_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    // Accepts the connection and never answers
    let _server = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let source = HttpAccountSource::new(base_url).with_timeout(Duration::from_millis(200));
    let err = tokio::time::timeout(Duration::from_secs(5), source.list_accounts("u1"))
        .await
        .expect("request should give up on its own timeout")
        .unwrap_err();

    assert!(err.is_transport());
}
