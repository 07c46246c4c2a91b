// SPDX-License-Identifier: MPL-2.0
//! Client requests against a throwaway HTTP/1.1 server on localhost.

use panel_kit::error::Error;
use panel_kit::http::{Client, Params, Payload, ResponseBody};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves exactly one request with `status` and `body`, and yields the raw
/// request text once the response has been written.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let base_url = format!("http://{}/", listener.local_addr().expect("addr"));

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        request
    });

    (base_url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.expect("read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request_line(request: &str) -> &str {
    request.lines().next().unwrap_or_default()
}

fn request_body(request: &str) -> &str {
    request.split_once("\r\n\r\n").map_or("", |(_, body)| body)
}

#[tokio::test]
async fn get_sends_path_and_serialized_query() {
    let (base_url, server) = serve_once("200 OK", r#"{"ok":true}"#).await;
    let client = Client::new(base_url).unwrap();
    let params = Params::new()
        .with("q", "a b")
        .with("page", 2_i64)
        .with("empty", "")
        .with("flag", false);

    let body = client.get("api/items", &params).await.unwrap();

    assert_eq!(body, ResponseBody::Json(json!({"ok": true})));
    let request = server.await.unwrap();
    assert_eq!(
        request_line(&request),
        "GET /api/items?q=a%20b&page=2 HTTP/1.1"
    );
}

#[tokio::test]
async fn get_without_params_keeps_separator() {
    let (base_url, server) = serve_once("200 OK", "[]").await;
    let client = Client::new(base_url).unwrap();

    let body = client.get("status", &Params::new()).await.unwrap();

    assert_eq!(body, ResponseBody::Json(json!([])));
    let request = server.await.unwrap();
    assert!(request_line(&request).starts_with("GET /status? "));
}

#[tokio::test]
async fn post_serializes_structured_body() {
    let (base_url, server) = serve_once("200 OK", r#"{"saved":1}"#).await;
    let client = Client::new(base_url).unwrap();

    let body = client.post("save", json!({"x": 1})).await.unwrap();

    assert_eq!(body.as_json(), Some(&json!({"saved": 1})));
    let request = server.await.unwrap();
    assert_eq!(request_line(&request), "POST /save HTTP/1.1");
    assert_eq!(request_body(&request), r#"{"x":1}"#);
    assert!(request
        .to_ascii_lowercase()
        .contains("content-type: text/plain;charset=utf-8"));
}

#[tokio::test]
async fn post_sends_text_body_verbatim() {
    let (base_url, server) = serve_once("200 OK", "done").await;
    let client = Client::new(base_url).unwrap();

    let body = client.post("raw", Payload::Text("raw".into())).await.unwrap();

    assert_eq!(body.as_text(), Some("done"));
    let request = server.await.unwrap();
    assert_eq!(request_body(&request), "raw");
}

#[tokio::test]
async fn post_sends_json_string_unquoted() {
    let (base_url, server) = serve_once("200 OK", "ok").await;
    let client = Client::new(base_url).unwrap();

    client.post("raw", json!("raw")).await.unwrap();

    let request = server.await.unwrap();
    assert_eq!(request_body(&request), "raw");
}

#[tokio::test]
async fn non_json_body_falls_back_to_text() {
    let (base_url, server) = serve_once("200 OK", "not json").await;
    let client = Client::new(base_url).unwrap();

    let body = client.get("x", &Params::new()).await.unwrap();

    assert_eq!(body, ResponseBody::Text("not json".into()));
    server.await.unwrap();
}

#[tokio::test]
async fn error_status_is_parsed_like_success() {
    let (base_url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let client = Client::new(base_url).unwrap();

    let body = client.get("fail", &Params::new()).await.unwrap();

    assert_eq!(body.as_json(), Some(&json!({"error": "boom"})));
    server.await.unwrap();
}

#[tokio::test]
async fn custom_parser_sees_the_raw_response() {
    let (base_url, server) = serve_once("404 Not Found", "missing").await;
    let client = Client::new(base_url).unwrap();

    let status = client
        .get_with("gone", &Params::new(), |response| async move {
            Ok::<_, Error>(response.status().as_u16())
        })
        .await
        .unwrap();

    assert_eq!(status, 404);
    server.await.unwrap();
}

#[tokio::test]
async fn custom_parser_on_post_can_reject() {
    let (base_url, server) = serve_once("503 Service Unavailable", "later").await;
    let client = Client::new(base_url).unwrap();

    let result = client
        .post_with("queue", "job", |response| async move {
            if response.status().is_success() {
                Ok(())
            } else {
                Err(Error::Config(format!("status {}", response.status())))
            }
        })
        .await;

    assert!(matches!(result, Err(Error::Config(message)) if message.contains("503")));
    server.await.unwrap();
}

#[tokio::test]
async fn base_url_change_applies_to_later_requests() {
    let (base_url, server) = serve_once("200 OK", "ok").await;
    let mut client = Client::new("http://127.0.0.1:9/unused/").unwrap();
    client.set_base_url(format!("{base_url}v2/"));

    client.get("ping", &Params::new()).await.unwrap();

    let request = server.await.unwrap();
    assert!(request_line(&request).starts_with("GET /v2/ping?"));
}
