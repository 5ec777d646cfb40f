//! Shared helpers for integration tests

#![allow(dead_code)]

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use trafficjam::Config;

/// One-shot HTTP server: answers a single request with `status` and `body`,
/// then hands back the raw request head it received.
pub async fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/maps/api/distancematrix/json", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&head).into_owned()
    });

    (url, handle)
}

/// One-shot ESMTP server that never offers STARTTLS, advertises only
/// `AUTH PLAIN` and rejects every AUTH with 535. Hands back every command line
/// it received.
pub async fn serve_smtp_once(bind: &str) -> (u16, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind((bind, 0)).await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let (read_half, mut write_half) = socket.into_split();
        let mut lines = BufReader::new(read_half).lines();
        let mut received = Vec::new();

        write_half.write_all(b"220 fake.test ESMTP\r\n").await.unwrap();

        while let Ok(Some(line)) = lines.next_line().await {
            let verb = line.split_whitespace().next().unwrap_or("").to_ascii_uppercase();
            received.push(line);

            let reply: &[u8] = match verb.as_str() {
                "EHLO" => b"250-fake.test\r\n250 AUTH PLAIN\r\n",
                "HELO" => b"250 fake.test\r\n",
                "AUTH" => b"535 5.7.8 authentication failed\r\n",
                "QUIT" => b"221 bye\r\n",
                _ => b"500 unrecognized\r\n",
            };
            if write_half.write_all(reply).await.is_err() || verb == "QUIT" {
                break;
            }
        }

        received
    });

    (port, handle)
}

/// URL of a local port nothing is listening on
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/maps/api/distancematrix/json", addr)
}

/// Distance-matrix body with one row and one element
pub fn matrix_body(seconds: u64, text: &str) -> String {
    format!(
        r#"{{
            "destination_addresses": ["B"],
            "origin_addresses": ["A"],
            "rows": [{{"elements": [{{
                "distance": {{"text": "30 km", "value": 30000}},
                "duration": {{"text": "20 mins", "value": 1200}},
                "duration_in_traffic": {{"text": "{}", "value": {}}},
                "status": "OK"
            }}]}}],
            "status": "OK"
        }}"#,
        text, seconds
    )
}

pub fn config_json(max_duration: u32, mode: &str) -> String {
    format!(
        r#"{{
            "origins": "Main Street 1",
            "destinations": "B",
            "api_key": "test-key",
            "mode": "{}",
            "avoid": "",
            "traffic_model": "",
            "max_duration": {},
            "smtp": {{"host": "smtp.example.com", "port": 587, "user": "alice", "pass": "pw"}},
            "recipient": "bob@example.com"
        }}"#,
        mode, max_duration
    )
}

/// Config whose SMTP settings point at `host:port`
pub fn smtp_config(host: &str, port: u16) -> Config {
    let mut config = config(20);
    config.smtp.host = host.to_string();
    config.smtp.port = port;
    config.smtp.user = "alice".to_string();
    config.smtp.pass = "hunter2".to_string();
    config
}

pub fn config(max_duration: u32) -> Config {
    Config::from_json(&config_json(max_duration, "")).unwrap()
}
