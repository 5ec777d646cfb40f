//! SMTP transport tests against a local one-shot ESMTP server

mod common;

use common::{serve_smtp_once, smtp_config};
use trafficjam::{AlertMailer, ErrorCategory, LocalIdentity};

fn auth_attempts(received: &[String]) -> usize {
    received
        .iter()
        .filter(|line| line.to_ascii_uppercase().starts_with("AUTH"))
        .count()
}

#[tokio::test]
async fn test_rejected_auth_is_mail_error_without_retry() {
    let (port, server) = serve_smtp_once("127.0.0.1").await;
    let mailer = AlertMailer::smtp(&smtp_config("127.0.0.1", port)).unwrap();

    let err = mailer
        .send_alert(&LocalIdentity::new("alice", "workstation"), "25 mins")
        .await
        .unwrap_err();
    drop(mailer);

    assert_eq!(err.category(), ErrorCategory::Mail);
    assert!(err.to_string().contains("535"));

    let received = server.await.unwrap();
    assert!(received[0].to_ascii_uppercase().starts_with("EHLO"));
    assert_eq!(auth_attempts(&received), 1, "commands: {:?}", received);
    assert!(!received.iter().any(|l| l.to_ascii_uppercase().starts_with("MAIL FROM")));
}

// 127.0.0.2 routes to the loopback interface on Linux but is not one of the
// hosts allowed to receive credentials without TLS.
#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_remote_server_without_starttls_never_sees_credentials() {
    let (port, server) = serve_smtp_once("127.0.0.2").await;
    let mailer = AlertMailer::smtp(&smtp_config("127.0.0.2", port)).unwrap();

    let err = mailer
        .send_alert(&LocalIdentity::new("alice", "workstation"), "25 mins")
        .await
        .unwrap_err();
    drop(mailer);

    assert_eq!(err.category(), ErrorCategory::Mail);

    let received = server.await.unwrap();
    assert_eq!(auth_attempts(&received), 0, "commands: {:?}", received);
}
