use std::time::Duration;
use symptom_triage::config::{AppConfig, RemoteConfig};
use symptom_triage::model::RemoteError;
use symptom_triage::service::{RemoteAnalyzer, SymptomAnalyzer};
use symptom_triage::{AnalysisService, AnalysisSource, Level};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const REMOTE_BODY: &str = r#"{
    "possibleConditions": [{ "condition": "Influenza", "confidence": 88, "severity": "Medium" }],
    "recommendations": ["Drink fluids"],
    "urgency": "Medium",
    "nextSteps": "See a provider if it lasts."
}"#;

/// Reads one HTTP request (headers plus Content-Length body) and returns it.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return text;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Serves a single canned response and hands back the base URL plus the
/// request the server received.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });
    (format!("http://{}", addr), handle)
}

fn remote_config(base_url: String, timeout_seconds: u64) -> AppConfig {
    AppConfig {
        remote: Some(RemoteConfig {
            base_url,
            timeout_seconds,
        }),
        catalog_path: None,
    }
}

#[tokio::test]
async fn remote_result_is_used_when_available() {
    let (base_url, server) = serve_once("200 OK", REMOTE_BODY).await;
    let service = AnalysisService::from_config(&remote_config(base_url, 5)).unwrap();

    let report = service.analyze("aches and chills").await.unwrap();
    assert_eq!(report.source, AnalysisSource::Remote);
    assert_eq!(report.result.possible_conditions[0].name, "Influenza");
    assert_eq!(report.result.urgency, Level::Medium);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /analyze "), "{}", request);
    assert!(request.contains(r#"{"symptoms":"aches and chills"}"#), "{}", request);
}

#[tokio::test]
async fn server_error_falls_back() {
    let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;
    let service = AnalysisService::from_config(&remote_config(base_url, 5)).unwrap();

    let report = service.analyze("chest pain").await.unwrap();
    assert_eq!(report.source, AnalysisSource::Fallback);
    assert_eq!(report.result.urgency, Level::High);
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let (base_url, server) = serve_once("200 OK", r#"{"unexpected": true}"#).await;
    let analyzer = RemoteAnalyzer::new(&RemoteConfig {
        base_url: base_url.clone(),
        timeout_seconds: 5,
    })
    .unwrap();
    let err = analyzer.analyze("rash").await.unwrap_err();
    assert!(matches!(err, RemoteError::Decode(_)), "{:?}", err);
    server.await.unwrap();

    let (base_url, server) = serve_once("200 OK", "not json").await;
    let service = AnalysisService::from_config(&remote_config(base_url, 5)).unwrap();
    let report = service.analyze("rash").await.unwrap();
    assert_eq!(report.source, AnalysisSource::Fallback);
    assert_eq!(report.result.possible_conditions[0].name, "Contact Dermatitis");
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_service_falls_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = remote_config(format!("http://{}", addr), 5);
    let service = AnalysisService::from_config(&config).unwrap();
    let report = service.analyze("I feel weird today").await.unwrap();
    assert_eq!(report.source, AnalysisSource::Fallback);
    assert_eq!(report.result.possible_conditions[0].name, "General Malaise");
}

#[tokio::test]
async fn silent_service_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let analyzer = RemoteAnalyzer::new(&RemoteConfig {
        base_url: format!("http://{}", addr),
        timeout_seconds: 1,
    })
    .unwrap();
    let err = analyzer.analyze("fever").await.unwrap_err();
    assert!(matches!(err, RemoteError::Timeout), "{:?}", err);
    server.abort();
}
