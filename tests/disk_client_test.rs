//! Disk Client HTTP Tests
//!
//! DiskClient が送信するHTTPリクエストとエラー変換のテスト

use diskpush::adapter::disk::client::DiskClient;
use diskpush::domain::errors::RequestError;
use diskpush::domain::repositories::storage_repository::StorageRepository;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "OAuth test-token";

fn create_client(server: &MockServer) -> DiskClient {
    DiskClient::new(&server.uri(), TOKEN, None).unwrap()
}

#[tokio::test]
async fn test_create_folder_sends_authorized_put() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/resources"))
        .and(query_param("path", "TestFolder"))
        .and(header("Authorization", TOKEN))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);

    client.create_folder("TestFolder").await.unwrap();
}

#[tokio::test]
async fn test_create_folder_existing_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/resources"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "По указанному пути \"TestFolder\" уже существует папка с таким именем.",
            "description": "Specified path \"TestFolder\" points to existent directory.",
            "error": "DiskPathPointsToExistentDirectoryError"
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client.create_folder("TestFolder").await.unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert!(err.to_string().contains("уже существует"));
}

#[tokio::test]
async fn test_request_upload_target_returns_href() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resources/upload"))
        .and(query_param("path", "TestFolder/report.pdf"))
        .and(query_param("overwrite", "false"))
        .and(header("Authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "operation_id": "op-1",
            "href": "https://uploader.example/upload-target/abc",
            "method": "PUT",
            "templated": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let href = client
        .request_upload_target("TestFolder", "report.pdf", false)
        .await
        .unwrap();

    assert_eq!(href, "https://uploader.example/upload-target/abc");
}

#[tokio::test]
async fn test_request_upload_target_passes_overwrite() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resources/upload"))
        .and(query_param("overwrite", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "href": "https://uploader.example/x" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let href = client
        .request_upload_target("TestFolder", "x.txt", true)
        .await
        .unwrap();

    assert_eq!(href, "https://uploader.example/x");
}

#[tokio::test]
async fn test_request_upload_target_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resources/upload"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Ресурс уже существует",
            "description": "Resource already exists",
            "error": "DiskResourceAlreadyExistsError"
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .request_upload_target("TestFolder", "a.txt", false)
        .await
        .unwrap_err();

    assert!(err.is_conflict());
}

#[tokio::test]
async fn test_request_upload_target_missing_href() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resources/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "method": "PUT" })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .request_upload_target("TestFolder", "a.txt", false)
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::MissingHref));
}

#[tokio::test]
async fn test_request_upload_target_invalid_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resources/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let err = client
        .request_upload_target("TestFolder", "a.txt", false)
        .await
        .unwrap_err();

    assert!(matches!(err, RequestError::InvalidBody(_)));
}

#[tokio::test]
async fn test_upload_bytes_streams_exact_content() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/upload-target/data.bin"))
        .and(header("Authorization", TOKEN))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    // チャンクサイズをまたぐ大きさ
    let content: Vec<u8> = (0..20_000u32).map(|i| (i % 256) as u8).collect();
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("data.bin");
    fs::write(&file_path, &content).unwrap();
    let file = tokio::fs::File::open(&file_path).await.unwrap();

    let client = create_client(&server);
    let url = format!("{}/upload-target/data.bin", server.uri());
    client
        .upload_bytes(&url, file, content.len() as u64)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body, content);
    assert_eq!(
        requests[0]
            .headers
            .get("content-length")
            .and_then(|v| v.to_str().ok()),
        Some("20000")
    );
}

#[tokio::test]
async fn test_upload_bytes_empty_file() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/upload-target/empty"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("empty");
    fs::write(&file_path, b"").unwrap();
    let file = tokio::fs::File::open(&file_path).await.unwrap();

    let client = create_client(&server);
    let url = format!("{}/upload-target/empty", server.uri());
    client.upload_bytes(&url, file, 0).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_upload_bytes_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("a.txt");
    fs::write(&file_path, b"abc").unwrap();
    let file = tokio::fs::File::open(&file_path).await.unwrap();

    let client = create_client(&server);
    let url = format!("{}/upload-target/a.txt", server.uri());
    let err = client.upload_bytes(&url, file, 3).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("Internal Server Error"));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // 予約済みポートで待ち受けているサーバーはない
    let client = DiskClient::new("http://127.0.0.1:1", TOKEN, None).unwrap();

    let err = client.create_folder("TestFolder").await.unwrap_err();

    assert!(matches!(err, RequestError::Transport(_)));
    assert_eq!(err.status(), None);
}
