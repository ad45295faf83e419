use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Fallback message when a JSON call fails without a server-provided error
pub const REQUEST_FAILED: &str = "Request failed";
/// Fallback message when an upload fails without a server-provided error
pub const UPLOAD_FAILED: &str = "Upload failed";
/// Fallback message when a download fails without a server-provided error
pub const DOWNLOAD_FAILED: &str = "Download failed";
/// Message for transport-level failures (connection refused, DNS, reset)
pub const NETWORK_ERROR: &str = "Network error";

/// Upload bodies are streamed to the transport in chunks of this size
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// The single failure kind of the file server API.
///
/// Carries the message shown to the user: the server's `error` field when
/// present, otherwise one of the fallback constants above.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub path: String,
    pub entries: Vec<DirectoryEntry>,
}

/// A local file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub local_path: PathBuf,
}

impl UploadFile {
    pub fn new(local_path: impl Into<PathBuf>) -> Self {
        Self {
            local_path: local_path.into(),
        }
    }

    /// Name the file is stored under on the server
    pub fn remote_name(&self) -> String {
        self.local_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.local_path.display().to_string())
    }
}

/// Receives upload progress as a fraction in `0.0..=1.0`
pub type ProgressCallback = Arc<dyn Fn(f64) + Send + Sync>;

#[derive(Clone)]
pub struct FileServerClient {
    base_url: String,
    client: Client,
}

impl FileServerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list_url(&self, path: &str) -> String {
        format!("{}/api/list?path={}", self.base_url, urlencoding::encode(path))
    }

    pub fn upload_url(&self, path: &str, overwrite: bool) -> String {
        format!(
            "{}/api/upload?path={}&overwrite={}",
            self.base_url,
            urlencoding::encode(path),
            overwrite
        )
    }

    pub fn file_url(&self, path: &str) -> String {
        format!("{}/api/file?path={}", self.base_url, urlencoding::encode(path))
    }

    /// Send a JSON API request and decode the JSON result
    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, RequestError> {
        let response = request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("transport error: {}", e);
                RequestError::new(NETWORK_ERROR)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!("failed to read response body: {}", e);
            RequestError::new(NETWORK_ERROR)
        })?;

        decode_json_body(status.is_success(), &body)
    }

    pub async fn list_directory(&self, path: &str) -> Result<ListResponse, RequestError> {
        tracing::debug!("GET list path={:?}", path);
        self.call(self.client.get(self.list_url(path))).await
    }

    pub async fn create_directory(&self, path: &str) -> Result<(), RequestError> {
        tracing::debug!("POST mkdir path={:?}", path);
        let url = format!("{}/api/mkdir", self.base_url);
        let _: serde_json::Value = self
            .call(self.client.post(url).body(json!({ "path": path }).to_string()))
            .await?;
        Ok(())
    }

    pub async fn move_entry(&self, from: &str, to: &str) -> Result<(), RequestError> {
        tracing::debug!("POST move from={:?} to={:?}", from, to);
        let url = format!("{}/api/move", self.base_url);
        let _: serde_json::Value = self
            .call(
                self.client
                    .post(url)
                    .body(json!({ "from": from, "to": to }).to_string()),
            )
            .await?;
        Ok(())
    }

    pub async fn delete_entry(&self, path: &str, recursive: bool) -> Result<(), RequestError> {
        tracing::debug!("POST delete path={:?} recursive={}", path, recursive);
        let url = format!("{}/api/delete", self.base_url);
        let _: serde_json::Value = self
            .call(
                self.client
                    .post(url)
                    .body(json!({ "path": path, "recursive": recursive }).to_string()),
            )
            .await?;
        Ok(())
    }

    /// Upload local files into `path` as one multipart request.
    ///
    /// Every file becomes a `file` part. Progress is reported as the
    /// transport pulls chunks from the body, and only when the combined
    /// size is non-zero.
    pub async fn upload_files(
        &self,
        path: &str,
        files: &[UploadFile],
        overwrite: bool,
        progress: ProgressCallback,
    ) -> Result<(), RequestError> {
        let mut contents = Vec::with_capacity(files.len());
        for file in files {
            let data = tokio::fs::read(&file.local_path).await.map_err(|e| {
                RequestError::new(format!("{}: {}", file.local_path.display(), e))
            })?;
            contents.push((file.remote_name(), data));
        }

        let total: u64 = contents.iter().map(|(_, data)| data.len() as u64).sum();
        let sent = Arc::new(AtomicU64::new(0));

        let mut form = multipart::Form::new();
        for (name, data) in contents {
            let length = data.len() as u64;
            let mime = crate::logic::file::guess_mime(&name);
            let body = progress_body(data, total, sent.clone(), progress.clone());
            let part = multipart::Part::stream_with_length(body, length)
                .file_name(name)
                .mime_str(mime)
                .map_err(|e| {
                    tracing::warn!("invalid mime type {}: {}", mime, e);
                    RequestError::new(UPLOAD_FAILED)
                })?;
            form = form.part("file", part);
        }

        tracing::debug!(
            "POST upload path={:?} files={} bytes={} overwrite={}",
            path,
            files.len(),
            total,
            overwrite
        );

        let response = self
            .client
            .post(self.upload_url(path, overwrite))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("upload transport error: {}", e);
                RequestError::new(NETWORK_ERROR)
            })?;

        expect_ok(response, UPLOAD_FAILED).await.map(|_| ())
    }

    /// Fetch the raw bytes of a remote file
    pub async fn download_file(&self, path: &str) -> Result<Vec<u8>, RequestError> {
        tracing::debug!("GET file path={:?}", path);
        let response = self
            .client
            .get(self.file_url(path))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("download transport error: {}", e);
                RequestError::new(NETWORK_ERROR)
            })?;

        expect_ok(response, DOWNLOAD_FAILED).await
    }
}

/// Wrap an in-memory file in a chunked body that reports progress
fn progress_body(
    data: Vec<u8>,
    total: u64,
    sent: Arc<AtomicU64>,
    progress: ProgressCallback,
) -> reqwest::Body {
    let chunks: Vec<Vec<u8>> = data
        .chunks(UPLOAD_CHUNK_SIZE)
        .map(|chunk| chunk.to_vec())
        .collect();

    let stream = futures::stream::iter(chunks.into_iter().map(move |chunk| {
        let done = sent.fetch_add(chunk.len() as u64, Ordering::Relaxed) + chunk.len() as u64;
        if total > 0 {
            progress(upload_fraction(done, total));
        }
        Ok::<Vec<u8>, std::io::Error>(chunk)
    }));

    reqwest::Body::wrap_stream(stream)
}

/// Fraction of an upload completed, clamped to `0.0..=1.0`
pub fn upload_fraction(done: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (done as f64 / total as f64).clamp(0.0, 1.0)
}

/// Require HTTP 200, otherwise surface the server error or `fallback`
async fn expect_ok(response: Response, fallback: &str) -> Result<Vec<u8>, RequestError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(|e| {
        tracing::warn!("failed to read response body: {}", e);
        RequestError::new(NETWORK_ERROR)
    })?;

    if status == reqwest::StatusCode::OK {
        return Ok(bytes.to_vec());
    }

    tracing::warn!("request failed with status {}", status);
    Err(RequestError::new(
        error_field(&String::from_utf8_lossy(&bytes)).unwrap_or_else(|| fallback.to_string()),
    ))
}

/// Extract the `error` string field from a JSON error body
pub fn error_field(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

/// Decode a JSON API body.
///
/// The body must parse as JSON whatever the status. A non-success status
/// yields the body's `error` field, defaulting to [`REQUEST_FAILED`].
pub fn decode_json_body<T: DeserializeOwned>(success: bool, body: &str) -> Result<T, RequestError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        tracing::warn!("response body is not JSON: {}", e);
        RequestError::new(REQUEST_FAILED)
    })?;

    if !success {
        let message = value
            .get("error")
            .and_then(|e| e.as_str())
            .unwrap_or(REQUEST_FAILED);
        return Err(RequestError::new(message));
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::warn!("unexpected response shape: {}", e);
        RequestError::new(REQUEST_FAILED)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_encodes_path() {
        let client = FileServerClient::new("http://pi:8000/");
        assert_eq!(
            client.list_url("docs/my photos"),
            "http://pi:8000/api/list?path=docs%2Fmy%20photos"
        );
        assert_eq!(client.list_url(""), "http://pi:8000/api/list?path=");
    }

    #[test]
    fn test_upload_url_carries_overwrite_flag() {
        let client = FileServerClient::new("http://pi:8000");
        assert_eq!(
            client.upload_url("music", false),
            "http://pi:8000/api/upload?path=music&overwrite=false"
        );
        assert_eq!(
            client.upload_url("", true),
            "http://pi:8000/api/upload?path=&overwrite=true"
        );
    }

    #[test]
    fn test_decode_listing() {
        let body = r#"{
            "path": "docs",
            "entries": [
                {"name": "photos", "type": "directory"},
                {"name": "a.txt", "type": "file", "size": 12, "modified": "2025-03-01T10:15:00Z"}
            ]
        }"#;
        let listing: ListResponse = decode_json_body(true, body).unwrap();
        assert_eq!(listing.entries.len(), 2);
        assert!(listing.entries[0].is_dir());
        assert_eq!(listing.entries[0].size, None);
        assert_eq!(listing.entries[1].size, Some(12));
        assert!(listing.entries[1].modified.is_some());
    }

    #[test]
    fn test_decode_error_uses_server_message() {
        let err = decode_json_body::<serde_json::Value>(false, r#"{"error":"access denied"}"#)
            .unwrap_err();
        assert_eq!(err.message, "access denied");
    }

    #[test]
    fn test_decode_error_without_message_falls_back() {
        let err = decode_json_body::<serde_json::Value>(false, r#"{"status":"nope"}"#).unwrap_err();
        assert_eq!(err.message, REQUEST_FAILED);
    }

    #[test]
    fn test_decode_non_json_body_fails_even_on_success() {
        let err = decode_json_body::<serde_json::Value>(true, "<html>oops</html>").unwrap_err();
        assert_eq!(err.message, REQUEST_FAILED);
    }

    #[test]
    fn test_error_field() {
        assert_eq!(
            error_field(r#"{"error":"file 'a.mp3' already exists"}"#).as_deref(),
            Some("file 'a.mp3' already exists")
        );
        assert_eq!(error_field("not json"), None);
        assert_eq!(error_field(r#"{"error": 42}"#), None);
    }

    #[test]
    fn test_upload_fraction() {
        assert_eq!(upload_fraction(0, 0), 0.0);
        assert_eq!(upload_fraction(50, 200), 0.25);
        assert_eq!(upload_fraction(300, 200), 1.0);
    }

    #[test]
    fn test_remote_name_is_base_name() {
        let file = UploadFile::new("/home/pi/Music/song.mp3");
        assert_eq!(file.remote_name(), "song.mp3");
    }

    #[tokio::test]
    async fn test_upload_of_missing_file_fails_before_sending() {
        let client = FileServerClient::new("http://127.0.0.1:9");
        let progress: ProgressCallback = Arc::new(|_| {});
        let err = client
            .upload_files(
                "",
                &[UploadFile::new("/definitely/not/here.mp3")],
                false,
                progress,
            )
            .await
            .unwrap_err();
        assert!(err.message.starts_with("/definitely/not/here.mp3"));
    }
}
