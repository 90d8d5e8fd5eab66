use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info};

use crate::models::SpreadsheetResponse;

pub const SHEETS_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Response status: {0}")]
    Status(StatusCode),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to read sheet: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed sheet: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn client() -> Client {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .unwrap_or_else(|e| {
            error!("Failed to build HTTP client, using defaults: {e}");
            Client::new()
        })
}

pub fn sheet_url(spreadsheet_id: &str, range: &str, api_key: &str) -> String {
    format!("{SHEETS_ENDPOINT}/{spreadsheet_id}/values/{range}?key={api_key}")
}

pub async fn get_remote_sheet(client: &Client, url: &str) -> Result<SpreadsheetResponse, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.json().await?)
}

/// Loading state around a single fetch.
#[derive(Debug)]
pub struct Fetch<T> {
    pub is_loading: bool,
    pub error: Option<FetchError>,
    pub data: Option<T>,
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            error: None,
            data: None,
        }
    }
}

impl<T> Fetch<T> {
    /// Marks a fetch in flight and clears the previous error.
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: Result<T, FetchError>) {
        match result {
            Ok(data) => self.data = Some(data),
            Err(e) => {
                error!("{e}");

                self.error = Some(e);
                self.data = None;
            }
        }

        self.is_loading = false;
    }
}

impl Fetch<SpreadsheetResponse> {
    pub async fn fetch_sheet(&mut self, client: &Client, url: &str) {
        self.begin();

        let result = get_remote_sheet(client, url).await;
        if let Ok(sheet) = &result {
            info!(
                "Fetched {} rows from {}",
                sheet.values.as_ref().map_or(0, Vec::len),
                sheet.range
            );
        }

        self.finish(result);
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                let read = stream.read(&mut buffer).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&buffer[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{address}/values")
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[test]
    fn test_sheet_url() {
        assert_eq!(
            sheet_url("abc123", "Jobs!A1:E200", "secret"),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/Jobs!A1:E200?key=secret"
        );
    }

    #[test]
    fn test_begin_resets_error() {
        let mut fetch: Fetch<SpreadsheetResponse> = Fetch::default();
        fetch.finish(Err(FetchError::Status(StatusCode::NOT_FOUND)));
        assert!(fetch.error.is_some());

        fetch.begin();

        assert!(fetch.is_loading);
        assert!(fetch.error.is_none());
    }

    #[test]
    fn test_failure_clears_data() {
        let mut fetch: Fetch<SpreadsheetResponse> = Fetch::default();
        fetch.begin();
        fetch.finish(Ok(SpreadsheetResponse::default()));
        assert!(fetch.data.is_some());
        assert!(!fetch.is_loading);

        fetch.begin();
        fetch.finish(Err(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR)));

        assert!(fetch.data.is_none());
        assert!(!fetch.is_loading);
        assert_eq!(
            fetch.error.unwrap().to_string(),
            "Response status: 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_fetch_sheet() {
        let url = serve_once(
            "200 OK",
            r#"{"majorDimension":"ROWS","range":"Jobs!A1:E3","values":[["a","b"]]}"#,
        )
        .await;

        let mut fetch: Fetch<SpreadsheetResponse> = Fetch::default();
        fetch.fetch_sheet(&local_client(), &url).await;

        assert!(fetch.error.is_none());
        let sheet = fetch.data.unwrap();
        assert_eq!(sheet.range, "Jobs!A1:E3");
        assert_eq!(sheet.values.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_sheet_bad_status() {
        let url = serve_once("403 Forbidden", r#"{"error":"denied"}"#).await;

        let result = get_remote_sheet(&local_client(), &url).await;

        assert!(matches!(result, Err(FetchError::Status(status)) if status == StatusCode::FORBIDDEN));
    }

    #[tokio::test]
    async fn test_fetch_sheet_malformed_body() {
        let url = serve_once("200 OK", "not json").await;

        let mut fetch: Fetch<SpreadsheetResponse> = Fetch::default();
        fetch.fetch_sheet(&local_client(), &url).await;

        assert!(matches!(fetch.error, Some(FetchError::Request(_))));
        assert!(fetch.data.is_none());
    }
}
