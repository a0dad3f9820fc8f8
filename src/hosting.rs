//! Image hosting client
//!
//! Uploads the captured photo to the hosting endpoint via multipart POST and
//! returns the publicly reachable URL for the metadata record. This runs
//! before the mint pipeline starts; a hosting failure aborts the attempt
//! without touching the ledger.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// HTTP client for the image hosting collaborator
#[derive(Debug, Clone)]
pub struct HostingClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HostingClient {
    pub fn new(endpoint: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, endpoint })
    }

    /// Upload image bytes, returning the hosted URL
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")
            .context("Invalid MIME type")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .context("Image upload request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Image host returned {}: {}", status, body);
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .context("Image host returned malformed JSON")?;
        Ok(parsed.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_returns_hosted_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/upload")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"url":"https://img.example/abc.jpg"}"#)
            .create_async()
            .await;

        let client = HostingClient::new(format!("{}/upload", server.url())).unwrap();
        let url = client
            .upload("photo.jpg", vec![0xff, 0xd8, 0xff])
            .await
            .unwrap();

        assert_eq!(url, "https://img.example/abc.jpg");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn upload_surfaces_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/upload")
            .with_status(500)
            .with_body("storage unavailable")
            .create_async()
            .await;

        let client = HostingClient::new(format!("{}/upload", server.url())).unwrap();
        let err = client
            .upload("photo.jpg", vec![1, 2, 3])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("500"));
    }
}
