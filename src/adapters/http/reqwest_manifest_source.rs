//! HTTP manifest source backed by `reqwest`.
//!
//! Used by the CLI to run the selector flow against a deployed site.

use async_trait::async_trait;

use crate::config::FetchConfig;
use crate::ports::{FetchError, ManifestSource};

/// Reads manifests over HTTP(S).
pub struct ReqwestManifestSource {
    http_client: reqwest::Client,
}

impl ReqwestManifestSource {
    /// Create a source with the configured timeout and user agent.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait(?Send)]
impl ManifestSource for ReqwestManifestSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self.http_client.get(url).send().await.map_err(|e| {
            tracing::warn!("Failed to fetch manifest: {}", e);
            FetchError::Network(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Manifest endpoint returned {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read body: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response and returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let base = serve_once("200 OK", r#"[{"version":"dev","title":"Dev","aliases":[]}]"#).await;
        let source = ReqwestManifestSource::new(&FetchConfig::default()).unwrap();

        let body = source
            .fetch(&format!("{}/docs/versions.json", base))
            .await
            .unwrap();
        assert!(body.contains("\"dev\""));
    }

    #[tokio::test]
    async fn test_fetch_maps_error_status() {
        let base = serve_once("404 Not Found", "").await;
        let source = ReqwestManifestSource::new(&FetchConfig::default()).unwrap();

        let result = source.fetch(&format!("{}/versions.json", base)).await;
        assert_eq!(result, Err(FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = ReqwestManifestSource::new(&FetchConfig::default()).unwrap();
        let result = source.fetch(&format!("http://{}/versions.json", addr)).await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
