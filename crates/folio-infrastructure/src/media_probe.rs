//! Source probing over HTTP and the local file system.

use async_trait::async_trait;
use folio_core::background::MediaFailure;
use folio_core::media::{ACCEPTED_MIME_PREFIX, MediaProbe};
use reqwest::header::{CONTENT_TYPE, RANGE};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};

/// Probes a source without downloading it.
///
/// - `http`/`https`: a HEAD request; the status and `Content-Type` decide.
///   Servers that refuse HEAD (405, 501) get a one-byte ranged GET instead.
/// - `file`: the file must exist
/// - anything else is `UnsupportedFormat`
#[derive(Debug, Clone, Default)]
pub struct HttpMediaProbe {
    client: Client,
}

impl HttpMediaProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn probe_http(&self, url: Url) -> Result<(), MediaFailure> {
        let response = self.send(self.client.head(url.clone()), &url).await?;

        let response = match response.status() {
            StatusCode::METHOD_NOT_ALLOWED | StatusCode::NOT_IMPLEMENTED => {
                tracing::debug!("HEAD {} refused, retrying with a ranged GET", url);
                let ranged = self.client.get(url.clone()).header(RANGE, "bytes=0-0");
                self.send(ranged, &url).await?
            }
            _ => response,
        };

        Self::classify(&url, &response)
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, MediaFailure> {
        request.send().await.map_err(|e| {
            tracing::debug!("Request to {} failed: {}", url, e);
            MediaFailure::Network
        })
    }

    fn classify(url: &Url, response: &Response) -> Result<(), MediaFailure> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(MediaFailure::NotFound);
        }
        if !status.is_success() {
            tracing::debug!("{} returned {}", url, status);
            return Err(MediaFailure::Network);
        }

        match response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            // Servers that omit the header get the benefit of the doubt.
            None => Ok(()),
            Some(content_type) if is_playable_content_type(content_type) => Ok(()),
            Some(content_type) => {
                tracing::debug!("{} has content type '{}'", url, content_type);
                Err(MediaFailure::UnsupportedFormat)
            }
        }
    }

    async fn probe_file(url: &Url) -> Result<(), MediaFailure> {
        let path = url.to_file_path().map_err(|_| MediaFailure::NotFound)?;
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(()),
            _ => Err(MediaFailure::NotFound),
        }
    }
}

fn is_playable_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with(ACCEPTED_MIME_PREFIX) || mime == "application/octet-stream"
}

#[async_trait]
impl MediaProbe for HttpMediaProbe {
    async fn probe(&self, url: &str) -> Result<(), MediaFailure> {
        let parsed = Url::parse(url).map_err(|_| MediaFailure::UnsupportedFormat)?;
        match parsed.scheme() {
            "http" | "https" => self.probe_http(parsed).await,
            "file" => Self::probe_file(&parsed).await,
            other => {
                tracing::debug!("Unsupported source scheme '{}'", other);
                Err(MediaFailure::UnsupportedFormat)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned response and returns the base URL.
    async fn serve_once(status_line: &'static str, content_type: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status_line, content_type
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{}/clip.mp4", addr)
    }

    /// Answers HEAD with `405` and GET with `get_response`, one connection
    /// each. Returns the URL and the request heads the server saw.
    async fn serve_get_only(
        get_response: &'static str,
    ) -> (String, tokio::task::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let mut seen = Vec::new();
            for _ in 0..2 {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 1024];
                let n = socket.read(&mut buf).await.unwrap();
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let response = if request.starts_with("HEAD") {
                    "HTTP/1.1 405 Method Not Allowed\r\nAllow: GET\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                } else {
                    get_response
                };
                socket.write_all(response.as_bytes()).await.unwrap();
                seen.push(request);
            }
            seen
        });
        (format!("http://{}/clip.mp4", addr), handle)
    }

    fn local_probe() -> HttpMediaProbe {
        HttpMediaProbe::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[test]
    fn test_playable_content_types() {
        assert!(is_playable_content_type("video/mp4"));
        assert!(is_playable_content_type("Video/WebM; codecs=vp9"));
        assert!(is_playable_content_type("application/octet-stream"));
        assert!(!is_playable_content_type("text/html; charset=utf-8"));
    }

    #[tokio::test]
    async fn test_http_video_is_playable() {
        let url = serve_once("200 OK", "video/mp4").await;
        assert_eq!(local_probe().probe(&url).await, Ok(()));
    }

    #[tokio::test]
    async fn test_http_not_found() {
        let url = serve_once("404 Not Found", "text/html").await;
        assert_eq!(
            local_probe().probe(&url).await,
            Err(MediaFailure::NotFound)
        );
    }

    #[tokio::test]
    async fn test_http_html_is_unsupported() {
        let url = serve_once("200 OK", "text/html").await;
        assert_eq!(
            local_probe().probe(&url).await,
            Err(MediaFailure::UnsupportedFormat)
        );
    }

    #[tokio::test]
    async fn test_http_server_error_is_network() {
        let url = serve_once("503 Service Unavailable", "text/plain").await;
        assert_eq!(
            local_probe().probe(&url).await,
            Err(MediaFailure::Network)
        );
    }

    #[tokio::test]
    async fn test_head_refused_falls_back_to_ranged_get() {
        let (url, server) = serve_get_only(
            "HTTP/1.1 206 Partial Content\r\nContent-Type: video/mp4\r\nContent-Range: bytes 0-0/1000\r\nContent-Length: 1\r\nConnection: close\r\n\r\nx",
        )
        .await;
        assert_eq!(local_probe().probe(&url).await, Ok(()));

        let seen = server.await.unwrap();
        assert!(seen[0].starts_with("HEAD "));
        assert!(seen[1].starts_with("GET "));
        assert!(seen[1].to_ascii_lowercase().contains("range: bytes=0-0"));
    }

    #[tokio::test]
    async fn test_ranged_get_is_classified_like_head() {
        let (url, _server) = serve_get_only(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        assert_eq!(
            local_probe().probe(&url).await,
            Err(MediaFailure::UnsupportedFormat)
        );
    }

    #[tokio::test]
    async fn test_file_urls() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bg.webm");
        std::fs::write(&path, b"x").unwrap();
        let url = Url::from_file_path(&path).unwrap();

        let probe = HttpMediaProbe::new();
        assert_eq!(probe.probe(url.as_str()).await, Ok(()));

        let missing = Url::from_file_path(temp_dir.path().join("gone.webm")).unwrap();
        assert_eq!(
            probe.probe(missing.as_str()).await,
            Err(MediaFailure::NotFound)
        );
    }

    #[tokio::test]
    async fn test_other_schemes_are_unsupported() {
        let probe = HttpMediaProbe::new();
        assert_eq!(
            probe.probe("ftp://example.com/a.mp4").await,
            Err(MediaFailure::UnsupportedFormat)
        );
        assert_eq!(
            probe.probe("not a url").await,
            Err(MediaFailure::UnsupportedFormat)
        );
    }
}
