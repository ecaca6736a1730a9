//! Loopback HTTP stub for the climate service and remote catalogs.
//!
//! Every request gets the same canned response. Request lines are recorded
//! so tests can check which path was hit.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub enum StubResponse {
    /// Reply with `status` and a JSON body.
    Json { status: u16, body: String },
    /// Accept the request and never answer.
    Hang,
}

impl StubResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        StubResponse::Json {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        StubResponse::Json {
            status,
            body: r#"{"detail": "unavailable"}"#.to_string(),
        }
    }
}

/// Stub server bound to an ephemeral loopback port. Stops when dropped.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Bind and start serving. Must be called inside a tokio runtime.
    pub async fn start(response: StubResponse) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let response = response.clone();
                let recorded = Arc::clone(&recorded);
                tokio::spawn(async move {
                    let _ = serve(stream, response, recorded).await;
                });
            }
        });

        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    /// `http://127.0.0.1:{port}` with no trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Request lines received so far, e.g. `GET /api/v1/climate/3 HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// Paths of the requests received so far.
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .filter_map(|line| line.split_whitespace().nth(1).map(str::to_string))
            .collect()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    response: StubResponse,
    requests: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }

    let head = String::from_utf8_lossy(&head);
    let request_line = head.lines().next().unwrap_or_default().to_string();
    requests.lock().expect("requests lock").push(request_line);

    match response {
        StubResponse::Json { status, body } => {
            let reason = if status == 200 { "OK" } else { "Stub" };
            let reply = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            );
            stream.write_all(reply.as_bytes()).await?;
            stream.shutdown().await
        }
        StubResponse::Hang => {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }
}
