//! Local HTTP stub serving canned responses, for tests
//!
//! Also compiled into the integration tests through `tests/support`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Canned answer; `path: None` answers every path
#[derive(Debug, Clone)]
struct Route {
    path: Option<String>,
    status: u16,
    body: String,
}

/// Serves canned responses until dropped
pub(crate) struct StubServer {
    port: u16,
    hits: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl StubServer {
    /// Answers every request with `status` and a JSON `body`
    pub(crate) async fn json(status: u16, body: &str) -> Self {
        Self::delayed(status, body, Duration::ZERO).await
    }

    /// Like [`StubServer::json`], waiting `delay` before answering
    pub(crate) async fn delayed(status: u16, body: &str, delay: Duration) -> Self {
        let route = Route {
            path: None,
            status,
            body: body.to_string(),
        };
        Self::start(vec![route], delay).await
    }

    /// Answers each listed path exactly, HTTP 404 for anything else
    pub(crate) async fn routes(routes: Vec<(&str, u16, String)>) -> Self {
        let routes = routes
            .into_iter()
            .map(|(path, status, body)| Route {
                path: Some(path.to_string()),
                status,
                body,
            })
            .collect();
        Self::start(routes, Duration::ZERO).await
    }

    async fn start(routes: Vec<Route>, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let hits = Arc::new(AtomicUsize::new(0));
        let routes = Arc::new(routes);

        let counter = Arc::clone(&hits);
        let task = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let routes = Arc::clone(&routes);
                tokio::spawn(async move {
                    let _ = answer(stream, &routes, delay).await;
                });
            }
        });

        Self { port, hits, task }
    }

    /// A base URL on which nothing is listening
    pub(crate) async fn unused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    pub(crate) fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Number of connections accepted so far
    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn answer(mut stream: TcpStream, routes: &[Route], delay: Duration) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = stream.read(&mut buf).await?;
        if read == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buf[..read]);
    }

    let head = String::from_utf8_lossy(&request);
    let path = head.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = routes
        .iter()
        .find(|route| route.path.as_deref().map_or(true, |p| p == path))
        .map(|route| (route.status, route.body.as_str()))
        .unwrap_or((404, ""));

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
