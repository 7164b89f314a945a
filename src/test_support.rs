//! Helpers shared by unit tests: a one-shot local catalog server and an
//! in-memory log sink.

use crate::error::PipelineResult;
use crate::tcg::{CatalogItem, CatalogSource};
use crate::utils::http::get_user_agent;
use reqwest::blocking::Client;
use std::io::{self, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Client that never routes through a proxy picked up from the environment.
pub fn test_client() -> Client {
    Client::builder()
        .user_agent(get_user_agent())
        .no_proxy()
        .build()
        .unwrap()
}

/// Answers exactly one HTTP request with a canned response.
pub struct CatalogStub {
    url: String,
    requests: Receiver<String>,
}

impl CatalogStub {
    pub fn serve(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let (tx, requests) = mpsc::channel();

        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = tx.send(String::from_utf8_lossy(&request).into_owned());
            let _ = stream.write_all(response.as_bytes());
        });

        Self {
            url: format!("http://{addr}/api/2.0/public/cards"),
            requests,
        }
    }

    /// URL of a port nothing listens on.
    pub fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/api/2.0/public/cards")
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw text of the request the stub received.
    pub fn request(&self) -> String {
        self.requests.recv_timeout(Duration::from_secs(5)).unwrap()
    }
}

/// Catalog answered from memory.
pub struct StaticCatalog(pub Vec<CatalogItem>);

impl StaticCatalog {
    pub fn of(items: &[(&str, &str, &str)]) -> Self {
        Self(
            items
                .iter()
                .map(|(code, title, pack_code)| CatalogItem {
                    code: code.to_string(),
                    title: title.to_string(),
                    pack_code: pack_code.to_string(),
                })
                .collect(),
        )
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch_cards(&self) -> PipelineResult<Vec<CatalogItem>> {
        Ok(self.0.clone())
    }
}

#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a scoped subscriber and return its result plus every line
/// logged on this thread meanwhile.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}
