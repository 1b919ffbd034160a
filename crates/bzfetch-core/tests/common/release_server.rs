//! Minimal HTTP/1.1 server standing in for the releases host in integration tests.
//!
//! Serves a single static body for every GET. Can answer with a fixed error
//! status instead, or bounce every request through a 302 first the way GitHub
//! sends release downloads to its CDN. Counts requests so tests can assert
//! that nothing was fetched.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

const CDN_PREFIX: &str = "/cdn";

#[derive(Debug, Clone, Copy)]
pub struct ReleaseServerOptions {
    /// Status line code for GET responses (200 serves the body).
    pub status: u16,
    /// If true, first answer 302 to `/cdn<path>` and serve the body there.
    pub redirect: bool,
}

impl Default for ReleaseServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            redirect: false,
        }
    }
}

pub struct ReleaseServer {
    /// e.g. "http://127.0.0.1:12345" (no trailing slash).
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl ReleaseServer {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread serving `body`. The server runs until the process exits.
pub fn start(body: Vec<u8>) -> ReleaseServer {
    start_with_options(body, ReleaseServerOptions::default())
}

pub fn start_with_options(body: Vec<u8>, opts: ReleaseServerOptions) -> ReleaseServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            counter.fetch_add(1, Ordering::SeqCst);
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, opts));
        }
    });
    ReleaseServer {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], opts: ReleaseServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }
    if opts.redirect && !path.starts_with(CDN_PREFIX) {
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: {}{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            CDN_PREFIX, path
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    if opts.status != 200 {
        let response = format!(
            "HTTP/1.1 {} Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            opts.status
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}
