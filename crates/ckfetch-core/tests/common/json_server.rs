//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every GET with a fixed status line and body, and counts the
//! requests it has seen so tests can tell whether the client called at all.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct JsonServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl JsonServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serves `{"data": data, "checksum": checksum}` with 200 OK.
pub fn start_payload(data: &str, checksum: &str) -> JsonServer {
    let body = serde_json::json!({ "data": data, "checksum": checksum });
    start("200 OK", body.to_string().into_bytes())
}

/// Starts a server in a background thread answering with `status` and `body`.
/// The server runs until the process exits.
pub fn start(status: &'static str, body: Vec<u8>) -> JsonServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let hits = Arc::clone(&hits_srv);
            thread::spawn(move || handle(stream, status, &body, &hits));
        }
    });
    JsonServer {
        url: format!("http://127.0.0.1:{}/data", port),
        hits,
    }
}

/// A URL on a local port nobody is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/data", port)
}

fn handle(mut stream: std::net::TcpStream, status: &str, body: &[u8], hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    hits.fetch_add(1, Ordering::SeqCst);
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
