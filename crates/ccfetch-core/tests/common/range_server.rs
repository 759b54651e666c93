//! Minimal HTTP/1.1 server that answers Range GETs for integration tests.
//!
//! Serves a single static body. Can be told to fail the first N requests with
//! 503 and records every Range header it sees.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, Copy, Default)]
pub struct RangeServerOptions {
    /// Number of initial requests answered with 503 Service Unavailable.
    pub fail_first: usize,
    /// If true, every request gets 404 Not Found.
    pub always_404: bool,
}

/// Handle to a running server: base URL plus what it has observed.
pub struct RangeServer {
    pub base_url: String,
    requests: Arc<AtomicUsize>,
    ranges: Arc<Mutex<Vec<String>>>,
}

impl RangeServer {
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn ranges(&self) -> Vec<String> {
        self.ranges.lock().unwrap().clone()
    }
}

pub fn start(body: Vec<u8>) -> RangeServer {
    start_with_options(body, RangeServerOptions::default())
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start_with_options(body: Vec<u8>, opts: RangeServerOptions) -> RangeServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let requests = Arc::new(AtomicUsize::new(0));
    let ranges = Arc::new(Mutex::new(Vec::new()));
    {
        let requests = Arc::clone(&requests);
        let ranges = Arc::clone(&ranges);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let n = requests.fetch_add(1, Ordering::SeqCst);
                handle(stream, &body, opts, n, &ranges);
            }
        });
    }
    RangeServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
        ranges,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    opts: RangeServerOptions,
    index: usize,
    ranges: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let (raw_range, range) = parse_range(request);
    if let Some(raw) = raw_range {
        ranges.lock().unwrap().push(raw);
    }

    if opts.always_404 {
        let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }
    if index < opts.fail_first {
        let _ = stream.write_all(
            b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let total = body.len() as u64;
    let (status, slice) = match range {
        Some((start, end_incl)) if start < total && start <= end_incl => {
            let end_excl = end_incl.saturating_add(1).min(total);
            ("206 Partial Content", &body[start as usize..end_excl as usize])
        }
        Some(_) => ("416 Range Not Satisfiable", &body[0..0]),
        None => ("200 OK", body),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        slice.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(slice);
}

/// Returns the raw Range header value and its parsed (start, end_inclusive).
fn parse_range(request: &str) -> (Option<String>, Option<(u64, u64)>) {
    for line in request.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        if !name.trim().eq_ignore_ascii_case("range") {
            continue;
        }
        let value = value.trim();
        let parsed = value
            .strip_prefix("bytes=")
            .and_then(|part| part.split_once('-'))
            .and_then(|(a, b)| Some((a.parse().ok()?, b.parse().ok()?)));
        return (Some(value.to_string()), parsed);
    }
    (None, None)
}
