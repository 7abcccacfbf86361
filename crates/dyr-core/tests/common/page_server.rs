//! Minimal HTTP/1.1 server for integration tests: fixed routes that either
//! redirect (302 with `Location`) or answer with a status and an HTML body,
//! plain or gzip-encoded.
//!
//! Unknown paths get 404. Every request's path and headers are recorded so
//! tests can check what the client sent.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Route {
    /// 302 to `location` (absolute or path-relative).
    Redirect(String),
    Page { status: u16, body: String },
    /// 200 with the body gzip-encoded, only if the client accepts gzip;
    /// otherwise 406.
    Gzip(String),
}

impl Route {
    pub fn ok(body: impl Into<String>) -> Self {
        Route::Page {
            status: 200,
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request target including any query string.
    pub target: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct PageServer {
    /// e.g. "http://127.0.0.1:12345" (no trailing slash).
    pub base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl PageServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread. Routes are keyed by path without
/// query string. The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &routes, &recorded));
        }
    });
    PageServer {
        base: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

/// A port that was bound and released, so connecting to it is refused.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, Route>,
    recorded: &Mutex<Vec<RecordedRequest>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    let request = match std::str::from_utf8(&data) {
        Ok(s) => s,
        Err(_) => return,
    };
    let Some(req) = parse_request(request) else {
        return;
    };
    let path = req.target.split('?').next().unwrap_or("").to_string();

    let accepts_gzip = req
        .header("accept-encoding")
        .is_some_and(|v| v.contains("gzip"));
    recorded.lock().unwrap().push(req);

    let response = match routes.get(&path) {
        Some(Route::Redirect(location)) => format!(
            "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            location
        )
        .into_bytes(),
        Some(Route::Page { status, body }) => page_response(*status, &[], body.as_bytes()),
        Some(Route::Gzip(body)) if accepts_gzip => page_response(
            200,
            &["Content-Encoding: gzip"],
            &gzip_stored(body.as_bytes()),
        ),
        Some(Route::Gzip(_)) => page_response(406, &[], b"gzip required"),
        None => page_response(404, &[], b"not found"),
    };
    let _ = stream.write_all(&response);
    let _ = stream.flush();
}

fn page_response(status: u16, extra_headers: &[&str], body: &[u8]) -> Vec<u8> {
    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n",
        status,
        reason(status),
        body.len()
    );
    for h in extra_headers {
        head.push_str(h);
        head.push_str("\r\n");
    }
    head.push_str("\r\n");
    let mut out = head.into_bytes();
    out.extend_from_slice(body);
    out
}

/// gzip member holding `data` in a single stored (uncompressed) deflate block.
/// `data` must be shorter than 64 KiB.
pub fn gzip_stored(data: &[u8]) -> Vec<u8> {
    let len = u16::try_from(data.len()).expect("stored block limit");
    let mut out = vec![0x1f, 0x8b, 0x08, 0, 0, 0, 0, 0, 0, 0xff];
    out.push(0x01); // BFINAL, stored
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&(!len).to_le_bytes());
    out.extend_from_slice(data);
    out.extend_from_slice(&crc32(data).to_le_bytes());
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xffff_ffffu32;
    for &b in data {
        crc ^= u32::from(b);
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xedb8_8320 & mask);
        }
    }
    !crc
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        406 => "Not Acceptable",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn parse_request(request: &str) -> Option<RecordedRequest> {
    let mut lines = request.lines();
    let request_line = lines.next()?;
    let target = request_line.split_whitespace().nth(1)?.to_string();
    let headers = lines
        .map(str::trim)
        .take_while(|l| !l.is_empty())
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    Some(RecordedRequest { target, headers })
}
