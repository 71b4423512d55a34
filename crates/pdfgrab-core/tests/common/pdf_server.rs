//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves canned responses keyed by request path (query ignored) and records
//! every request target so tests can assert what was fetched.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct Route {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Vec<u8>,
    /// Sent as `Location` (use with a 3xx status).
    pub location: Option<String>,
    /// Sleep before responding (to trigger client timeouts).
    pub delay: Option<Duration>,
}

impl Route {
    pub fn pdf(body: &[u8]) -> Self {
        Self::with(200, Some("application/pdf"), body)
    }

    pub fn with(status: u16, content_type: Option<&'static str>, body: &[u8]) -> Self {
        Route {
            status,
            content_type,
            body: body.to_vec(),
            ..Route::default()
        }
    }

    pub fn redirect(location: &str) -> Self {
        Route {
            status: 302,
            location: Some(location.to_string()),
            ..Route::default()
        }
    }
}

pub struct PdfServer {
    /// Base URL without trailing slash, e.g. `http://127.0.0.1:12345`.
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PdfServer {
    /// Request targets received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Starts a server in a background thread. Unknown paths get 404.
/// The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> PdfServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &routes, &log));
        }
    });
    PdfServer {
        base: format!("http://127.0.0.1:{}", port),
        requests,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    log: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
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
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(target.clone());

    let path = target.split('?').next().unwrap_or("/");
    let not_found = Route::with(404, Some("text/html"), b"<h1>not found</h1>");
    let route = routes.get(path).unwrap_or(&not_found);

    if let Some(delay) = route.delay {
        thread::sleep(delay);
    }

    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        reason(route.status),
        route.body.len()
    );
    if let Some(ct) = route.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if let Some(location) = &route.location {
        head.push_str(&format!("Location: {}\r\n", location));
    }
    head.push_str("\r\n");
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
