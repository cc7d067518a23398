//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes keyed by request path (query string ignored)
//! and records the head of every request it receives so tests can inspect the
//! headers a client sent. Unknown paths get 404.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    /// Status line after `HTTP/1.1`, e.g. "200 OK".
    pub status: &'static str,
    /// Extra header lines (`Name: value`).
    pub headers: Vec<String>,
    pub body: Vec<u8>,
    /// Wait this long after reading the request before answering.
    pub delay: Option<Duration>,
}

impl Route {
    pub fn html(body: &str) -> Self {
        Self {
            status: "200 OK",
            headers: vec!["Content-Type: text/html; charset=utf-8".to_string()],
            body: body.as_bytes().to_vec(),
            delay: None,
        }
    }

    pub fn png() -> Self {
        Self {
            status: "200 OK",
            headers: vec!["Content-Type: image/png".to_string()],
            body: vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'],
            delay: None,
        }
    }

    pub fn status(status: &'static str, body: &str) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
            delay: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: "301 Moved Permanently",
            headers: vec![format!("Location: {}", location)],
            body: Vec::new(),
            delay: None,
        }
    }

    /// Accepts the request but sends nothing for `delay`.
    pub fn stalled(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::html("<html></html>")
        }
    }
}

pub struct PageServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PageServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Request heads received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Request heads whose request line targets `path`.
    pub fn requests_for(&self, path: &str) -> Vec<String> {
        let prefix = format!("GET {} ", path);
        self.requests()
            .into_iter()
            .filter(|r| r.starts_with(&prefix))
            .collect()
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> PageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
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

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8(data).ok().filter(|s| !s.is_empty())
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, recorded: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let head = match read_head(&mut stream) {
        Some(h) => h,
        None => return,
    };
    recorded.lock().unwrap().push(head.clone());

    let target = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");
    let path = target.split('?').next().unwrap_or(target);

    let not_found = Route::status("404 Not Found", "not found");
    let route = routes.get(path).unwrap_or(&not_found);
    if let Some(delay) = route.delay {
        thread::sleep(delay);
    }

    let mut response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        route.status,
        route.body.len()
    );
    for h in &route.headers {
        response.push_str(h);
        response.push_str("\r\n");
    }
    response.push_str("\r\n");
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(&route.body);
}

/// Value of header `name` in a recorded request head, if present.
pub fn header_value<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().skip(1).find_map(|line| {
        let (n, v) = line.split_once(':')?;
        n.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}
