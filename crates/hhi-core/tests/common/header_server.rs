//! Minimal HTTP/1.1 server for integration tests.
//!
//! Routes:
//! - `/plain`: 200 with a mix of security, caching and other headers
//! - `/redirect`: 301 to `/final`
//! - `/final`: 200 with `X-Frame-Options` and `Cache-Control`
//! - `/loop`: 302 to itself
//! - `/dupes`: 200 with repeated header fields
//! - `/chunked`: 200 with a chunked body carrying an `X-Frame-Options` trailer
//! - `/stall`: reads the request and never answers
//! - anything else: 404

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Starts the server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Runs until the process exits.
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// Base URL of a port nothing listens on.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream) {
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
    let path = request_path(request);

    let (status, headers): (&str, &[(&str, &str)]) = match path {
        "/plain" => (
            "200 OK",
            &[
                ("Content-Type", "text/plain"),
                ("Strict-Transport-Security", "max-age=31536000"),
                ("x-content-type-options", "nosniff"),
                ("Cache-Control", "max-age=60"),
                ("ETag", "\"v1\""),
                ("Server", "header-server"),
            ],
        ),
        "/redirect" => ("301 Moved Permanently", &[("Location", "/final")]),
        "/final" => (
            "200 OK",
            &[("X-Frame-Options", "DENY"), ("Cache-Control", "no-cache")],
        ),
        "/loop" => ("302 Found", &[("Location", "/loop")]),
        "/dupes" => (
            "200 OK",
            &[
                ("Set-Cookie", "a=1"),
                ("Cache-Control", "no-store"),
                ("set-cookie", "b=2"),
                ("cache-control", "private"),
            ],
        ),
        "/chunked" => {
            let response = "HTTP/1.1 200 OK\r\n\
Cache-Control: no-cache\r\n\
Transfer-Encoding: chunked\r\n\
Trailer: X-Frame-Options\r\n\
Connection: close\r\n\
\r\n\
2\r\nok\r\n\
0\r\n\
X-Frame-Options: DENY\r\n\
\r\n";
            let _ = stream.write_all(response.as_bytes());
            return;
        }
        "/stall" => {
            thread::sleep(Duration::from_secs(5));
            return;
        }
        _ => ("404 Not Found", &[]),
    };

    let body = b"ok";
    let mut response = format!("HTTP/1.1 {}\r\n", status);
    for (name, value) in headers {
        response.push_str(&format!("{}: {}\r\n", name, value));
    }
    response.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    ));
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

/// Path of the request line, e.g. "GET /plain HTTP/1.1" → "/plain".
fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}
