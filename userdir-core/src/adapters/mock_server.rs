//! Mock user directory server for testing
//!
//! A minimal HTTP server on a random local port that answers `GET /users`
//! the way the placeholder directory API does, or with a configured
//! failure:
//! - `MockResponse::Users(n)` returns the first `n` demo records as JSON
//! - `MockResponse::Status(code)` returns an error status
//! - `MockResponse::Body(text)` returns a raw 200 body (for malformed payloads)
//!
//! Any other path answers 404.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use super::demo::generate_demo_users;

/// Mock directory server for testing
pub struct MockDirectoryServer {
    port: u16,
    running: Arc<AtomicBool>,
    requests: Arc<AtomicUsize>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// What `GET /users` answers with
#[derive(Debug, Clone)]
pub enum MockResponse {
    Users(usize),
    Status(u16),
    Body(String),
}

/// Configuration for the mock server
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub response: MockResponse,
    /// Delay in milliseconds before responding
    pub delay_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            response: MockResponse::Users(10),
            delay_ms: 0,
        }
    }
}

impl MockDirectoryServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let requests = Arc::new(AtomicUsize::new(0));
        let running_clone = running.clone();
        let requests_clone = requests.clone();

        // Non-blocking accept so stop() can end the loop
        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        requests_clone.fetch_add(1, Ordering::SeqCst);
                        let cfg = config.clone();
                        thread::spawn(move || {
                            handle_connection(stream, &cfg);
                        });
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            requests,
            thread_handle: Some(thread_handle),
        })
    }

    /// Base URL of this server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// URL of the users endpoint
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url())
    }

    /// Number of connections accepted so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Stop the mock server
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockDirectoryServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(mut stream: TcpStream, config: &MockConfig) {
    let _ = stream.set_nonblocking(false);
    let mut buffer = [0; 4096];

    let Ok(n) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(&buffer[..n]);

    if config.delay_ms > 0 {
        thread::sleep(std::time::Duration::from_millis(config.delay_ms));
    }

    let first_line = request.lines().next().unwrap_or("");
    let mut parts = first_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    let path_without_query = path.split('?').next().unwrap_or(path);

    if method != "GET" {
        send_response(&mut stream, 405, "Method Not Allowed", r#"{"error": "Method not allowed"}"#);
        return;
    }

    if path_without_query != "/users" {
        send_response(&mut stream, 404, "Not Found", "{}");
        return;
    }

    match &config.response {
        MockResponse::Users(count) => {
            let users: Vec<_> = generate_demo_users().into_iter().take(*count).collect();
            let json = serde_json::to_string(&users).unwrap_or_else(|_| "[]".to_string());
            send_response(&mut stream, 200, "OK", &json);
        }
        MockResponse::Status(code) => {
            send_response(&mut stream, *code, "Error", r#"{"error": "mock failure"}"#);
        }
        MockResponse::Body(body) => {
            send_response(&mut stream, 200, "OK", body);
        }
    }
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_server_starts() {
        let server = MockDirectoryServer::start(MockConfig::default()).unwrap();
        assert!(server.users_url().ends_with("/users"));
        assert_eq!(server.request_count(), 0);
    }
}
