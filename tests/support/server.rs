//! Minimal HTTP listener standing in for a Bark server.
//!
//! Accepts connections on a background thread, records each request line
//! and answers `200 {}`. The thread lives until the test process exits.

use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread;

pub struct BarkServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl BarkServer {
    /// Bind to an ephemeral localhost port and start serving.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind listener");
        let addr = listener.local_addr().expect("failed to read local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let Ok(reader_stream) = stream.try_clone() else {
                    continue;
                };
                let mut reader = BufReader::new(reader_stream);

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                // Drain headers up to the blank line
                loop {
                    let mut header = String::new();
                    match reader.read_line(&mut header) {
                        Ok(0) | Err(_) => break,
                        Ok(_) if header == "\r\n" || header == "\n" => break,
                        Ok(_) => {}
                    }
                }

                recorded
                    .lock()
                    .unwrap()
                    .push(request_line.trim_end().to_string());

                let _ = stream.write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
                );
                let _ = stream.flush();
            }
        });

        Self { addr, requests }
    }

    /// Base URL as it would appear in `BARK_URL`.
    pub fn url(&self) -> String {
        format!("http://{}/devicekey", self.addr)
    }

    /// Request lines received so far, e.g. `GET /devicekey/... HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// A localhost URL with nothing listening on it.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind listener");
    let addr = listener.local_addr().expect("failed to read local addr");
    drop(listener);
    format!("http://{}/devicekey", addr)
}
