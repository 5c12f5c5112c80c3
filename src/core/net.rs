// src/core/net.rs
// One blocking GET; the body comes back as text.
// No client timeout: a slow page is waited for, however long it takes.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn fetch_page(url: &str) -> Result<String> {
    let network = |source| Error::Network { url: s!(url), source };

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None)
        .build()
        .map_err(network)?;

    logf!("GET {url}");
    let resp = client.get(url).send().map_err(network)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { url: s!(url), status });
    }

    let body = resp.text().map_err(network)?;
    logd!("{url}: {} bytes", body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn refused_connection_is_a_network_error() {
        // Port 1 (tcpmux) is not served on loopback in any sane test environment.
        let err = fetch_page("http://127.0.0.1:1/").unwrap_err();
        assert!(matches!(err, Error::Network { .. }), "{err:?}");
        assert!(err.to_string().contains("127.0.0.1:1"));
    }

    // Longer than reqwest's default 30s total timeout.
    #[test]
    #[ignore = "waits 35s for the slow server"]
    fn slow_server_is_waited_for() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = thread::spawn(move || {
            let (mut conn, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = conn.read(&mut buf);
            thread::sleep(Duration::from_secs(35));
            conn.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: close\r\n\r\nlate!")
                .unwrap();
        });

        let body = fetch_page(&format!("http://{addr}/")).unwrap();
        assert_eq!(body, "late!");
        server.join().unwrap();
    }

    #[test]
    fn ok_response_body_is_returned() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = thread::spawn(move || {
            let (mut conn, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = conn.read(&mut buf);
            conn.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 7\r\nConnection: close\r\n\r\n<table>")
                .unwrap();
        });

        assert_eq!(fetch_page(&format!("http://{addr}/")).unwrap(), "<table>");
        server.join().unwrap();
    }
}
