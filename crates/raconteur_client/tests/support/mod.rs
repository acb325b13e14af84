//! Local HTTP fixture for streaming tests.
//!
//! A one-connection TCP server speaking just enough HTTP/1.1 to exercise the
//! client: it captures the request, then replays a scripted chunked response.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

/// What the fixture does after reading the request.
pub enum Script {
    /// Stream `chunks` with the given status, then end the body cleanly.
    Chunks { status: u16, chunks: Vec<Vec<u8>> },
    /// Send headers, then hold the connection open forever.
    Stall,
    /// Send one good chunk, then drop the connection mid-frame.
    DropMidStream,
}

/// A captured request: the head (request line + headers) and the body.
pub type CapturedRequest = (String, String);

pub struct Fixture {
    pub base_url: String,
    pub request: oneshot::Receiver<CapturedRequest>,
}

/// Spawns the fixture server and returns its base URL plus a channel that
/// yields the captured request.
pub async fn spawn(script: Script) -> Fixture {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fixture");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let captured = read_request(&mut socket).await;
        let _ = tx.send(captured);

        match script {
            Script::Chunks { status, chunks } => {
                write_head(&mut socket, status).await;
                for chunk in chunks {
                    write_chunk(&mut socket, &chunk).await;
                    // Pause so chunks arrive as separate reads.
                    tokio::time::sleep(Duration::from_millis(25)).await;
                }
                socket.write_all(b"0\r\n\r\n").await.expect("write terminator");
                socket.flush().await.expect("flush");
            }
            Script::Stall => {
                write_head(&mut socket, 200).await;
                std::future::pending::<()>().await;
            }
            Script::DropMidStream => {
                write_head(&mut socket, 200).await;
                write_chunk(&mut socket, b"first ").await;
                tokio::time::sleep(Duration::from_millis(25)).await;
                socket.write_all(b"5\r\nab").await.expect("write partial frame");
                socket.flush().await.expect("flush");
                // Dropping the socket here truncates the chunked body.
            }
        }
    });

    Fixture {
        base_url: format!("http://{addr}"),
        request: rx,
    }
}

async fn write_head(socket: &mut TcpStream, status: u16) {
    let head = format!(
        "HTTP/1.1 {status} OK\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         Transfer-Encoding: chunked\r\n\
         Connection: close\r\n\r\n"
    );
    socket.write_all(head.as_bytes()).await.expect("write head");
    socket.flush().await.expect("flush head");
}

async fn write_chunk(socket: &mut TcpStream, chunk: &[u8]) {
    let frame = format!("{:x}\r\n", chunk.len());
    socket.write_all(frame.as_bytes()).await.expect("write frame size");
    socket.write_all(chunk).await.expect("write chunk");
    socket.write_all(b"\r\n").await.expect("write frame end");
    socket.flush().await.expect("flush chunk");
}

async fn read_request(socket: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];

    let (head_end, length) = loop {
        let n = socket.read(&mut tmp).await.expect("read request");
        if n == 0 {
            return (String::from_utf8_lossy(&buf).to_string(), String::new());
        }
        buf.extend_from_slice(&tmp[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).to_string();
            break (pos + 4, content_length(&head));
        }
    };

    while buf.len() < head_end + length {
        let n = socket.read(&mut tmp).await.expect("read body");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&tmp[..n]);
    }

    let head = String::from_utf8_lossy(&buf[..head_end - 4]).to_string();
    let body_end = (head_end + length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[head_end..body_end]).to_string();
    (head, body)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
