use super::request::read_request_head;
use super::response::{Response, Status};
use super::router::handle_request;
use crate::store::DataStore;
use std::io;
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use tracing::{debug, info, warn};

pub struct HttpServer {
    listener: TcpListener,
    buffer_size: usize,
}

impl HttpServer {
    pub fn bind<A: ToSocketAddrs>(addr: A, buffer_size: usize) -> io::Result<Self> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self {
            listener,
            buffer_size: buffer_size.max(1),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts and fully serves a single connection.
    pub fn serve_one<S: DataStore>(&self, store: &S) -> io::Result<()> {
        let (stream, peer) = self.listener.accept()?;
        debug!(%peer, "accepted connection");
        self.handle_connection(store, stream)
    }

    /// Serves connections one after another until the process is stopped.
    ///
    /// Accept and connection failures are logged and never end the loop.
    pub fn serve_forever<S: DataStore>(&self, store: &S) {
        if let Ok(addr) = self.local_addr() {
            info!(%addr, "serving books");
        }
        loop {
            if let Err(e) = self.serve_one(store) {
                warn!(error = %e, "connection failed");
            }
        }
    }

    fn handle_connection<S: DataStore>(&self, store: &S, mut stream: TcpStream) -> io::Result<()> {
        let raw = read_request_head(&mut stream, self.buffer_size)?;
        let (path, response) = if raw.is_empty() {
            (None, Response::error(Status::BadRequest, "Bad Request"))
        } else {
            handle_request(store, &raw)
        };

        info!(
            method = if path.is_some() { "GET" } else { "-" },
            path = path.as_deref().unwrap_or("-"),
            status = response.status.code(),
            "request"
        );

        response.write_to(&mut stream)
    }
}
