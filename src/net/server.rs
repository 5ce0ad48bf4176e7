use std::io;
use std::net::{Ipv4Addr, SocketAddr, TcpListener};

use tracing::debug;

use super::close::Close;
use super::error::ServerError;
use super::port::Port;

/// A TCP server socket bound to a port, ready to accept incoming connections.
///
/// Accepting connections is left to the caller through
/// [`with_socket`](BoundListener::with_socket). Closing is idempotent and
/// never fails; dropping a `BoundListener` closes it too.
#[derive(Debug)]
pub struct BoundListener {
    port: Port,
    socket: Close<TcpListener>,
}

impl BoundListener {
    /// Bind a new TCP server socket to `port` on all local interfaces.
    ///
    /// `Port::ANY` lets the OS choose; [`port`](BoundListener::port) then
    /// reports the port it picked.
    pub fn bind(port: impl Into<Port>) -> Result<Self, ServerError> {
        let requested = port.into();
        let bind_err = |source: io::Error| ServerError::Bind {
            port: requested,
            source,
        };

        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, requested.get())).map_err(bind_err)?;
        let port = Port(listener.local_addr().map_err(bind_err)?.port());
        debug!(%port, "bound listening socket");

        Ok(BoundListener {
            port,
            socket: Close::new(listener),
        })
    }

    /// The port number this socket is bound to.
    pub fn port(&self) -> Port {
        self.port
    }

    /// The local address, or `None` once closed.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.with(TcpListener::local_addr)?.ok()
    }

    /// Run `f` on the listening socket while it is open.
    pub fn with_socket<R>(&self, f: impl FnOnce(&TcpListener) -> R) -> Option<R> {
        self.socket.with(f)
    }

    #[cfg(unix)]
    pub fn as_raw_fd(&self) -> Option<std::os::unix::io::RawFd> {
        use std::os::unix::io::AsRawFd;
        self.socket.with(<TcpListener as AsRawFd>::as_raw_fd)
    }

    pub fn is_closed(&self) -> bool {
        self.socket.is_closed()
    }

    /// Stop listening on the port. Calling this again does nothing.
    ///
    /// An accept still running inside [`with_socket`](BoundListener::with_socket)
    /// keeps the socket open until it returns; `close` itself never blocks.
    pub fn close(&self) {
        // Dropping the std listener closes the descriptor and ignores errors.
        if self.socket.close() {
            debug!(port = %self.port, "closed listening socket");
        }
    }
}

impl Drop for BoundListener {
    fn drop(&mut self) {
        self.close();
    }
}
