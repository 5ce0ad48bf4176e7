use thiserror::Error;

use super::port::Port;

/// Errors from opening a listening socket.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The socket couldn't be bound: port in use, not permitted, and so on.
    #[error("could not bind TCP port {port}: {source}")]
    Bind {
        port: Port,
        #[source]
        source: std::io::Error,
    },
}
