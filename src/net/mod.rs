//! Listening sockets and the close-once base they are built on.

pub mod close;
pub mod error;
pub mod port;
pub mod server;

pub use close::Close;
pub use error::ServerError;
pub use port::Port;
pub use server::BoundListener;
