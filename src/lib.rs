//! Building blocks shared by the hello client: absolute disk paths that
//! can't go relative, and listening sockets that close exactly once.

pub mod fs_op;
pub mod logging;
pub mod net;
pub mod settings;

pub use crate::fs_op::{AbsPath, Name, PathError, PathKind, PathName};
pub use crate::net::{BoundListener, Close, Port, ServerError};
