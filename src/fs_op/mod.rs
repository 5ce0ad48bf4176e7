//! Absolute disk paths and the few disk operations done through them.
//!
//! `AbsPath` is built and navigated purely lexically in `path`. The methods
//! that touch the disk are split by concern: `stat` looks, `create` makes
//! folders, `mv` renames, `remove` deletes.

pub mod create;
pub mod error;
pub mod mv;
pub mod name;
pub mod path;
pub mod remove;
pub mod stat;

pub use error::PathError;
pub use name::{Name, PathName};
pub use path::AbsPath;
pub use stat::PathKind;
