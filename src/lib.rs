//! Learntris (workspace facade crate).
//!
//! This package exposes `learntris::{core,protocol,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use learntris_core as core;
pub use learntris_protocol as protocol;
pub use learntris_types as types;
