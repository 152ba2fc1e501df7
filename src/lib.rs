//! Tetrisweeper (workspace facade crate).
//!
//! This package exposes the stable `tetrisweeper::{core,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use tetrisweeper_core as core;
pub use tetrisweeper_types as types;
