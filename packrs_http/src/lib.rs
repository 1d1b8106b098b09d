#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod handler;
pub mod server;

pub use error::{Error, Result};
pub use server::{AppState, build_router, run_server};

/// Largest pack the API will assemble in one request.
pub const MAX_PACK_SIZE: usize = 20;
