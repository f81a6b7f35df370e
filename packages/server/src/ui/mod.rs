//! WebSocket chat relay server implementation.

mod handler;
mod runner;
pub mod session;
mod signal;
pub mod state;

pub use runner::{create_router, run, serve};
