//! Infrastructure layer: wire DTOs, transport-backed connections and the
//! in-memory room registry.

pub mod connection;
pub mod dto;
pub mod repository;
