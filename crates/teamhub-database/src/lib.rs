//! # teamhub-database
//!
//! Persistence for TeamHub. The [`RoleStore`] and [`UserStore`] traits are
//! the only surface the rest of the workspace sees; they are implemented
//! by the PostgreSQL repositories and by [`MemoryStore`].

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod seed;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{RoleStore, UserStore};
