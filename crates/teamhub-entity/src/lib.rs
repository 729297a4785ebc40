//! # teamhub-entity
//!
//! Domain entity models for TeamHub. Every struct in this crate maps to a
//! table row and derives `sqlx::FromRow` alongside the serde traits.

pub mod role;
pub mod task;
pub mod user;
