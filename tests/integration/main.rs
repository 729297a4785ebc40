//! End-to-end tests driving the HTTP router against the in-memory store.

mod admin_test;
mod auth_test;
mod helpers;
