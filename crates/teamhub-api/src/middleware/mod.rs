//! Axum middleware stack.
//!
//! Every stage has the same shape: it receives the request and either
//! hands it on with `next.run(request)` or ends it with an `ApiError`.

pub mod auth;
pub mod cors;
pub mod logging;
pub mod rbac;
