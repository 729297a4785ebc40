//! Role-based route guarding.

pub mod allowed;

pub use allowed::AllowedRoles;
