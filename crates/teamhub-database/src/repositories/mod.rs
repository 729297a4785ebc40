//! PostgreSQL implementations of the store traits.

pub mod role;
pub mod user;

pub use role::PgRoleRepository;
pub use user::PgUserRepository;
