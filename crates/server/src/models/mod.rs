//! Database models.

pub mod user;

pub use user::User;
