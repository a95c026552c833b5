//! Read models and workflows built on top of the database and the
//! attendance store.

pub mod attendance_feed;
pub mod check_in;
pub mod error;
pub mod export;
pub mod lecturer;
pub mod profile;
pub mod student;

pub use error::ServiceError;

#[cfg(test)]
pub(crate) mod fixtures;
