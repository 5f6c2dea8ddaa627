//! Library layer for SendGrid message activity: the in-memory table model
//! and its CSV serialization.
//!
//! Wraps the `sendgrid_activity_api` crate. A fetch produces a fresh
//! [`ActivityTable`] owned by the caller; CSV export is a pure function of
//! that value rather than a re-read of whatever was rendered.

pub mod csv;
pub mod error;
pub mod table;

pub use sendgrid_activity_api as api;
pub use sendgrid_activity_api::types;
pub use sendgrid_activity_api::{Client, MessageQuery, DEFAULT_LIMIT};

pub use csv::to_csv;
pub use error::ActivityError;
pub use table::{ActivityTable, Column, MSG_ID_FIELD};
