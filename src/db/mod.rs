/// Database module for aa-questions
///
/// Handles all database operations using SQLite and sqlx.
/// Every statement is parameterized; each call is one round trip.

pub mod connection;
pub mod follows;
pub mod likes;
pub mod models;
pub mod questions;
pub mod replies;
pub mod users;

pub use connection::{Database, TableStats};
pub use models::*;
