/// aa-questions library
///
/// Typed access layer over a single SQLite file holding users, questions,
/// threaded replies, follows and likes.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod records;

// Re-exports for convenience
pub use config::Config;
pub use db::{Database, NewQuestion, NewReply, Question, Reply, TableStats, User};
pub use error::{QuestionsError, Result};
pub use records::{QuestionFollow, QuestionLike};
