/// Data models for database entities
///
/// All models map to database tables and decode through `sqlx::FromRow`,
/// so a row with a missing or mistyped column fails instead of producing
/// a half-filled record.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A row of `users`
///
/// `id` is `None` until the record has been saved and never changes after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    id: Option<i64>,
    pub fname: String,
    pub lname: String,
}

impl User {
    /// Build an unsaved user
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            id: None,
            fname: fname.into(),
            lname: lname.into(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Record the id generated on insert
    ///
    /// Only the first assignment sticks; returns false if an id was already set.
    pub(crate) fn assign_id(&mut self, id: i64) -> bool {
        if self.id.is_some() {
            return false;
        }
        self.id = Some(id);
        true
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "User {} {} (id {})", self.fname, self.lname, id),
            None => write!(f, "User {} {}", self.fname, self.lname),
        }
    }
}

/// A row of `questions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

/// A row of `replies`
///
/// `parent_id` is `None` for a top-level reply to the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reply {
    pub id: i64,
    pub question_id: i64,
    pub parent_id: Option<i64>,
    pub user_id: i64,
    pub body: String,
}

impl Reply {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Input for inserting a new question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}

/// Input for inserting a new reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReply {
    pub question_id: i64,
    pub parent_id: Option<i64>,
    pub user_id: i64,
    pub body: String,
}
