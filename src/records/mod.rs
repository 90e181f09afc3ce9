/// Record types
///
/// `User`, `Question` and `Reply` get finder functions and relationship
/// accessors here; `QuestionFollow` and `QuestionLike` are stateless query
/// groups over the junction tables. Everything takes the `Database` handle
/// explicitly and performs one round trip per call.
///
/// Multi-row finders (other than `all`) return `Ok(None)` when nothing
/// matches and otherwise a non-empty `Vec`.

pub mod follow;
pub mod like;
pub mod question;
pub mod reply;
pub mod user;

pub use follow::QuestionFollow;
pub use like::QuestionLike;

/// Map zero rows to the absence signal
pub(crate) fn non_empty<T>(rows: Vec<T>) -> Option<Vec<T>> {
    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}
