/// Question likes
///
/// Many-to-many "user likes question", queried for listings and counts.

use crate::db::{Database, Question, User};
use crate::error::Result;
use crate::records::non_empty;

/// Query group over `question_likes`
pub struct QuestionLike;

impl QuestionLike {
    pub async fn likers_for_question_id(db: &Database, question_id: i64) -> Result<Option<Vec<User>>> {
        Ok(non_empty(db.likers_for_question_id(question_id).await?))
    }

    /// Like count for a question; zero, not absent, when there are none
    pub async fn num_likes_for_question_id(db: &Database, question_id: i64) -> Result<i64> {
        db.num_likes_for_question_id(question_id).await
    }

    pub async fn liked_questions_for_user_id(
        db: &Database,
        user_id: i64,
    ) -> Result<Option<Vec<Question>>> {
        Ok(non_empty(db.liked_questions_for_user_id(user_id).await?))
    }

    /// At most `n` questions, most likes first
    pub async fn most_liked_questions(db: &Database, n: u32) -> Result<Option<Vec<Question>>> {
        Ok(non_empty(db.most_liked_questions(n).await?))
    }

    pub async fn like(db: &Database, user_id: i64, question_id: i64) -> Result<()> {
        db.insert_like(user_id, question_id).await
    }
}
