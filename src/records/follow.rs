/// Question follows
///
/// Many-to-many "user follows question". No record type of its own.

use crate::db::{Database, Question, User};
use crate::error::Result;
use crate::records::non_empty;

/// Query group over `question_follows`
pub struct QuestionFollow;

impl QuestionFollow {
    pub async fn followers_for_question_id(db: &Database, question_id: i64) -> Result<Option<Vec<User>>> {
        Ok(non_empty(db.followers_for_question_id(question_id).await?))
    }

    pub async fn followed_questions_for_user_id(
        db: &Database,
        user_id: i64,
    ) -> Result<Option<Vec<Question>>> {
        Ok(non_empty(db.followed_questions_for_user_id(user_id).await?))
    }

    pub async fn num_followers_for_question_id(db: &Database, question_id: i64) -> Result<i64> {
        db.num_followers_for_question_id(question_id).await
    }

    /// At most `n` questions, most followers first
    pub async fn most_followed_questions(db: &Database, n: u32) -> Result<Option<Vec<Question>>> {
        Ok(non_empty(db.most_followed_questions(n).await?))
    }

    pub async fn follow(db: &Database, user_id: i64, question_id: i64) -> Result<()> {
        db.insert_follow(user_id, question_id).await
    }
}
