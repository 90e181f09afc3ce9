/// Queries over the `question_follows` junction table

use crate::db::models::{Question, User};
use crate::db::Database;
use crate::error::Result;
use tracing::debug;

impl Database {
    /// Users following a question
    pub async fn followers_for_question_id(&self, question_id: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT users.id, users.fname, users.lname
            FROM users
            JOIN question_follows ON users.id = question_follows.user_id
            WHERE question_follows.question_id = ?
            ORDER BY users.id
            "#,
        )
        .bind(question_id)
        .fetch_all(self.pool())
        .await?;

        Ok(users)
    }

    /// Questions a user follows
    pub async fn followed_questions_for_user_id(&self, user_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT questions.id, questions.title, questions.body, questions.user_id
            FROM questions
            JOIN question_follows ON questions.id = question_follows.question_id
            WHERE question_follows.user_id = ?
            ORDER BY questions.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Ok(questions)
    }

    /// Number of follow rows for a question; zero when nobody follows it
    pub async fn num_followers_for_question_id(&self, question_id: i64) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM question_follows WHERE question_id = ?",
        )
        .bind(question_id)
        .fetch_one(self.pool())
        .await?;

        Ok(count)
    }

    /// Top `n` questions by follower count
    ///
    /// Grouped by question id; ties are broken by ascending id.
    pub async fn most_followed_questions(&self, n: u32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT questions.id, questions.title, questions.body, questions.user_id
            FROM questions
            JOIN question_follows ON questions.id = question_follows.question_id
            GROUP BY questions.id
            ORDER BY COUNT(question_follows.user_id) DESC, questions.id ASC
            LIMIT ?
            "#,
        )
        .bind(i64::from(n))
        .fetch_all(self.pool())
        .await?;

        Ok(questions)
    }

    /// Record that a user follows a question
    pub async fn insert_follow(&self, user_id: i64, question_id: i64) -> Result<()> {
        sqlx::query("INSERT INTO question_follows (user_id, question_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(question_id)
            .execute(self.pool())
            .await?;

        debug!(user_id, question_id, "inserted follow");
        Ok(())
    }
}
