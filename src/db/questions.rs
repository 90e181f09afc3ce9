/// Queries against the `questions` table

use crate::db::models::{NewQuestion, Question};
use crate::db::Database;
use crate::error::Result;
use tracing::debug;

impl Database {
    /// Every question, in id order
    pub async fn all_questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, title, body, user_id FROM questions ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(questions)
    }

    /// Get question by ID
    pub async fn get_question_by_id(&self, id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, title, body, user_id FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(question)
    }

    /// Questions authored by a user
    pub async fn get_questions_by_user_id(&self, user_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, title, body, user_id FROM questions WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Ok(questions)
    }

    /// Insert a question row and return it with its generated id
    pub async fn insert_question(&self, input: &NewQuestion) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (title, body, user_id)
            VALUES (?, ?, ?)
            RETURNING id, title, body, user_id
            "#,
        )
        .bind(&input.title)
        .bind(&input.body)
        .bind(input.user_id)
        .fetch_one(self.pool())
        .await?;

        debug!(question_id = question.id, user_id = question.user_id, "inserted question");
        Ok(question)
    }
}
