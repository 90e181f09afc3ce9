/// Queries against the `replies` table

use crate::db::models::{NewReply, Reply};
use crate::db::Database;
use crate::error::Result;
use tracing::debug;

impl Database {
    /// Every reply, in id order
    pub async fn all_replies(&self) -> Result<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(
            "SELECT id, question_id, parent_id, user_id, body FROM replies ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(replies)
    }

    /// Get reply by ID
    pub async fn get_reply_by_id(&self, id: i64) -> Result<Option<Reply>> {
        let reply = sqlx::query_as::<_, Reply>(
            "SELECT id, question_id, parent_id, user_id, body FROM replies WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(reply)
    }

    /// Replies written by a user
    pub async fn get_replies_by_user_id(&self, user_id: i64) -> Result<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, question_id, parent_id, user_id, body
            FROM replies
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Ok(replies)
    }

    /// Replies at any depth under a question
    pub async fn get_replies_by_question_id(&self, question_id: i64) -> Result<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, question_id, parent_id, user_id, body
            FROM replies
            WHERE question_id = ?
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(self.pool())
        .await?;

        Ok(replies)
    }

    /// Direct children of a reply
    pub async fn get_child_replies(&self, parent_id: i64) -> Result<Vec<Reply>> {
        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT id, question_id, parent_id, user_id, body
            FROM replies
            WHERE parent_id = ?
            ORDER BY id
            "#,
        )
        .bind(parent_id)
        .fetch_all(self.pool())
        .await?;

        Ok(replies)
    }

    /// Insert a reply row and return it with its generated id
    pub async fn insert_reply(&self, input: &NewReply) -> Result<Reply> {
        let reply = sqlx::query_as::<_, Reply>(
            r#"
            INSERT INTO replies (question_id, parent_id, user_id, body)
            VALUES (?, ?, ?, ?)
            RETURNING id, question_id, parent_id, user_id, body
            "#,
        )
        .bind(input.question_id)
        .bind(input.parent_id)
        .bind(input.user_id)
        .bind(&input.body)
        .fetch_one(self.pool())
        .await?;

        debug!(
            reply_id = reply.id,
            question_id = reply.question_id,
            parent_id = ?reply.parent_id,
            "inserted reply"
        );
        Ok(reply)
    }
}
