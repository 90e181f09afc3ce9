/// Queries over the `question_likes` junction table

use crate::db::models::{Question, User};
use crate::db::Database;
use crate::error::Result;
use tracing::debug;

impl Database {
    /// Users who liked a question
    pub async fn likers_for_question_id(&self, question_id: i64) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT users.id, users.fname, users.lname
            FROM users
            JOIN question_likes ON users.id = question_likes.user_id
            WHERE question_likes.question_id = ?
            ORDER BY users.id
            "#,
        )
        .bind(question_id)
        .fetch_all(self.pool())
        .await?;

        Ok(users)
    }

    /// Number of likes on a question; zero when nobody liked it
    pub async fn num_likes_for_question_id(&self, question_id: i64) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM question_likes WHERE question_id = ?",
        )
        .bind(question_id)
        .fetch_one(self.pool())
        .await?;

        Ok(count)
    }

    /// Questions a user liked
    pub async fn liked_questions_for_user_id(&self, user_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT questions.id, questions.title, questions.body, questions.user_id
            FROM questions
            JOIN question_likes ON questions.id = question_likes.question_id
            WHERE question_likes.user_id = ?
            ORDER BY questions.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Ok(questions)
    }

    /// Top `n` questions by like count
    ///
    /// Grouped by question id; ties are broken by ascending id.
    pub async fn most_liked_questions(&self, n: u32) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT questions.id, questions.title, questions.body, questions.user_id
            FROM questions
            JOIN question_likes ON questions.id = question_likes.question_id
            GROUP BY questions.id
            ORDER BY COUNT(question_likes.user_id) DESC, questions.id ASC
            LIMIT ?
            "#,
        )
        .bind(i64::from(n))
        .fetch_all(self.pool())
        .await?;

        Ok(questions)
    }

    /// Record that a user likes a question
    pub async fn insert_like(&self, user_id: i64, question_id: i64) -> Result<()> {
        sqlx::query("INSERT INTO question_likes (user_id, question_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(question_id)
            .execute(self.pool())
            .await?;

        debug!(user_id, question_id, "inserted like");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support;

    #[tokio::test]
    async fn test_num_likes_counts_junction_rows() {
        let db = Database::open_in_memory().await.unwrap();
        let ada = test_support::user(&db, "Ada", "Lovelace").await;
        let grace = test_support::user(&db, "Grace", "Hopper").await;
        let q1 = test_support::question(&db, "Q1", ada).await;

        assert_eq!(db.num_likes_for_question_id(q1).await.unwrap(), 0);

        db.insert_like(ada, q1).await.unwrap();
        db.insert_like(grace, q1).await.unwrap();
        assert_eq!(db.num_likes_for_question_id(q1).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_likers_and_liked() {
        let db = Database::open_in_memory().await.unwrap();
        let ada = test_support::user(&db, "Ada", "Lovelace").await;
        let grace = test_support::user(&db, "Grace", "Hopper").await;
        let q1 = test_support::question(&db, "Q1", ada).await;
        let q2 = test_support::question(&db, "Q2", grace).await;

        db.insert_like(grace, q1).await.unwrap();
        db.insert_like(grace, q2).await.unwrap();

        let likers = db.likers_for_question_id(q1).await.unwrap();
        assert_eq!(likers.len(), 1);
        assert_eq!(likers[0].id(), Some(grace));

        assert!(db.likers_for_question_id(q2 + 10).await.unwrap().is_empty());
        assert_eq!(db.liked_questions_for_user_id(grace).await.unwrap().len(), 2);
        assert!(db.liked_questions_for_user_id(ada).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_most_liked_ordering() {
        let db = Database::open_in_memory().await.unwrap();
        let ada = test_support::user(&db, "Ada", "Lovelace").await;
        let grace = test_support::user(&db, "Grace", "Hopper").await;
        let q1 = test_support::question(&db, "Q1", ada).await;
        let q2 = test_support::question(&db, "Q2", ada).await;
        let q3 = test_support::question(&db, "Q3", ada).await;

        db.insert_like(ada, q2).await.unwrap();
        db.insert_like(grace, q2).await.unwrap();
        db.insert_like(ada, q3).await.unwrap();
        db.insert_like(grace, q1).await.unwrap();

        let ids: Vec<i64> = db
            .most_liked_questions(3)
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        // q1 and q3 tie on one like each; lower id first
        assert_eq!(ids, vec![q2, q1, q3]);
    }
}
