/// Queries against the `users` table

use crate::db::models::User;
use crate::db::Database;
use crate::error::Result;
use sqlx::Row;
use tracing::debug;

impl Database {
    /// Every user, in id order
    pub async fn all_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, fname, lname FROM users ORDER BY id")
            .fetch_all(self.pool())
            .await?;

        Ok(users)
    }

    /// Get user by ID
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT id, fname, lname FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        Ok(user)
    }

    /// First user (lowest id) whose first and last name both match exactly
    pub async fn get_user_by_name(&self, fname: &str, lname: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, fname, lname
            FROM users
            WHERE fname = ? AND lname = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(fname)
        .bind(lname)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    /// Insert a user row
    ///
    /// # Returns
    /// * `Ok(i64)` - The generated user ID
    pub async fn insert_user(&self, fname: &str, lname: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (fname, lname)
            VALUES (?, ?)
            RETURNING id
            "#,
        )
        .bind(fname)
        .bind(lname)
        .fetch_one(self.pool())
        .await?;

        let id: i64 = result.try_get(0)?;
        debug!(user_id = id, "inserted user");
        Ok(id)
    }

    /// Distinct titles authored by the user and likes received across them
    ///
    /// # Returns
    /// * `Ok((titles, likes))` - both zero when the user authored nothing
    pub async fn karma_counts(&self, user_id: i64) -> Result<(i64, i64)> {
        let counts = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT
                COUNT(DISTINCT questions.title),
                COUNT(question_likes.user_id)
            FROM questions
            LEFT OUTER JOIN question_likes ON questions.id = question_likes.question_id
            WHERE questions.user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_one(self.pool())
        .await?;

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support;

    #[tokio::test]
    async fn test_insert_and_get_user() {
        let db = Database::open_in_memory().await.unwrap();

        let id = db.insert_user("Ada", "Lovelace").await.unwrap();
        assert!(id > 0);

        let user = db.get_user_by_id(id).await.unwrap().unwrap();
        assert_eq!(user.id(), Some(id));
        assert_eq!(user.fname, "Ada");
        assert_eq!(user.lname, "Lovelace");

        assert!(db.get_user_by_id(id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_user_by_name_returns_first_match() {
        let db = Database::open_in_memory().await.unwrap();

        let first = db.insert_user("Alan", "Turing").await.unwrap();
        db.insert_user("Alan", "Turing").await.unwrap();
        db.insert_user("Alan", "Kay").await.unwrap();

        let user = db.get_user_by_name("Alan", "Turing").await.unwrap().unwrap();
        assert_eq!(user.id(), Some(first));

        assert!(db.get_user_by_name("alan", "turing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_karma_counts() {
        let db = Database::open_in_memory().await.unwrap();

        let author = test_support::user(&db, "Ada", "Lovelace").await;
        let fan = test_support::user(&db, "Grace", "Hopper").await;

        assert_eq!(db.karma_counts(author).await.unwrap(), (0, 0));

        let q1 = test_support::question(&db, "Q1", author).await;
        let q2 = test_support::question(&db, "Q2", author).await;
        assert_eq!(db.karma_counts(author).await.unwrap(), (2, 0));

        db.insert_like(fan, q1).await.unwrap();
        db.insert_like(author, q1).await.unwrap();
        db.insert_like(fan, q2).await.unwrap();
        assert_eq!(db.karma_counts(author).await.unwrap(), (2, 3));
    }
}
