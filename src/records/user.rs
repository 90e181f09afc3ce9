/// User finders, relationship accessors and insert

use crate::db::{Database, Question, Reply, User};
use crate::error::{QuestionsError, Result};
use crate::records::{QuestionFollow, QuestionLike};
use tracing::debug;

impl User {
    pub async fn all(db: &Database) -> Result<Vec<User>> {
        db.all_users().await
    }

    pub async fn find_by_id(db: &Database, id: i64) -> Result<Option<User>> {
        db.get_user_by_id(id).await
    }

    pub async fn find_by_name(db: &Database, fname: &str, lname: &str) -> Result<Option<User>> {
        db.get_user_by_name(fname, lname).await
    }

    /// The assigned id, or `NotPersisted` for a user that was never saved
    pub fn persisted_id(&self) -> Result<i64> {
        self.id()
            .ok_or_else(|| QuestionsError::NotPersisted(self.to_string()))
    }

    pub async fn authored_questions(&self, db: &Database) -> Result<Option<Vec<Question>>> {
        Question::find_by_user_id(db, self.persisted_id()?).await
    }

    pub async fn authored_replies(&self, db: &Database) -> Result<Option<Vec<Reply>>> {
        Reply::find_by_user_id(db, self.persisted_id()?).await
    }

    pub async fn followed_questions(&self, db: &Database) -> Result<Option<Vec<Question>>> {
        QuestionFollow::followed_questions_for_user_id(db, self.persisted_id()?).await
    }

    pub async fn liked_questions(&self, db: &Database) -> Result<Option<Vec<Question>>> {
        QuestionLike::liked_questions_for_user_id(db, self.persisted_id()?).await
    }

    /// Distinct authored question titles divided by likes received on them
    ///
    /// Computed from a single aggregate query. Returns `KarmaUndefined`
    /// when the user has received no likes (including having authored nothing).
    pub async fn average_karma(&self, db: &Database) -> Result<f64> {
        let user_id = self.persisted_id()?;
        let (titles, likes) = db.karma_counts(user_id).await?;

        if likes == 0 {
            return Err(QuestionsError::KarmaUndefined(user_id));
        }

        Ok(titles as f64 / likes as f64)
    }

    /// Insert this user and record the generated id on it
    ///
    /// Fails with `AlreadyPersisted` if the user already has an id; the
    /// store is not touched in that case.
    pub async fn save(&mut self, db: &Database) -> Result<i64> {
        if self.id().is_some() {
            return Err(QuestionsError::AlreadyPersisted(self.to_string()));
        }

        let id = db.insert_user(&self.fname, &self.lname).await?;
        self.assign_id(id);
        debug!(user_id = id, "saved user");

        Ok(id)
    }
}
