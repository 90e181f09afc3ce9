/// Question finders, relationship accessors and rankings

use crate::db::{Database, NewQuestion, Question, Reply, User};
use crate::error::Result;
use crate::records::{non_empty, QuestionFollow, QuestionLike};

impl Question {
    pub async fn all(db: &Database) -> Result<Vec<Question>> {
        db.all_questions().await
    }

    pub async fn find_by_id(db: &Database, id: i64) -> Result<Option<Question>> {
        db.get_question_by_id(id).await
    }

    pub async fn find_by_user_id(db: &Database, user_id: i64) -> Result<Option<Vec<Question>>> {
        Ok(non_empty(db.get_questions_by_user_id(user_id).await?))
    }

    /// The user who asked this question
    pub async fn author(&self, db: &Database) -> Result<Option<User>> {
        User::find_by_id(db, self.user_id).await
    }

    /// All replies under this question, at every depth
    pub async fn replies(&self, db: &Database) -> Result<Option<Vec<Reply>>> {
        Reply::find_by_question_id(db, self.id).await
    }

    pub async fn followers(&self, db: &Database) -> Result<Option<Vec<User>>> {
        QuestionFollow::followers_for_question_id(db, self.id).await
    }

    pub async fn num_followers(&self, db: &Database) -> Result<i64> {
        QuestionFollow::num_followers_for_question_id(db, self.id).await
    }

    pub async fn likers(&self, db: &Database) -> Result<Option<Vec<User>>> {
        QuestionLike::likers_for_question_id(db, self.id).await
    }

    /// Like count; zero rather than absent when nobody liked the question
    pub async fn num_likes(&self, db: &Database) -> Result<i64> {
        QuestionLike::num_likes_for_question_id(db, self.id).await
    }

    pub async fn most_followed(db: &Database, n: u32) -> Result<Option<Vec<Question>>> {
        QuestionFollow::most_followed_questions(db, n).await
    }

    pub async fn most_liked(db: &Database, n: u32) -> Result<Option<Vec<Question>>> {
        QuestionLike::most_liked_questions(db, n).await
    }
}

impl NewQuestion {
    /// Insert the question and return it with its generated id
    pub async fn save(&self, db: &Database) -> Result<Question> {
        db.insert_question(self).await
    }
}
