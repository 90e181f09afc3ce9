/// Reply finders and tree navigation
///
/// Replies form a tree per question through `parent_id`. There is no bulk
/// fetch: each step up or down the tree is one round trip.

use crate::db::{Database, NewReply, Question, Reply, User};
use crate::error::Result;
use crate::records::non_empty;

impl Reply {
    pub async fn all(db: &Database) -> Result<Vec<Reply>> {
        db.all_replies().await
    }

    pub async fn find_by_id(db: &Database, id: i64) -> Result<Option<Reply>> {
        db.get_reply_by_id(id).await
    }

    pub async fn find_by_user_id(db: &Database, user_id: i64) -> Result<Option<Vec<Reply>>> {
        Ok(non_empty(db.get_replies_by_user_id(user_id).await?))
    }

    pub async fn find_by_question_id(db: &Database, question_id: i64) -> Result<Option<Vec<Reply>>> {
        Ok(non_empty(db.get_replies_by_question_id(question_id).await?))
    }

    pub async fn author(&self, db: &Database) -> Result<Option<User>> {
        User::find_by_id(db, self.user_id).await
    }

    pub async fn question(&self, db: &Database) -> Result<Option<Question>> {
        Question::find_by_id(db, self.question_id).await
    }

    /// The reply this one answers; `None` for a root reply
    pub async fn parent_reply(&self, db: &Database) -> Result<Option<Reply>> {
        match self.parent_id {
            Some(parent_id) => Reply::find_by_id(db, parent_id).await,
            None => Ok(None),
        }
    }

    /// Direct children; `None` for a leaf
    pub async fn child_replies(&self, db: &Database) -> Result<Option<Vec<Reply>>> {
        Ok(non_empty(db.get_child_replies(self.id).await?))
    }
}

impl NewReply {
    /// Insert the reply and return it with its generated id
    pub async fn save(&self, db: &Database) -> Result<Reply> {
        db.insert_reply(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support;

    async fn answer(db: &Database, question_id: i64, parent: Option<&Reply>, user_id: i64) -> Reply {
        NewReply {
            question_id,
            parent_id: parent.map(|p| p.id),
            user_id,
            body: "reply".to_string(),
        }
        .save(db)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_by_question_id_absence() {
        let db = Database::open_in_memory().await.unwrap();
        let ada = test_support::user(&db, "Ada", "Lovelace").await;
        let q = test_support::question(&db, "Q1", ada).await;

        assert!(Reply::find_by_question_id(&db, q).await.unwrap().is_none());
        assert!(Reply::find_by_user_id(&db, ada).await.unwrap().is_none());

        answer(&db, q, None, ada).await;
        assert_eq!(Reply::find_by_question_id(&db, q).await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_tree_navigation() {
        let db = Database::open_in_memory().await.unwrap();
        let ada = test_support::user(&db, "Ada", "Lovelace").await;
        let grace = test_support::user(&db, "Grace", "Hopper").await;
        let q = test_support::question(&db, "Q1", ada).await;

        let root = answer(&db, q, None, grace).await;
        let child = answer(&db, q, Some(&root), ada).await;
        let grandchild = answer(&db, q, Some(&child), grace).await;

        assert!(root.parent_reply(&db).await.unwrap().is_none());

        let parent = child.parent_reply(&db).await.unwrap().unwrap();
        assert_eq!(parent, root);

        let children = root.child_replies(&db).await.unwrap().unwrap();
        assert_eq!(children, vec![child.clone()]);

        let parent = grandchild.parent_reply(&db).await.unwrap().unwrap();
        assert!(parent.child_replies(&db).await.unwrap().unwrap().contains(&grandchild));

        assert!(grandchild.child_replies(&db).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_author_and_question() {
        let db = Database::open_in_memory().await.unwrap();
        let ada = test_support::user(&db, "Ada", "Lovelace").await;
        let q = test_support::question(&db, "Q1", ada).await;
        let reply = answer(&db, q, None, ada).await;

        assert_eq!(reply.author(&db).await.unwrap().unwrap().lname, "Lovelace");
        assert_eq!(reply.question(&db).await.unwrap().unwrap().title, "Q1");
        assert_eq!(Reply::all(&db).await.unwrap(), vec![reply]);
    }
}
