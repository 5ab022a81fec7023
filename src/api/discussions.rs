use serde::{Deserialize, Serialize};

use super::{ApiError, Session, decode, expect_ok, local_timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    // The backend serves replies without ids in some listings.
    pub id: Option<String>,
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub replies: Vec<Reply>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
struct DiscussionUpsert<'a> {
    title: &'a str,
    content: &'a str,
    created_at: String,
}

#[derive(Debug, Serialize)]
struct ReplyCreate<'a> {
    content: &'a str,
    created_at: String,
}

impl Session {
    /// Fetch all discussion threads with their replies.
    pub async fn discussions(&self) -> Result<Vec<Discussion>, ApiError> {
        let resp = self
            .http
            .get(self.url("/discussions"))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create_discussion(&self, title: &str, content: &str) -> Result<(), ApiError> {
        tracing::debug!(title, "creating discussion");
        let resp = self
            .http
            .post(self.url("/discussions"))
            .bearer_auth(self.bearer()?)
            .json(&DiscussionUpsert {
                title,
                content,
                created_at: local_timestamp(),
            })
            .send()
            .await?;
        expect_ok(resp).await
    }

    pub async fn reply(&self, discussion_id: &str, content: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/discussions/{discussion_id}/reply")))
            .bearer_auth(self.bearer()?)
            .json(&ReplyCreate {
                content,
                created_at: local_timestamp(),
            })
            .send()
            .await?;
        expect_ok(resp).await
    }

    pub async fn update_discussion(
        &self,
        discussion_id: &str,
        title: &str,
        content: &str,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/discussions/{discussion_id}")))
            .bearer_auth(self.bearer()?)
            .json(&DiscussionUpsert {
                title,
                content,
                created_at: local_timestamp(),
            })
            .send()
            .await?;
        expect_ok(resp).await
    }

    pub async fn delete_discussion(&self, discussion_id: &str) -> Result<(), ApiError> {
        tracing::debug!(discussion_id, "deleting discussion");
        let resp = self
            .http
            .delete(self.url(&format!("/discussions/{discussion_id}")))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        expect_ok(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discussion_deserializes_with_null_reply_id() {
        let json = r#"{
            "id": "t1",
            "user_id": "u1",
            "username": "maya",
            "title": "Yellowing leaves",
            "content": "My monstera has *yellow* edges.",
            "replies": [{
                "id": null,
                "user_id": "u2",
                "username": "ken",
                "content": "Check for **overwatering** first.",
                "created_at": "2025-11-02T18:40:00.000"
            }],
            "created_at": "2025-11-02T17:05:00.000"
        }"#;
        let discussion: Discussion = serde_json::from_str(json).unwrap();
        assert_eq!(discussion.replies.len(), 1);
        assert!(discussion.replies[0].id.is_none());
        assert_eq!(discussion.replies[0].username, "ken");
    }

    #[test]
    fn discussion_deserializes_without_replies() {
        let json = r#"{
            "id": "t2",
            "user_id": "u1",
            "username": "maya",
            "title": "Repotting schedule",
            "content": "How often?",
            "created_at": "2025-11-05T08:00:00.000"
        }"#;
        let discussion: Discussion = serde_json::from_str(json).unwrap();
        assert!(discussion.replies.is_empty());
    }
}
