//! Contains information about a comment left on an image.

use serde::{Deserialize, Serialize};

/// A single comment on an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// The comment's author.
    author: String,

    /// The comment text.
    body: String,

    /// The comment's ID.
    id: u64,

    /// The ID of the image the comment belongs to.
    image_id: u64,

    /// The ID of the user the comment belongs to, if any.
    user_id: Option<u64>,
}

impl Comment {
    /// Returns the comment's author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the comment text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the comment's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the ID of the image the comment belongs to.
    pub fn image_id(&self) -> u64 {
        self.image_id
    }

    /// Returns the ID of the user the comment belongs to, if any.
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_comment() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "author": "Background Pony #48E5",
                "body": "Best pony.",
                "id": 1000,
                "image_id": 283,
                "user_id": null
            }"#,
        )
        .unwrap();

        assert_eq!(comment.author(), "Background Pony #48E5");
        assert_eq!(comment.body(), "Best pony.");
        assert_eq!(comment.id(), 1000);
        assert_eq!(comment.image_id(), 283);
        assert_eq!(comment.user_id(), None);
    }

    #[test]
    fn rejects_a_mistyped_id() {
        let result = serde_json::from_str::<Comment>(
            r#"{
                "author": "a",
                "body": "b",
                "id": "1000",
                "image_id": 283,
                "user_id": null
            }"#,
        );
        assert!(result.is_err());
    }
}
