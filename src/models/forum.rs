//! Contains information about the forums: the forum itself, its topics
//! and the posts inside a topic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single forum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forum {
    /// The forum's name.
    name: String,
    /// The forum's short name (used to identify it).
    short_name: String,
    /// The forum's description.
    description: String,
    /// The amount of topics in the forum.
    topic_count: u64,
    /// The amount of posts in the forum.
    post_count: u64,
}

impl Forum {
    /// Returns the forum's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the forum's short name.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Returns the forum's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the amount of topics in the forum.
    pub fn topic_count(&self) -> u64 {
        self.topic_count
    }

    /// Returns the amount of posts in the forum.
    pub fn post_count(&self) -> u64 {
        self.post_count
    }
}

/// A topic within a forum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// The topic's slug (used to identify it).
    slug: String,

    /// The topic's title.
    title: String,

    /// The amount of posts in the topic.
    post_count: u64,

    /// The amount of views the topic has received.
    view_count: u64,

    /// Whether the topic is sticky.
    sticky: bool,

    /// The time, in UTC, when the last reply was made.
    last_replied_to_at: DateTime<Utc>,

    /// Whether the topic is locked.
    locked: bool,

    /// The ID of the user who made the topic. Null if posted
    /// anonymously.
    user_id: Option<u64>,

    /// The name of the user who made the topic.
    author: String,
}

impl Topic {
    /// Returns the topic's slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the topic's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the amount of posts in the topic.
    pub fn post_count(&self) -> u64 {
        self.post_count
    }

    /// Returns the amount of views the topic has received.
    pub fn view_count(&self) -> u64 {
        self.view_count
    }

    /// Returns whether the topic is sticky.
    pub fn sticky(&self) -> bool {
        self.sticky
    }

    /// Returns the time, in UTC, when the last reply was made.
    pub fn last_replied_to_at(&self) -> DateTime<Utc> {
        self.last_replied_to_at
    }

    /// Returns whether the topic is locked.
    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Returns the ID of the user who made the topic, unless anonymous.
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    /// Returns the name of the user who made the topic.
    pub fn author(&self) -> &str {
        &self.author
    }
}

/// A post inside a forum topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// The post's author.
    author: String,
    /// The post text.
    body: String,
    /// The post's ID (used to identify it).
    id: u64,
    /// The ID of the user the post belongs to, if any.
    user_id: Option<u64>,
}

impl Post {
    /// Returns the post's author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the post text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the post's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the ID of the user the post belongs to, if any.
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_forum() {
        let forum: Forum = serde_json::from_str(
            r#"{
                "name": "Site and Policy",
                "short_name": "dis",
                "description": "For site discussion and policy discussion",
                "topic_count": 1777,
                "post_count": 155089
            }"#,
        )
        .unwrap();

        assert_eq!(forum.name(), "Site and Policy");
        assert_eq!(forum.short_name(), "dis");
        assert_eq!(forum.description(), "For site discussion and policy discussion");
        assert_eq!(forum.topic_count(), 1777);
        assert_eq!(forum.post_count(), 155089);
    }

    #[test]
    fn decodes_a_topic() {
        let topic: Topic = serde_json::from_str(
            r#"{
                "slug": "ask-the-mods-anything",
                "title": "Ask the mods anything",
                "post_count": 33327,
                "view_count": 1553564,
                "sticky": true,
                "last_replied_to_at": "2020-04-01T12:00:00Z",
                "locked": false,
                "user_id": null,
                "author": "Background Pony"
            }"#,
        )
        .unwrap();

        assert_eq!(topic.slug(), "ask-the-mods-anything");
        assert_eq!(topic.title(), "Ask the mods anything");
        assert_eq!(topic.post_count(), 33327);
        assert_eq!(topic.view_count(), 1_553_564);
        assert!(topic.sticky());
        assert!(!topic.locked());
        assert_eq!(topic.user_id(), None);
        assert_eq!(topic.author(), "Background Pony");
        assert_eq!(
            topic.last_replied_to_at(),
            "2020-04-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn decodes_a_post() {
        let post: Post = serde_json::from_str(
            r#"{
                "author": "luckydonald",
                "body": "Ah, that makes sense, thank you!",
                "id": 2761095,
                "user_id": 216494
            }"#,
        )
        .unwrap();

        assert_eq!(post.author(), "luckydonald");
        assert_eq!(post.id(), 2761095);
        assert_eq!(post.user_id(), Some(216494));
    }
}
