//! Contains information about a user profile, its registered links and
//! its awards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// A user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The ID of the user.
    id: u64,

    /// The name of the user.
    name: String,

    /// The slug of the user.
    slug: String,

    /// The role of the user.
    role: String,

    /// The description (bio) of the user, if one is set.
    description: Option<String>,

    /// The URL of the user's thumbnail. Null if they haven't set one.
    avatar_url: Option<String>,

    /// The creation time, in UTC, of the user.
    created_at: DateTime<Utc>,

    /// The comment count of the user.
    comments_count: u64,

    /// The upload count of the user.
    uploads_count: u64,

    /// The forum post count of the user.
    posts_count: u64,

    /// The forum topic count of the user.
    topics_count: u64,

    /// The links the user has registered.
    links: Vec<Link>,

    /// The awards (badges) of the user.
    awards: Vec<Award>,
}

impl User {
    /// Returns the ID of the user.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the name of the user.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slug of the user.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the role of the user.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the description (bio) of the user, if one is set.
    pub fn description(&self) -> Option<&str> {
        str_opt_ref!(self.description)
    }

    /// Returns the URL of the user's thumbnail, if they set one.
    pub fn avatar_url(&self) -> Option<&str> {
        str_opt_ref!(self.avatar_url)
    }

    /// Returns the creation time, in UTC, of the user.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the comment count of the user.
    pub fn comments_count(&self) -> u64 {
        self.comments_count
    }

    /// Returns the upload count of the user.
    pub fn uploads_count(&self) -> u64 {
        self.uploads_count
    }

    /// Returns the forum post count of the user.
    pub fn posts_count(&self) -> u64 {
        self.posts_count
    }

    /// Returns the forum topic count of the user.
    pub fn topics_count(&self) -> u64 {
        self.topics_count
    }

    /// Returns the links the user has registered.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Returns the awards (badges) of the user.
    pub fn awards(&self) -> &[Award] {
        &self.awards
    }
}

/// An artist link registered on a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// The ID of the user who owns the link.
    user_id: u64,
    /// The creation time, in UTC, of the link.
    created_at: DateTime<Utc>,
    /// The state of the link.
    state: String,
    /// The ID of the associated tag, if one is linked.
    tag_id: Option<u64>,
}

impl Link {
    /// Returns the ID of the user who owns the link.
    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Returns the creation time, in UTC, of the link.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the state of the link.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the ID of the associated tag, if one is linked.
    pub fn tag_id(&self) -> Option<u64> {
        self.tag_id
    }
}

/// An award (badge) shown on a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    /// The URL of the award's image.
    image_url: String,
    /// The title of the award.
    title: String,
    /// The ID of the badge the award is derived from.
    id: u64,
    /// The label of the award, if it has one.
    label: Option<String>,
    /// The time, in UTC, the award was given.
    awarded_on: DateTime<Utc>,
}

impl Award {
    /// Returns the URL of the award's image.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns the title of the award.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ID of the badge the award is derived from.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the label of the award, if it has one.
    pub fn label(&self) -> Option<&str> {
        str_opt_ref!(self.label)
    }

    /// Returns the time, in UTC, the award was given.
    pub fn awarded_on(&self) -> DateTime<Utc> {
        self.awarded_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_profile_with_links_and_awards() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 216494,
                "name": "luckydonald",
                "slug": "luckydonald",
                "role": "user",
                "description": null,
                "avatar_url": "https://derpicdn.net/avatars/2016/02/28/03_09_08_673_lucky_avatar.png",
                "created_at": "2014-09-01T14:27:29Z",
                "comments_count": 67,
                "uploads_count": 60,
                "posts_count": 132,
                "topics_count": 4,
                "links": [
                    {
                        "user_id": 216494,
                        "created_at": "2016-09-01T00:00:00Z",
                        "state": "verified",
                        "tag_id": null
                    }
                ],
                "awards": [
                    {
                        "image_url": "https://derpicdn.net/media/2016/9/22/artist.svg",
                        "title": "Artist",
                        "id": 4,
                        "label": null,
                        "awarded_on": "2016-09-22T00:00:00Z"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(user.id(), 216494);
        assert_eq!(user.name(), "luckydonald");
        assert_eq!(user.role(), "user");
        assert_eq!(user.description(), None);
        assert!(user.avatar_url().unwrap().ends_with("lucky_avatar.png"));
        assert_eq!(
            user.created_at(),
            "2014-09-01T14:27:29Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(user.comments_count(), 67);
        assert_eq!(user.uploads_count(), 60);
        assert_eq!(user.posts_count(), 132);
        assert_eq!(user.topics_count(), 4);

        let link = &user.links()[0];
        assert_eq!(link.user_id(), 216494);
        assert_eq!(link.state(), "verified");
        assert_eq!(link.tag_id(), None);

        let award = &user.awards()[0];
        assert_eq!(award.title(), "Artist");
        assert_eq!(award.id(), 4);
        assert_eq!(award.label(), None);
    }
}
