//! Contains information about a tag and its alias/implication graph.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::macros::str_opt_ref;

/// A single tag, as returned by the tag and tag-search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// The slug of the tag this tag is aliased to, if any.
    aliased_tag: Option<String>,

    /// The slugs of the tags aliased to this tag.
    aliases: Vec<String>,

    /// The category class of the tag. One of `character`,
    /// `content-fanmade`, `content-official`, `error`, `oc`, `origin`,
    /// `rating`, `species`, `spoiler`. Null for uncategorized tags.
    category: Option<String>,

    /// The long description for the tag.
    description: String,

    /// DNP entries claimed on the tag. The server does not document
    /// their shape, so they are passed through as raw JSON.
    dnp_entries: Vec<Value>,

    /// The tag's ID.
    id: u64,

    /// The image count of the tag.
    images: u64,

    /// The slugs of the tags this tag is implied by.
    implied_by_tags: Vec<String>,

    /// The slugs of the tags this tag implies.
    implied_tags: Vec<String>,

    /// The name of the tag.
    name: String,

    /// The name of the tag in its namespace.
    name_in_namespace: String,

    /// The namespace of the tag, if it has one.
    namespace: Option<String>,

    /// The short description for the tag.
    short_description: String,

    /// The slug for the tag.
    slug: String,

    /// The spoiler image URL for the tag, if one is set.
    spoiler_image: Option<String>,
}

impl Tag {
    /// Returns the slug of the tag this tag is aliased to, if any.
    pub fn aliased_tag(&self) -> Option<&str> {
        str_opt_ref!(self.aliased_tag)
    }

    /// Returns the slugs of the tags aliased to this tag.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns the category class of the tag, if it has one.
    pub fn category(&self) -> Option<&str> {
        str_opt_ref!(self.category)
    }

    /// Returns the long description for the tag.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw DNP entries claimed on the tag.
    pub fn dnp_entries(&self) -> &[Value] {
        &self.dnp_entries
    }

    /// Returns the tag's ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the image count of the tag.
    pub fn images(&self) -> u64 {
        self.images
    }

    /// Returns the slugs of the tags this tag is implied by.
    pub fn implied_by_tags(&self) -> &[String] {
        &self.implied_by_tags
    }

    /// Returns the slugs of the tags this tag implies.
    pub fn implied_tags(&self) -> &[String] {
        &self.implied_tags
    }

    /// Returns the name of the tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name of the tag in its namespace.
    pub fn name_in_namespace(&self) -> &str {
        &self.name_in_namespace
    }

    /// Returns the namespace of the tag, if it has one.
    pub fn namespace(&self) -> Option<&str> {
        str_opt_ref!(self.namespace)
    }

    /// Returns the short description for the tag.
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Returns the slug for the tag.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the spoiler image URL for the tag, if one is set.
    pub fn spoiler_image(&self) -> Option<&str> {
        str_opt_ref!(self.spoiler_image)
    }
}
