//! Contains information about a content filter.

use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// A content filter, either a user's own or one of the site-provided
/// system filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    /// The ID of the filter.
    id: u64,

    /// The name of the filter.
    name: String,

    /// The description of the filter.
    description: String,

    /// The ID of the user the filter belongs to. Null if it isn't
    /// assigned to a user (usually system filters only).
    user_id: Option<u64>,

    /// The number of users employing the filter.
    user_count: u64,

    /// If true, is a system filter. System filters are usable by anyone
    /// and don't have a `user_id` set.
    system: bool,

    /// If true, is a public filter. Public filters are usable by anyone.
    public: bool,

    /// The tag IDs (as integers) the filter will spoil.
    spoilered_tag_ids: Vec<u64>,

    /// The complex spoiled filter, if one is set.
    spoilered_complex: Option<String>,

    /// The tag IDs (as integers) the filter will hide.
    hidden_tag_ids: Vec<u64>,

    /// The complex hidden filter, if one is set.
    hidden_complex: Option<String>,
}

impl Filter {
    /// Returns the ID of the filter.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the name of the filter.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description of the filter.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the ID of the user the filter belongs to, if any.
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    /// Returns the number of users employing the filter.
    pub fn user_count(&self) -> u64 {
        self.user_count
    }

    /// Returns whether the filter is a system filter.
    pub fn system(&self) -> bool {
        self.system
    }

    /// Returns whether the filter is public.
    pub fn public(&self) -> bool {
        self.public
    }

    /// Returns the tag IDs the filter will spoil.
    pub fn spoilered_tag_ids(&self) -> &[u64] {
        &self.spoilered_tag_ids
    }

    /// Returns the complex spoiled filter, if one is set.
    pub fn spoilered_complex(&self) -> Option<&str> {
        str_opt_ref!(self.spoilered_complex)
    }

    /// Returns the tag IDs the filter will hide.
    pub fn hidden_tag_ids(&self) -> &[u64] {
        &self.hidden_tag_ids
    }

    /// Returns the complex hidden filter, if one is set.
    pub fn hidden_complex(&self) -> Option<&str> {
        str_opt_ref!(self.hidden_complex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_system_filter() {
        let filter: Filter = serde_json::from_str(
            r#"{
                "id": 56027,
                "name": "Everything",
                "description": "This filter won't filter out anything at all.",
                "user_id": null,
                "user_count": 50123,
                "system": true,
                "public": true,
                "spoilered_tag_ids": [],
                "spoilered_complex": null,
                "hidden_tag_ids": [],
                "hidden_complex": null
            }"#,
        )
        .unwrap();

        assert_eq!(filter.id(), 56027);
        assert_eq!(filter.name(), "Everything");
        assert_eq!(filter.user_id(), None);
        assert_eq!(filter.user_count(), 50123);
        assert!(filter.system());
        assert!(filter.public());
        assert!(filter.spoilered_tag_ids().is_empty());
        assert_eq!(filter.spoilered_complex(), None);
        assert!(filter.hidden_tag_ids().is_empty());
        assert_eq!(filter.hidden_complex(), None);
    }

    #[test]
    fn decodes_a_personal_filter() {
        let filter: Filter = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "mine",
                "description": "",
                "user_id": 216494,
                "user_count": 1,
                "system": false,
                "public": false,
                "spoilered_tag_ids": [40482],
                "spoilered_complex": "safe && solo",
                "hidden_tag_ids": [26911, 27724],
                "hidden_complex": null
            }"#,
        )
        .unwrap();

        assert_eq!(filter.user_id(), Some(216494));
        assert_eq!(filter.spoilered_tag_ids(), [40482]);
        assert_eq!(filter.spoilered_complex(), Some("safe && solo"));
        assert_eq!(filter.hidden_tag_ids(), [26911, 27724]);
    }
}
