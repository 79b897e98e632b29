//! Idea records.
//!
//! [`IdeaData`] is the document stored in the search index. Tags are stored as
//! a single comma-joined string; [`IdeaData::tags`] and [`IdeaData::set_tags`]
//! convert between that form and a list. [`NewIdea`] is the validated payload
//! accepted from clients, and [`IdeaView`] is what search results expose.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ValidationError;

/// Separator used for the stored tag string.
pub const TAG_SEPARATOR: char = ',';

/// An idea document as stored in the search index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdeaData {
    /// Document id.
    pub id: u64,
    /// Idea id.
    pub idea_id: u64,
    /// Itinerary name.
    pub itinerary_name: String,
    /// Attraction name.
    pub attraction_name: String,
    /// Comma-joined tags.
    pub tags: String,
    /// Rewilding mode.
    pub wild_mode: String,
    /// Attraction location.
    pub attraction_location: String,
    /// Experience duration in hours.
    pub experience_duration: f64,
}

impl IdeaData {
    /// Returns the tags as a list. An empty tag string yields an empty list.
    pub fn tags(&self) -> Vec<String> {
        split_tags(&self.tags)
    }

    /// Stores `tags` as a comma-joined string.
    ///
    /// Tags are trimmed; empty tags and repeats are dropped, keeping the first
    /// occurrence.
    pub fn set_tags<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut joined: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !joined.iter().any(|t| t == tag) {
                joined.push(tag.to_string());
            }
        }
        self.tags = joined.join(",");
    }

    /// Returns the document body sent to the index. The id travels separately.
    pub fn to_document(&self) -> Value {
        json!({
            "idea_id": self.idea_id,
            "itinerary_name": self.itinerary_name,
            "attraction_name": self.attraction_name,
            "tags": self.tags,
            "wild_mode": self.wild_mode,
            "attraction_location": self.attraction_location,
            "experience_duration": self.experience_duration,
        })
    }
}

/// Splits a stored tag string into a list of tags.
pub fn split_tags(tags: &str) -> Vec<String> {
    tags.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Payload for creating or replacing an idea.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewIdea {
    /// Idea id, also used as document id.
    #[serde(default)]
    pub idea_id: i64,
    /// Itinerary name.
    #[serde(default)]
    pub itinerary_name: String,
    /// Attraction name.
    #[serde(default)]
    pub attraction_name: String,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Rewilding mode.
    #[serde(default)]
    pub wild_mode: String,
    /// Attraction location.
    #[serde(default)]
    pub attraction_location: String,
    /// Experience duration in hours.
    #[serde(default)]
    pub experience_duration: f64,
}

impl NewIdea {
    /// Validates the payload, collecting every violation.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.idea_id <= 0 {
            errors.push(ValidationError::InvalidIdea {
                message: "idea_id must be greater than zero".to_string(),
            });
        }

        for (field, value) in [
            ("itinerary_name", &self.itinerary_name),
            ("attraction_name", &self.attraction_name),
            ("wild_mode", &self.wild_mode),
            ("attraction_location", &self.attraction_location),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::MissingRequiredField {
                    field: field.to_string(),
                });
            }
        }

        if self.tags.iter().all(|t| t.trim().is_empty()) {
            errors.push(ValidationError::MissingRequiredField {
                field: "tags".to_string(),
            });
        }

        if let Some(tag) = self.tags.iter().find(|t| t.contains(TAG_SEPARATOR)) {
            errors.push(ValidationError::InvalidIdea {
                message: format!("tag '{}' must not contain '{}'", tag, TAG_SEPARATOR),
            });
        }

        if !self.experience_duration.is_finite() || self.experience_duration <= 0.0 {
            errors.push(ValidationError::InvalidIdea {
                message: "experience_duration must be greater than zero".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Converts the payload into a stored document.
    ///
    /// The idea id doubles as the document id. Call [`NewIdea::validate`] first;
    /// a non-positive id maps to 0.
    pub fn into_data(self) -> IdeaData {
        let id = u64::try_from(self.idea_id).unwrap_or_default();
        let mut data = IdeaData {
            id,
            idea_id: id,
            itinerary_name: self.itinerary_name.trim().to_string(),
            attraction_name: self.attraction_name.trim().to_string(),
            tags: String::new(),
            wild_mode: self.wild_mode.trim().to_string(),
            attraction_location: self.attraction_location.trim().to_string(),
            experience_duration: self.experience_duration,
        };
        data.set_tags(&self.tags);
        data
    }
}

/// An idea as returned by search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdeaView {
    /// Document id.
    pub id: u64,
    /// Idea id.
    pub idea_id: u64,
    /// Itinerary name.
    pub itinerary_name: String,
    /// Attraction name.
    pub attraction_name: String,
    /// Parsed tags.
    pub tags: Vec<String>,
    /// Rewilding mode.
    pub wild_mode: String,
    /// Attraction location.
    pub attraction_location: String,
    /// Experience duration in hours.
    pub experience_duration: f64,
}

impl From<IdeaData> for IdeaView {
    fn from(data: IdeaData) -> Self {
        let tags = data.tags();
        Self {
            id: data.id,
            idea_id: data.idea_id,
            itinerary_name: data.itinerary_name,
            attraction_name: data.attraction_name,
            tags,
            wild_mode: data.wild_mode,
            attraction_location: data.attraction_location,
            experience_duration: data.experience_duration,
        }
    }
}

/// A page of search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching ideas, in backend order.
    pub items: Vec<IdeaView>,
    /// Total number of matches.
    pub total: i64,
    /// Opaque token for the next page.
    pub next_scroll_token: Option<String>,
}

impl SearchResponse {
    /// Returns an empty response.
    pub fn empty() -> Self {
        Self::default()
    }
}
