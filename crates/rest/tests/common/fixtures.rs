//! Idea fixtures for REST API testing.

use ideas_persistence::types::IdeaData;
use serde_json::{Value, json};

/// A valid create/replace payload.
pub fn idea_payload(idea_id: i64) -> Value {
    json!({
        "idea_id": idea_id,
        "itinerary_name": "Coastal walk",
        "attraction_name": "Seal colony",
        "tags": ["hiking", " sea ", "hiking"],
        "wild_mode": "slow",
        "attraction_location": "Hualien",
        "experience_duration": 3.5
    })
}

/// A stored idea with the given id and name.
pub fn stored_idea(id: u64, name: &str) -> IdeaData {
    let mut idea = IdeaData {
        id,
        idea_id: id,
        itinerary_name: name.to_string(),
        attraction_name: "Trailhead".to_string(),
        wild_mode: "slow".to_string(),
        attraction_location: "Taitung".to_string(),
        experience_duration: 2.0,
        ..Default::default()
    };
    idea.set_tags(["forest", "family"]);
    idea
}
