//! IdeaStorage implementation for Manticore.

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use crate::core::IdeaStorage;
use crate::error::{BackendError, ResourceError, StorageResult};
use crate::types::IdeaData;

use super::backend::{BACKEND_NAME, ManticoreBackend};

/// Builds an `/insert` or `/replace` body. An id of 0 lets Manticore assign one.
pub(crate) fn write_body(index: &str, id: u64, data: &IdeaData) -> Value {
    let mut body = Map::new();
    body.insert("index".to_string(), json!(index));
    if id != 0 {
        body.insert("id".to_string(), json!(id));
    }
    body.insert("doc".to_string(), data.to_document());
    Value::Object(body)
}

fn response_id(response: &Value) -> Option<u64> {
    match response.get("_id")? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[async_trait]
impl IdeaStorage for ManticoreBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn create(&self, data: &IdeaData) -> StorageResult<u64> {
        let body = write_body(self.index(), data.id, data);
        let response = self.post_json("insert", &body, None).await?;

        let id = response_id(&response).ok_or_else(|| BackendError::SerializationError {
            message: format!("insert response carries no _id: {}", response),
        })?;

        tracing::debug!(id, index = %self.index(), "Inserted idea");
        Ok(id)
    }

    async fn replace(&self, id: u64, data: &IdeaData) -> StorageResult<()> {
        let body = write_body(self.index(), id, data);
        self.post_json("replace", &body, None).await?;

        tracing::debug!(id, index = %self.index(), "Replaced idea");
        Ok(())
    }

    async fn delete(&self, id: u64) -> StorageResult<()> {
        let body = json!({ "index": self.index(), "id": id });
        let response = self.post_json("delete", &body, None).await?;

        let found = response
            .get("found")
            .and_then(Value::as_bool)
            .unwrap_or(true);
        if !found {
            return Err(ResourceError::NotFound {
                index: self.index().to_string(),
                id,
            }
            .into());
        }

        tracing::debug!(id, index = %self.index(), "Deleted idea");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_body_with_id() {
        let data = IdeaData {
            id: 5,
            idea_id: 5,
            itinerary_name: "Trail".to_string(),
            ..Default::default()
        };
        let body = write_body("idea", 5, &data);
        assert_eq!(body["index"], "idea");
        assert_eq!(body["id"], 5);
        assert_eq!(body["doc"]["itinerary_name"], "Trail");
        assert!(body["doc"].get("id").is_none());
    }

    #[test]
    fn test_write_body_without_id() {
        let body = write_body("idea", 0, &IdeaData::default());
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_response_id() {
        assert_eq!(response_id(&json!({"_id": 42})), Some(42));
        assert_eq!(response_id(&json!({"_id": "42"})), Some(42));
        assert_eq!(response_id(&json!({})), None);
    }
}
