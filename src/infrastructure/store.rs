//! Remote character store client
//!
//! One resource on the wire: POST the sheet to save it, GET to read it
//! back. Load responses are sometimes wrapped in a `body` envelope by the
//! hosting gateway; the client unwraps that before looking for fields.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::dto::{AttributesDto, SheetPayloadDto};
use crate::application::ports::outbound::{CharacterStorePort, StoreError, StoredSheet};
use crate::domain::entities::{CharacterSheet, SkillAllocation};

/// Client for the remote character store API
pub struct RemoteStoreClient {
    client: Client,
    endpoint: String,
}

impl RemoteStoreClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CharacterStorePort for RemoteStoreClient {
    async fn save(&self, sheet: &CharacterSheet) -> Result<serde_json::Value, StoreError> {
        let request_id = Uuid::new_v4();
        let payload = SheetPayloadDto::from(sheet);
        debug!(%request_id, endpoint = %self.endpoint, "Saving sheet to store");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }

        let ack: serde_json::Value = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        debug!(%request_id, "Store acknowledged save");
        Ok(ack)
    }

    async fn load(&self) -> Result<StoredSheet, StoreError> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, endpoint = %self.endpoint, "Loading sheet from store");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(decode_load_response(value))
    }
}

/// Extract the recognized fields from a load response.
///
/// Each field is optional and applied independently; a field that is present
/// but does not decode is treated the same as an absent one. A partial
/// attribute object counts as undecodable, since local attribute state is
/// never allowed to drop a key.
fn decode_load_response(value: serde_json::Value) -> StoredSheet {
    let body = match value.get("body") {
        Some(body) if !body.is_null() => body.clone(),
        _ => value,
    };

    let attributes = body.get("attributes").and_then(|raw| {
        match serde_json::from_value::<AttributesDto>(raw.clone()) {
            Ok(dto) => Some(dto.into()),
            Err(e) => {
                warn!("Ignoring undecodable attributes in store response: {e}");
                None
            }
        }
    });

    let skill_points = body.get("skillPoints").and_then(|raw| {
        match serde_json::from_value::<HashMap<String, i32>>(raw.clone()) {
            Ok(invested) => Some(SkillAllocation::from(invested)),
            Err(e) => {
                warn!("Ignoring undecodable skill points in store response: {e}");
                None
            }
        }
    });

    StoredSheet {
        attributes,
        skill_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Attribute;
    use serde_json::json;

    fn full_attributes() -> serde_json::Value {
        json!({
            "Strength": 14, "Dexterity": 12, "Constitution": 11,
            "Intelligence": 13, "Wisdom": 10, "Charisma": 8
        })
    }

    #[test]
    fn bare_response_decodes() {
        let stored = decode_load_response(json!({
            "attributes": full_attributes(),
            "skillPoints": { "Stealth": 2 }
        }));
        let attributes = stored.attributes.unwrap();
        assert_eq!(attributes.score(Attribute::Strength), 14);
        assert_eq!(stored.skill_points.unwrap().invested("Stealth"), 2);
    }

    #[test]
    fn enveloped_response_is_unwrapped() {
        let stored = decode_load_response(json!({
            "body": {
                "attributes": full_attributes(),
                "skillPoints": { "Arcana": 1 }
            }
        }));
        assert!(stored.attributes.is_some());
        assert_eq!(stored.skill_points.unwrap().invested("Arcana"), 1);
    }

    #[test]
    fn null_envelope_falls_back_to_the_root() {
        let stored = decode_load_response(json!({
            "body": null,
            "skillPoints": { "Insight": 3 }
        }));
        assert!(stored.attributes.is_none());
        assert_eq!(stored.skill_points.unwrap().invested("Insight"), 3);
    }

    #[test]
    fn missing_fields_come_back_as_none() {
        let stored = decode_load_response(json!({ "body": { "attributes": full_attributes() } }));
        assert!(stored.attributes.is_some());
        assert!(stored.skill_points.is_none());

        let stored = decode_load_response(json!({}));
        assert!(stored.attributes.is_none());
        assert!(stored.skill_points.is_none());
    }

    #[test]
    fn partial_attributes_are_ignored_not_applied() {
        let stored = decode_load_response(json!({
            "attributes": { "Strength": 18 },
            "skillPoints": { "Athletics": 1 }
        }));
        assert!(stored.attributes.is_none());
        assert_eq!(stored.skill_points.unwrap().invested("Athletics"), 1);
    }
}
