//! Sheet DTOs: the store wire contract and the display surface

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CharacterSheet, SkillAllocation};
use crate::domain::value_objects::{Attribute, AttributeSet};

/// Attribute scores exactly as the store serializes them
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributesDto {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl From<&AttributeSet> for AttributesDto {
    fn from(set: &AttributeSet) -> Self {
        Self {
            strength: set.score(Attribute::Strength),
            dexterity: set.score(Attribute::Dexterity),
            constitution: set.score(Attribute::Constitution),
            intelligence: set.score(Attribute::Intelligence),
            wisdom: set.score(Attribute::Wisdom),
            charisma: set.score(Attribute::Charisma),
        }
    }
}

impl From<AttributesDto> for AttributeSet {
    fn from(dto: AttributesDto) -> Self {
        AttributeSet::new(
            dto.strength,
            dto.dexterity,
            dto.constitution,
            dto.intelligence,
            dto.wisdom,
            dto.charisma,
        )
    }
}

/// The wire unit POSTed to the store: `{ attributes, skillPoints }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetPayloadDto {
    pub attributes: AttributesDto,
    #[serde(rename = "skillPoints")]
    pub skill_points: HashMap<String, i32>,
}

impl From<&CharacterSheet> for SheetPayloadDto {
    fn from(sheet: &CharacterSheet) -> Self {
        Self {
            attributes: AttributesDto::from(&sheet.attributes),
            skill_points: HashMap::from(&sheet.skill_points),
        }
    }
}

impl From<SheetPayloadDto> for CharacterSheet {
    fn from(dto: SheetPayloadDto) -> Self {
        CharacterSheet {
            attributes: dto.attributes.into(),
            skill_points: SkillAllocation::from(dto.skill_points),
        }
    }
}

// ============================================================================
// Display surface
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AttributeViewDto {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub score: i32,
    pub modifier: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassViewDto {
    pub name: &'static str,
    pub eligible: bool,
}

/// On-demand view of a class's full per-attribute minimums
#[derive(Debug, Clone, Serialize)]
pub struct ClassRequirementsDto {
    pub name: &'static str,
    pub requirements: AttributesDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillViewDto {
    pub name: &'static str,
    pub attribute: &'static str,
    pub attribute_modifier: i32,
    pub invested: i32,
    pub total: i32,
}

/// Everything the builder screen shows
#[derive(Debug, Clone, Serialize)]
pub struct SheetViewDto {
    pub remaining_attribute_points: i32,
    pub attributes: Vec<AttributeViewDto>,
    pub classes: Vec<ClassViewDto>,
    pub skill_point_budget: i32,
    pub remaining_skill_points: i32,
    pub skills: Vec<SkillViewDto>,
    pub last_saved_at: Option<DateTime<Utc>>,
    pub last_loaded_at: Option<DateTime<Utc>>,
}

/// Body of an attribute or skill adjustment request
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AdjustRequestDto {
    pub delta: i32,
}

/// Outcome of a load: which fields the store actually provided
#[derive(Debug, Clone, Serialize)]
pub struct LoadReportDto {
    pub attributes_applied: bool,
    pub skill_points_applied: bool,
    pub sheet: SheetViewDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_with_the_store_field_names() {
        let mut sheet = CharacterSheet::default();
        sheet.skill_points.add("Stealth", 3);
        let payload = SheetPayloadDto::from(&sheet);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["attributes"]["Strength"], 10);
        assert_eq!(json["attributes"]["Charisma"], 10);
        assert_eq!(json["skillPoints"]["Stealth"], 3);
        assert!(json["attributes"].get("strength").is_none());
        assert!(json.get("skill_points").is_none());
    }

    #[test]
    fn payload_round_trips_into_the_domain() {
        let json = serde_json::json!({
            "attributes": {
                "Strength": 14, "Dexterity": 12, "Constitution": 10,
                "Intelligence": 8, "Wisdom": 10, "Charisma": 9
            },
            "skillPoints": { "Arcana": 2, "Stealth": -1 }
        });
        let payload: SheetPayloadDto = serde_json::from_value(json).unwrap();
        let sheet = CharacterSheet::from(payload);
        assert_eq!(sheet.attributes.score(Attribute::Strength), 14);
        assert_eq!(sheet.attributes.score(Attribute::Intelligence), 8);
        assert_eq!(sheet.skill_points.invested("Arcana"), 2);
        assert_eq!(sheet.skill_points.invested("Stealth"), -1);
    }

    #[test]
    fn attributes_dto_rejects_a_partial_set() {
        let json = serde_json::json!({ "Strength": 14, "Dexterity": 12 });
        assert!(serde_json::from_value::<AttributesDto>(json).is_err());
    }
}
