//! Aggregates - Roots that guard consistency invariants

mod character_draft;

pub use character_draft::{
    CharacterDraft, ATTRIBUTE_POINT_CAP, BASE_SKILL_POINTS, SKILL_POINTS_PER_MODIFIER,
};
