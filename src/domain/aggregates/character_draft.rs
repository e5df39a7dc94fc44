//! Character Draft - The root aggregate for a sheet under construction
//!
//! All point allocation goes through this aggregate so the two budgets stay
//! enforced: the shared 70-point attribute pool and the Intelligence-derived
//! skill point pool. Mutations that would break a budget are silently
//! dropped; the caller observes nothing but the absence of a state change.

use crate::domain::entities::{CharacterSheet, SkillAllocation};
use crate::domain::value_objects::{Attribute, AttributeSet, SkillDefinition};

/// Ceiling for the sum of all six attribute scores
pub const ATTRIBUTE_POINT_CAP: i32 = 70;
/// Skill points granted before the Intelligence modifier applies
pub const BASE_SKILL_POINTS: i32 = 10;
/// Extra skill points per point of Intelligence modifier
pub const SKILL_POINTS_PER_MODIFIER: i32 = 4;

/// A character sheet being edited, with both point budgets enforced
#[derive(Debug, Clone)]
pub struct CharacterDraft {
    attributes: AttributeSet,
    skills: SkillAllocation,
    /// Cached `skill_point_budget() - skills.total_invested()`. Refreshed
    /// when Intelligence changes or when state is replaced wholesale; spend
    /// is never rolled back, so this can go negative after the budget
    /// shrinks below points already spent.
    remaining_skill_points: i32,
}

impl CharacterDraft {
    pub fn new() -> Self {
        let mut draft = Self {
            attributes: AttributeSet::default(),
            skills: SkillAllocation::new(),
            remaining_skill_points: 0,
        };
        draft.refresh_remaining_skill_points();
        draft
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn skills(&self) -> &SkillAllocation {
        &self.skills
    }

    pub fn remaining_attribute_points(&self) -> i32 {
        ATTRIBUTE_POINT_CAP - self.attributes.total()
    }

    pub fn skill_point_budget(&self) -> i32 {
        BASE_SKILL_POINTS
            + SKILL_POINTS_PER_MODIFIER * self.attributes.modifier_of(Attribute::Intelligence)
    }

    pub fn remaining_skill_points(&self) -> i32 {
        self.remaining_skill_points
    }

    /// Invested points plus the governing attribute's modifier - the number
    /// shown to the user for a skill
    pub fn total_skill_value(&self, skill: &SkillDefinition) -> i32 {
        self.skills.invested(skill.name) + self.attributes.modifier_of(skill.governed_by)
    }

    /// Snapshot for persistence
    pub fn sheet(&self) -> CharacterSheet {
        CharacterSheet {
            attributes: self.attributes,
            skill_points: self.skills.clone(),
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Add `delta` to an attribute, if the shared pool allows it.
    ///
    /// The pool check uses the raw delta against the current total; the
    /// zero floor is applied only afterwards. A large negative delta on a
    /// low attribute therefore passes a check for a bigger decrease than is
    /// actually applied. That mismatch is long-standing observable behavior
    /// and is kept as-is.
    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: i32) {
        if self.attributes.total() + delta > ATTRIBUTE_POINT_CAP {
            return;
        }
        let current = self.attributes.score(attribute);
        self.attributes.set_score(attribute, (current + delta).max(0));
        if attribute == Attribute::Intelligence {
            self.refresh_remaining_skill_points();
        }
    }

    /// Add `delta` to a skill's invested points, if the skill pool allows
    /// it. Invested points are not floored at zero; a negative delta below
    /// zero refunds the pool.
    pub fn adjust_skill(&mut self, skill: &SkillDefinition, delta: i32) {
        if self.remaining_skill_points - delta < 0 {
            return;
        }
        self.skills.add(skill.name, delta);
        self.remaining_skill_points -= delta;
    }

    /// Replace all attribute scores wholesale (store load)
    pub fn restore_attributes(&mut self, attributes: AttributeSet) {
        self.attributes = attributes;
        self.refresh_remaining_skill_points();
    }

    /// Replace all skill allocations wholesale (store load)
    pub fn restore_skills(&mut self, skills: SkillAllocation) {
        self.skills = skills;
        self.refresh_remaining_skill_points();
    }

    /// Re-derive the cached remaining value from the budget invariant.
    /// Only Intelligence changes and wholesale restores call this; ordinary
    /// skill spending adjusts the cache incrementally.
    fn refresh_remaining_skill_points(&mut self) {
        self.remaining_skill_points = self.skill_point_budget() - self.skills.total_invested();
    }
}

impl Default for CharacterDraft {
    fn default() -> Self {
        Self::new()
    }
}
