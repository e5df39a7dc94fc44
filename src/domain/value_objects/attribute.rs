//! The six character attributes and their derived modifiers

use std::fmt;

/// The six fixed attributes every sheet carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Dexterity => "Dexterity",
            Attribute::Constitution => "Constitution",
            Attribute::Intelligence => "Intelligence",
            Attribute::Wisdom => "Wisdom",
            Attribute::Charisma => "Charisma",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Dexterity => "DEX",
            Attribute::Constitution => "CON",
            Attribute::Intelligence => "INT",
            Attribute::Wisdom => "WIS",
            Attribute::Charisma => "CHA",
        }
    }

    /// Resolve a canonical attribute name. Callers outside the domain
    /// (route handlers) use this to reject unknown identifiers.
    pub fn from_name(name: &str) -> Option<Attribute> {
        Attribute::ALL.into_iter().find(|a| a.name() == name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Modifier derived from an attribute score.
///
/// Floor division, not truncation: score 9 is -1, score 0 is -5.
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// Scores for all six attributes. Every attribute is always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSet {
    strength: i32,
    dexterity: i32,
    constitution: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
}

impl AttributeSet {
    /// Score every new sheet starts with
    pub const DEFAULT_SCORE: i32 = 10;

    pub const fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn score(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set_score(&mut self, attribute: Attribute, score: i32) {
        match attribute {
            Attribute::Strength => self.strength = score,
            Attribute::Dexterity => self.dexterity = score,
            Attribute::Constitution => self.constitution = score,
            Attribute::Intelligence => self.intelligence = score,
            Attribute::Wisdom => self.wisdom = score,
            Attribute::Charisma => self.charisma = score,
        }
    }

    pub fn total(&self) -> i32 {
        Attribute::ALL.iter().map(|&a| self.score(a)).sum()
    }

    /// Modifier of the given attribute's current score
    pub fn modifier_of(&self, attribute: Attribute) -> i32 {
        modifier(self.score(attribute))
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SCORE,
            Self::DEFAULT_SCORE,
            Self::DEFAULT_SCORE,
            Self::DEFAULT_SCORE,
            Self::DEFAULT_SCORE,
            Self::DEFAULT_SCORE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_uses_floor_division() {
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(12), 1);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(0), -5);
        assert_eq!(modifier(20), 5);
    }

    #[test]
    fn default_set_starts_at_ten_everywhere() {
        let set = AttributeSet::default();
        for attribute in Attribute::ALL {
            assert_eq!(set.score(attribute), 10);
        }
        assert_eq!(set.total(), 60);
    }

    #[test]
    fn from_name_resolves_canonical_names_only() {
        assert_eq!(Attribute::from_name("Strength"), Some(Attribute::Strength));
        assert_eq!(Attribute::from_name("Charisma"), Some(Attribute::Charisma));
        assert_eq!(Attribute::from_name("strength"), None);
        assert_eq!(Attribute::from_name("Luck"), None);
    }
}
