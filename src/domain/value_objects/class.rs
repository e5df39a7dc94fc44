//! Character classes and their minimum attribute requirements

use super::attribute::AttributeSet;

/// A class and the minimum score it demands for every attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: &'static str,
    /// Minimum scores, AttributeSet-shaped: every attribute has an entry
    pub requirements: AttributeSet,
}

pub const CLASSES: [ClassDefinition; 3] = [
    ClassDefinition {
        name: "Barbarian",
        requirements: AttributeSet::new(14, 9, 9, 9, 9, 9),
    },
    ClassDefinition {
        name: "Wizard",
        requirements: AttributeSet::new(9, 9, 9, 14, 9, 9),
    },
    ClassDefinition {
        name: "Bard",
        requirements: AttributeSet::new(9, 9, 9, 9, 9, 14),
    },
];

pub fn class_by_name(name: &str) -> Option<&'static ClassDefinition> {
    CLASSES.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Attribute;

    #[test]
    fn each_class_demands_one_signature_attribute() {
        let signatures = [
            ("Barbarian", Attribute::Strength),
            ("Wizard", Attribute::Intelligence),
            ("Bard", Attribute::Charisma),
        ];
        for (name, signature) in signatures {
            let class = class_by_name(name).unwrap();
            assert_eq!(class.requirements.score(signature), 14);
            for attribute in Attribute::ALL {
                if attribute != signature {
                    assert_eq!(class.requirements.score(attribute), 9);
                }
            }
        }
    }
}
