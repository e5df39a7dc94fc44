//! Class eligibility - which classes the current attributes satisfy

use crate::domain::value_objects::{Attribute, AttributeSet, ClassDefinition};

/// True iff every attribute meets or exceeds the class minimum.
/// Skill allocations never enter into this.
pub fn meets_requirements(attributes: &AttributeSet, class: &ClassDefinition) -> bool {
    Attribute::ALL
        .iter()
        .all(|&a| attributes.score(a) >= class.requirements.score(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{class_by_name, CLASSES};

    fn strength_gate(minimum: i32) -> ClassDefinition {
        ClassDefinition {
            name: "Gatekeeper",
            requirements: AttributeSet::new(minimum, 9, 9, 9, 9, 9),
        }
    }

    #[test]
    fn one_attribute_below_minimum_disqualifies() {
        let class = strength_gate(15);
        let mut attributes = AttributeSet::default();

        attributes.set_score(Attribute::Strength, 14);
        assert!(!meets_requirements(&attributes, &class));

        attributes.set_score(Attribute::Strength, 15);
        assert!(meets_requirements(&attributes, &class));
    }

    #[test]
    fn defaults_satisfy_no_class_in_the_table() {
        let attributes = AttributeSet::default();
        for class in &CLASSES {
            assert!(!meets_requirements(&attributes, class));
        }
    }

    #[test]
    fn raising_the_signature_attribute_qualifies() {
        let barbarian = class_by_name("Barbarian").unwrap();
        let mut attributes = AttributeSet::default();

        attributes.set_score(Attribute::Strength, 14);
        assert!(meets_requirements(&attributes, barbarian));

        attributes.set_score(Attribute::Strength, 13);
        assert!(!meets_requirements(&attributes, barbarian));
    }

    #[test]
    fn requirements_check_every_attribute_not_just_the_signature() {
        let barbarian = class_by_name("Barbarian").unwrap();
        let mut attributes = AttributeSet::default();
        attributes.set_score(Attribute::Strength, 18);
        attributes.set_score(Attribute::Wisdom, 8);
        assert!(!meets_requirements(&attributes, barbarian));
    }
}
