//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod class;
mod skill;

pub use attribute::{modifier, Attribute, AttributeSet};
pub use class::{class_by_name, ClassDefinition, CLASSES};
pub use skill::{skill_by_name, SkillDefinition, SKILLS};
