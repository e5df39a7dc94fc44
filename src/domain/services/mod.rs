//! Domain services - Pure business logic operations

mod eligibility;

pub use eligibility::meets_requirements;
