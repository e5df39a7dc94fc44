//! Sheet Service - Application service for the character builder session
//!
//! Holds the live draft for the single editor session and drives every use
//! case: point adjustments, eligibility, and save/load through the store
//! port. The store is never awaited while the draft lock is held, so local
//! edits can race ahead of an in-flight save or load; a load that completes
//! after later edits replaces them (last write wins, no merge).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::application::dto::{
    AttributeViewDto, ClassViewDto, LoadReportDto, SheetViewDto, SkillViewDto,
};
use crate::application::ports::outbound::{CharacterStorePort, StoreError};
use crate::domain::aggregates::CharacterDraft;
use crate::domain::services::meets_requirements;
use crate::domain::value_objects::{Attribute, SkillDefinition, CLASSES, SKILLS};

struct SessionState {
    draft: CharacterDraft,
    last_saved_at: Option<DateTime<Utc>>,
    last_loaded_at: Option<DateTime<Utc>>,
}

/// Sheet service trait defining the builder use cases
#[async_trait]
pub trait SheetService: Send + Sync {
    /// Current display surface
    async fn sheet_view(&self) -> SheetViewDto;

    /// Apply a delta to an attribute score, budget permitting
    async fn adjust_attribute(&self, attribute: Attribute, delta: i32) -> SheetViewDto;

    /// Apply a delta to a skill's invested points, budget permitting
    async fn adjust_skill(&self, skill: &'static SkillDefinition, delta: i32) -> SheetViewDto;

    /// Eligibility of every class in the rule table
    async fn class_eligibility(&self) -> Vec<ClassViewDto>;

    /// Push the current sheet to the remote store
    async fn save(&self) -> Result<SheetViewDto, StoreError>;

    /// Pull the stored sheet and replace local state with whatever fields
    /// the store provided
    async fn load(&self) -> Result<LoadReportDto, StoreError>;
}

/// Default implementation backed by the remote store port
pub struct SheetServiceImpl {
    store: Arc<dyn CharacterStorePort>,
    session: RwLock<SessionState>,
}

impl SheetServiceImpl {
    pub fn new(store: Arc<dyn CharacterStorePort>) -> Self {
        Self {
            store,
            session: RwLock::new(SessionState {
                draft: CharacterDraft::new(),
                last_saved_at: None,
                last_loaded_at: None,
            }),
        }
    }
}

#[async_trait]
impl SheetService for SheetServiceImpl {
    async fn sheet_view(&self) -> SheetViewDto {
        let session = self.session.read().await;
        render_view(&session)
    }

    #[instrument(skip(self), fields(attribute = %attribute))]
    async fn adjust_attribute(&self, attribute: Attribute, delta: i32) -> SheetViewDto {
        let mut session = self.session.write().await;
        session.draft.adjust_attribute(attribute, delta);
        debug!(
            score = session.draft.attributes().score(attribute),
            remaining = session.draft.remaining_attribute_points(),
            "Attribute pool after adjustment"
        );
        render_view(&session)
    }

    #[instrument(skip(self, skill), fields(skill = skill.name))]
    async fn adjust_skill(&self, skill: &'static SkillDefinition, delta: i32) -> SheetViewDto {
        let mut session = self.session.write().await;
        session.draft.adjust_skill(skill, delta);
        debug!(
            invested = session.draft.skills().invested(skill.name),
            remaining = session.draft.remaining_skill_points(),
            "Skill pool after adjustment"
        );
        render_view(&session)
    }

    async fn class_eligibility(&self) -> Vec<ClassViewDto> {
        let session = self.session.read().await;
        render_classes(&session.draft)
    }

    #[instrument(skip(self))]
    async fn save(&self) -> Result<SheetViewDto, StoreError> {
        // Snapshot and release the lock before touching the network
        let sheet = self.session.read().await.draft.sheet();
        debug!("Saving character sheet");

        let ack = self.store.save(&sheet).await.inspect_err(|e| {
            error!("Error saving character: {e}");
        })?;
        debug!(response = %ack, "Save response");

        let mut session = self.session.write().await;
        session.last_saved_at = Some(Utc::now());
        info!("Saved character sheet");
        Ok(render_view(&session))
    }

    #[instrument(skip(self))]
    async fn load(&self) -> Result<LoadReportDto, StoreError> {
        let stored = self.store.load().await.inspect_err(|e| {
            error!("Error loading character: {e}");
        })?;

        let mut session = self.session.write().await;
        let attributes_applied = match stored.attributes {
            Some(attributes) => {
                session.draft.restore_attributes(attributes);
                true
            }
            None => {
                warn!("No attributes found in store response");
                false
            }
        };
        let skill_points_applied = match stored.skill_points {
            Some(skills) => {
                session.draft.restore_skills(skills);
                true
            }
            None => {
                warn!("No skill points found in store response");
                false
            }
        };
        session.last_loaded_at = Some(Utc::now());
        info!(attributes_applied, skill_points_applied, "Loaded character sheet");

        Ok(LoadReportDto {
            attributes_applied,
            skill_points_applied,
            sheet: render_view(&session),
        })
    }
}

fn render_classes(draft: &CharacterDraft) -> Vec<ClassViewDto> {
    CLASSES
        .iter()
        .map(|class| ClassViewDto {
            name: class.name,
            eligible: meets_requirements(draft.attributes(), class),
        })
        .collect()
}

fn render_view(session: &SessionState) -> SheetViewDto {
    let draft = &session.draft;
    SheetViewDto {
        remaining_attribute_points: draft.remaining_attribute_points(),
        attributes: Attribute::ALL
            .iter()
            .map(|&attribute| AttributeViewDto {
                name: attribute.name(),
                abbreviation: attribute.abbreviation(),
                score: draft.attributes().score(attribute),
                modifier: draft.attributes().modifier_of(attribute),
            })
            .collect(),
        classes: render_classes(draft),
        skill_point_budget: draft.skill_point_budget(),
        remaining_skill_points: draft.remaining_skill_points(),
        skills: SKILLS
            .iter()
            .map(|skill| SkillViewDto {
                name: skill.name,
                attribute: skill.governed_by.name(),
                attribute_modifier: draft.attributes().modifier_of(skill.governed_by),
                invested: draft.skills().invested(skill.name),
                total: draft.total_skill_value(skill),
            })
            .collect(),
        last_saved_at: session.last_saved_at,
        last_loaded_at: session.last_loaded_at,
    }
}
