use crate::domain::{
    entities::{ArtifactPlan, Selection},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_selection(selection: &Selection) -> Result<(), DomainError> {
        selection.validate()
    }

    pub fn validate_artifact_plan(plan: &ArtifactPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
