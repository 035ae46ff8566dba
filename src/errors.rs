use thiserror::Error;

use crate::validation::ValidationIssue;
use crate::workflow::{ApplicationStatus, Role};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid reference data: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("draft blocked by validation issues: {issues:?}")]
    DraftNotSubmittable {
        issues: Vec<ValidationIssue>,
    },

    #[error("status transition not allowed: {from:?} -> {to:?}")]
    StatusTransitionNotAllowed {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error("role {role:?} not permitted to move application from {from:?} to {to:?}")]
    RoleNotPermitted {
        role: Role,
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error("application closed: current status is {status:?}")]
    ApplicationClosed {
        status: ApplicationStatus,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
