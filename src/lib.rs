pub mod application;
pub mod calculator;
pub mod decimal;
pub mod draft;
pub mod errors;
pub mod events;
pub mod payload;
pub mod reference;
pub mod types;
pub mod validation;
pub mod workflow;

// re-export key types
pub use application::LoanApplication;
pub use calculator::{DeductionBreakdown, TAAWUN_NAME};
pub use decimal::{Money, Rate};
pub use draft::LoanApplicationDraft;
pub use errors::{EngineError, Result};
pub use events::{Event, EventStore};
pub use payload::{DeductionItemPayload, SubmissionPayload};
pub use reference::{GlobalSettings, ReferenceData};
pub use types::{
    ApplicantProfile, ApplicationId, DeductionKind, DeductionLineItem, DeductionRule,
    DocumentAttachment, FinancingCategory, TenorDeductionBand,
};
pub use validation::{ValidationIssue, ValidationReport};
pub use workflow::{ApplicationStatus, Role};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
