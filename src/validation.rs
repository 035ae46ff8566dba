use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decimal::Money;
use crate::draft::LoanApplicationDraft;

/// shortest tenor the cooperative finances
pub const MIN_TENOR_MONTHS: u32 = 6;

/// smallest principal the cooperative finances
pub const MIN_PRINCIPAL_UNITS: i64 = 1_000_000;

/// salary that must remain after the installment is taken
pub const MIN_REMAINDER_BUFFER_UNITS: i64 = 100_000;

/// advisory validation finding, surfaced inline next to a form field
///
/// issues never interrupt the calculation; they only block submission
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationIssue {
    #[error("tenor {requested} months outside allowed range {min}..={max}")]
    TenorOutOfRange {
        requested: u32,
        min: u32,
        max: u32,
    },

    #[error("principal {requested} below minimum {minimum}")]
    PrincipalBelowMinimum {
        requested: Money,
        minimum: Money,
    },

    #[error("installment {installment} exceeds salary remainder {remainder}")]
    InstallmentExceedsRemainder {
        installment: Money,
        remainder: Money,
    },

    #[error("salary remainder {remainder} below required buffer {minimum}")]
    InsufficientRemainderBuffer {
        remainder: Money,
        minimum: Money,
    },
}

/// outcome of the submission-time validation pass
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_submittable(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

/// cross-check a draft's derived state against the submission rules
pub fn validate_draft(draft: &LoanApplicationDraft) -> ValidationReport {
    let mut issues = Vec::new();

    if draft.tenor_months < MIN_TENOR_MONTHS || draft.tenor_months > draft.max_tenor {
        issues.push(ValidationIssue::TenorOutOfRange {
            requested: draft.tenor_months,
            min: MIN_TENOR_MONTHS,
            max: draft.max_tenor,
        });
    }

    let minimum_principal = Money::from_major(MIN_PRINCIPAL_UNITS);
    if draft.principal_requested < minimum_principal {
        issues.push(ValidationIssue::PrincipalBelowMinimum {
            requested: draft.principal_requested,
            minimum: minimum_principal,
        });
    }

    let remainder = draft.available_salary - draft.installment;
    if draft.installment > remainder {
        issues.push(ValidationIssue::InstallmentExceedsRemainder {
            installment: draft.installment,
            remainder,
        });
    }

    let buffer = Money::from_major(MIN_REMAINDER_BUFFER_UNITS);
    if remainder < buffer
        && draft.installment.is_positive()
        && draft.available_salary.is_positive()
    {
        issues.push(ValidationIssue::InsufficientRemainderBuffer {
            remainder,
            minimum: buffer,
        });
    }

    ValidationReport { issues }
}
