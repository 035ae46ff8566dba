use serde::{Deserialize, Serialize};

/// application status along the linear approval pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    /// submitted by an officer, awaiting verification
    Submitted,
    /// documents and calculation verified
    Verified,
    /// approved by management, awaiting disbursement
    Approved,
    /// funds paid out, pipeline complete
    Disbursed,
    /// rejected during review
    Rejected,
}

impl ApplicationStatus {
    /// next step of the linear pipeline, None at the end
    pub fn next(&self) -> Option<ApplicationStatus> {
        match self {
            ApplicationStatus::Submitted => Some(ApplicationStatus::Verified),
            ApplicationStatus::Verified => Some(ApplicationStatus::Approved),
            ApplicationStatus::Approved => Some(ApplicationStatus::Disbursed),
            ApplicationStatus::Disbursed | ApplicationStatus::Rejected => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Disbursed | ApplicationStatus::Rejected)
    }

    /// still eligible for rejection
    pub fn is_under_review(&self) -> bool {
        matches!(self, ApplicationStatus::Submitted | ApplicationStatus::Verified)
    }
}

/// user role within the cooperative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// field officer creating applications
    Officer,
    /// unit-level reviewer of documents and amounts
    Verifier,
    /// branch manager with approval authority
    Manager,
    /// unit back office
    AdminUnit,
    /// head office back office
    AdminPusat,
    /// post-office counter staff handling disbursement
    PetugasPos,
}

impl Role {
    /// capability table for pipeline transitions
    ///
    /// dispatch is by enum, never by comparing role strings
    pub fn may_transition(&self, from: ApplicationStatus, to: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        use Role::*;

        match (from, to) {
            (Submitted, Verified) => matches!(self, Verifier | AdminUnit | AdminPusat),
            (Verified, Approved) => matches!(self, Manager | AdminPusat),
            (Approved, Disbursed) => matches!(self, PetugasPos | AdminPusat),
            (Submitted, Rejected) => matches!(self, Verifier | AdminUnit | AdminPusat),
            (Verified, Rejected) => matches!(self, Manager | AdminPusat),
            _ => false,
        }
    }
}
