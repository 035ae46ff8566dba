use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::draft::LoanApplicationDraft;
use crate::errors::{EngineError, Result};
use crate::events::{Event, EventStore};
use crate::types::{
    ApplicantProfile, ApplicationId, DeductionLineItem, DocumentAttachment, FinancingCategory,
};
use crate::workflow::{ApplicationStatus, Role};

/// a submitted loan application
///
/// immutable financial snapshot of the draft it was created from; only the
/// status and the document list change after submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub id: ApplicationId,
    pub applicant: ApplicantProfile,
    pub category: FinancingCategory,
    pub available_salary: Money,
    pub principal: Money,
    pub tenor_months: u32,
    pub installment: Money,
    pub total_deduction: Money,
    pub net_disbursement: Money,
    pub deduction_breakdown: Vec<DeductionLineItem>,
    pub documents: Vec<DocumentAttachment>,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    pub last_status_change: DateTime<Utc>,
}

impl LoanApplication {
    /// turn a validated draft into a submitted application
    ///
    /// the validation pass is re-run here; a draft with outstanding issues
    /// is refused with the issues attached, mirroring the inline form
    /// feedback
    pub fn submit(
        applicant: ApplicantProfile,
        draft: &LoanApplicationDraft,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<Self> {
        let report = draft.validate();
        if !report.is_submittable() {
            return Err(EngineError::DraftNotSubmittable {
                issues: report.into_issues(),
            });
        }

        let now = time.now();
        let application = Self {
            id: Uuid::new_v4(),
            applicant,
            category: draft.category,
            available_salary: draft.available_salary,
            principal: draft.principal_requested,
            tenor_months: draft.tenor_months,
            installment: draft.installment,
            total_deduction: draft.total_deduction,
            net_disbursement: draft.net_disbursement,
            deduction_breakdown: draft.deduction_breakdown.clone(),
            documents: Vec::new(),
            status: ApplicationStatus::Submitted,
            submitted_at: now,
            last_status_change: now,
        };

        events.emit(Event::ApplicationSubmitted {
            application_id: application.id,
            principal: application.principal,
            tenor_months: application.tenor_months,
            net_disbursement: application.net_disbursement,
            timestamp: now,
        });

        Ok(application)
    }

    /// attach supporting document metadata
    pub fn attach_document(
        &mut self,
        name: &str,
        content_type: &str,
        storage_url: &str,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) {
        let now = time.now();
        self.documents.push(DocumentAttachment {
            name: name.to_string(),
            content_type: content_type.to_string(),
            storage_url: storage_url.to_string(),
            uploaded_at: now,
        });

        events.emit(Event::DocumentAttached {
            application_id: self.id,
            name: name.to_string(),
            timestamp: now,
        });
    }

    /// move one step along the approval pipeline
    pub fn advance(
        &mut self,
        actor: Role,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<ApplicationStatus> {
        let from = self.status;
        let to = from
            .next()
            .ok_or(EngineError::ApplicationClosed { status: from })?;

        if !actor.may_transition(from, to) {
            return Err(EngineError::RoleNotPermitted { role: actor, from, to });
        }

        let now = time.now();
        self.status = to;
        self.last_status_change = now;

        events.emit(Event::StatusChanged {
            application_id: self.id,
            old_status: from,
            new_status: to,
            actor,
            timestamp: now,
        });

        if to == ApplicationStatus::Disbursed {
            events.emit(Event::DisbursementRecorded {
                application_id: self.id,
                net_amount: self.net_disbursement,
                timestamp: now,
            });
        }

        Ok(to)
    }

    /// reject an application still under review
    pub fn reject(
        &mut self,
        actor: Role,
        reason: &str,
        time: &SafeTimeProvider,
        events: &mut EventStore,
    ) -> Result<()> {
        let from = self.status;
        let to = ApplicationStatus::Rejected;

        if from.is_terminal() {
            return Err(EngineError::ApplicationClosed { status: from });
        }
        if !from.is_under_review() {
            return Err(EngineError::StatusTransitionNotAllowed { from, to });
        }
        if !actor.may_transition(from, to) {
            return Err(EngineError::RoleNotPermitted { role: actor, from, to });
        }

        let now = time.now();
        self.status = to;
        self.last_status_change = now;

        events.emit(Event::StatusChanged {
            application_id: self.id,
            old_status: from,
            new_status: to,
            actor,
            timestamp: now,
        });
        events.emit(Event::ApplicationRejected {
            application_id: self.id,
            reason: reason.to_string(),
            actor,
            timestamp: now,
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use hourglass_rs::TimeSource;

    use crate::reference::ReferenceData;

    fn session_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        ))
    }

    fn applicant() -> ApplicantProfile {
        ApplicantProfile {
            name: "Sutrisno".to_string(),
            member_number: "KSP-0417".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1978, 6, 1).unwrap(),
        }
    }

    fn submittable_draft(time: &SafeTimeProvider) -> LoanApplicationDraft {
        let reference = ReferenceData::standard_pension();
        let mut draft = LoanApplicationDraft::new();
        draft
            .set_birth_date(applicant().birth_date, &reference, time)
            .unwrap();
        draft
            .set_available_salary(Money::from_major(3_000_000), &reference, time)
            .unwrap();
        draft
            .set_principal_requested(Money::from_major(10_000_000), &reference, time)
            .unwrap();
        draft.set_tenor_months(24, &reference, time).unwrap();
        draft
    }

    #[test]
    fn test_submit_snapshot_and_event() {
        let time = session_time();
        let draft = submittable_draft(&time);
        let mut events = EventStore::new();

        let application =
            LoanApplication::submit(applicant(), &draft, &time, &mut events).unwrap();

        assert_eq!(application.status, ApplicationStatus::Submitted);
        assert_eq!(application.principal, draft.principal_requested);
        assert_eq!(application.installment, draft.installment);
        assert_eq!(application.net_disbursement, draft.net_disbursement);
        assert!(matches!(
            events.events(),
            [Event::ApplicationSubmitted { .. }]
        ));
    }

    #[test]
    fn test_submit_blocked_by_validation() {
        let time = session_time();
        let reference = ReferenceData::standard_pension();
        let mut events = EventStore::new();

        let mut draft = submittable_draft(&time);
        draft.set_tenor_months(5, &reference, &time).unwrap();

        let result = LoanApplication::submit(applicant(), &draft, &time, &mut events);
        match result {
            Err(EngineError::DraftNotSubmittable { issues }) => {
                assert!(!issues.is_empty());
            }
            other => panic!("expected DraftNotSubmittable, got {:?}", other.map(|a| a.status)),
        }
        assert!(events.events().is_empty());
    }

    #[test]
    fn test_full_pipeline() {
        let time = session_time();
        let draft = submittable_draft(&time);
        let mut events = EventStore::new();
        let mut application =
            LoanApplication::submit(applicant(), &draft, &time, &mut events).unwrap();

        assert_eq!(
            application.advance(Role::Verifier, &time, &mut events).unwrap(),
            ApplicationStatus::Verified
        );
        assert_eq!(
            application.advance(Role::Manager, &time, &mut events).unwrap(),
            ApplicationStatus::Approved
        );
        assert_eq!(
            application.advance(Role::PetugasPos, &time, &mut events).unwrap(),
            ApplicationStatus::Disbursed
        );

        // submitted + 3 status changes + disbursement record
        assert_eq!(events.events().len(), 5);
        assert!(matches!(
            events.events().last(),
            Some(Event::DisbursementRecorded { net_amount, .. })
                if *net_amount == application.net_disbursement
        ));

        // pipeline ends here
        assert!(matches!(
            application.advance(Role::AdminPusat, &time, &mut events),
            Err(EngineError::ApplicationClosed { .. })
        ));
    }

    #[test]
    fn test_wrong_role_cannot_advance() {
        let time = session_time();
        let draft = submittable_draft(&time);
        let mut events = EventStore::new();
        let mut application =
            LoanApplication::submit(applicant(), &draft, &time, &mut events).unwrap();

        assert!(matches!(
            application.advance(Role::Officer, &time, &mut events),
            Err(EngineError::RoleNotPermitted { .. })
        ));
        assert_eq!(application.status, ApplicationStatus::Submitted);
    }

    #[test]
    fn test_reject_during_review() {
        let time = session_time();
        let draft = submittable_draft(&time);
        let mut events = EventStore::new();
        let mut application =
            LoanApplication::submit(applicant(), &draft, &time, &mut events).unwrap();

        application
            .reject(Role::Verifier, "berkas tidak lengkap", &time, &mut events)
            .unwrap();
        assert_eq!(application.status, ApplicationStatus::Rejected);
        assert!(matches!(
            events.events().last(),
            Some(Event::ApplicationRejected { .. })
        ));
    }

    #[test]
    fn test_reject_after_approval_refused() {
        let time = session_time();
        let draft = submittable_draft(&time);
        let mut events = EventStore::new();
        let mut application =
            LoanApplication::submit(applicant(), &draft, &time, &mut events).unwrap();

        application.advance(Role::Verifier, &time, &mut events).unwrap();
        application.advance(Role::Manager, &time, &mut events).unwrap();

        assert!(matches!(
            application.reject(Role::Manager, "terlambat", &time, &mut events),
            Err(EngineError::StatusTransitionNotAllowed { .. })
        ));
    }

    #[test]
    fn test_attach_document() {
        let time = session_time();
        let draft = submittable_draft(&time);
        let mut events = EventStore::new();
        let mut application =
            LoanApplication::submit(applicant(), &draft, &time, &mut events).unwrap();

        application.attach_document(
            "ktp.jpg",
            "image/jpeg",
            "https://storage.example/ktp.jpg",
            &time,
            &mut events,
        );

        assert_eq!(application.documents.len(), 1);
        assert_eq!(application.documents[0].name, "ktp.jpg");
        assert!(matches!(
            events.events().last(),
            Some(Event::DocumentAttached { .. })
        ));
    }
}
