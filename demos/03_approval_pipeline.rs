/// approval pipeline - submit a draft and walk it through every role
use chrono::NaiveDate;
use pension_financing_rs::{
    ApplicantProfile, EventStore, LoanApplication, LoanApplicationDraft, Money, ReferenceData,
    Role, SafeTimeProvider, SubmissionPayload, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let reference = ReferenceData::standard_pension();
    let mut events = EventStore::new();

    let applicant = ApplicantProfile {
        name: "Sutrisno".to_string(),
        member_number: "KSP-0417".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1970, 3, 12).unwrap(),
    };

    let mut draft = LoanApplicationDraft::new();
    draft.set_birth_date(applicant.birth_date, &reference, &time)?;
    draft.set_available_salary(Money::from_major(3_000_000), &reference, &time)?;
    draft.set_principal_requested(Money::from_major(10_000_000), &reference, &time)?;
    draft.set_tenor_months(24, &reference, &time)?;

    let mut application = LoanApplication::submit(applicant, &draft, &time, &mut events)?;
    application.attach_document(
        "ktp.jpg",
        "image/jpeg",
        "https://storage.example/ktp.jpg",
        &time,
        &mut events,
    );

    // linear pipeline, one role per step
    application.advance(Role::Verifier, &time, &mut events)?;
    application.advance(Role::Manager, &time, &mut events)?;
    application.advance(Role::PetugasPos, &time, &mut events)?;
    println!("final status: {:?}", application.status);

    println!("\naudit trail:");
    for event in events.take_events() {
        println!("  {:?}", event);
    }

    // the boundary payload the REST client would post
    let payload = SubmissionPayload::from_application(&application)?;
    println!("\npayload:\n{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
