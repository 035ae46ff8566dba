/// quick start - minimal example to get started
use chrono::NaiveDate;
use pension_financing_rs::{
    LoanApplicationDraft, Money, ReferenceData, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let reference = ReferenceData::standard_pension();

    // fill the wizard, derived fields recompute on every edit
    let mut draft = LoanApplicationDraft::new();
    draft.set_birth_date(NaiveDate::from_ymd_opt(1970, 3, 12).unwrap(), &reference, &time)?;
    draft.set_available_salary(Money::from_major(3_000_000), &reference, &time)?;
    draft.set_principal_requested(Money::from_major(50_000_000), &reference, &time)?;
    draft.set_tenor_months(24, &reference, &time)?;

    println!("max tenor     : {} months", draft.max_tenor);
    println!("max ceiling   : Rp {}", draft.max_ceiling);
    println!("installment   : Rp {}", draft.installment);
    println!("deductions    : Rp {}", draft.total_deduction);
    println!("net disbursed : Rp {}", draft.net_disbursement);

    let report = draft.validate();
    println!("submittable   : {}", report.is_submittable());

    Ok(())
}
