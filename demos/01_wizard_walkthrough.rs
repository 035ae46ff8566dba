/// wizard walkthrough - the full creation flow with itemized deductions
use chrono::NaiveDate;
use pension_financing_rs::{
    LoanApplicationDraft, Money, ReferenceData, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let reference = ReferenceData::standard_pension();
    reference.validate()?;

    let mut draft = LoanApplicationDraft::new();

    // step 1: applicant data
    draft.set_birth_date(NaiveDate::from_ymd_opt(1968, 9, 4).unwrap(), &reference, &time)?;
    println!("age           : {} months", draft.age_in_months.unwrap());
    println!("max tenor     : {} months", draft.max_tenor);

    // step 2: salary determines the ceiling
    draft.set_available_salary(Money::from_major(4_500_000), &reference, &time)?;
    println!("max ceiling   : Rp {}", draft.max_ceiling);

    // step 3: financing terms
    draft.set_principal_requested(Money::from_major(75_000_000), &reference, &time)?;
    draft.set_tenor_months(36, &reference, &time)?;

    println!("\ndeduction breakdown:");
    for item in &draft.deduction_breakdown {
        println!("  {:<20} Rp {}", item.name, item.computed_value);
    }
    println!("  {:<20} Rp {}", "total", draft.total_deduction);

    println!("\ninstallment   : Rp {}", draft.installment);
    println!("net disbursed : Rp {}", draft.net_disbursement);

    // step 4: advisory validation before submission
    let report = draft.validate();
    if report.is_submittable() {
        println!("\nready to submit");
    } else {
        println!("\nblocked:");
        for issue in report.issues() {
            println!("  - {}", issue);
        }
    }

    Ok(())
}
