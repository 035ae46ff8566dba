/// micro category - fixed tenor and ceiling overrides from settings
use chrono::NaiveDate;
use pension_financing_rs::{
    FinancingCategory, LoanApplicationDraft, Money, ReferenceData, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);

    // micro settings: 36-month tenor, Rp 20,000,000 ceiling
    let reference = ReferenceData::micro_pension(36, Money::from_major(20_000_000));

    let mut draft = LoanApplicationDraft::new();
    draft.set_category(FinancingCategory::Micro, &reference, &time)?;
    draft.set_birth_date(NaiveDate::from_ymd_opt(1972, 1, 20).unwrap(), &reference, &time)?;
    draft.set_available_salary(Money::from_major(2_500_000), &reference, &time)?;

    // overrides win over the age and salary formulas
    println!("max tenor   : {} months", draft.max_tenor);
    println!("max ceiling : Rp {}", draft.max_ceiling);

    draft.set_principal_requested(Money::from_major(15_000_000), &reference, &time)?;
    draft.set_tenor_months(30, &reference, &time)?;

    println!("installment : Rp {}", draft.installment);
    println!("submittable : {}", draft.validate().is_submittable());

    Ok(())
}
