use crate::decimal::Money;
use crate::reference::GlobalSettings;
use crate::types::FinancingCategory;

/// maximum financing amount
///
/// micro category short-circuits to the settings ceiling; the standard
/// formula is available salary times the maximum tenor, cleared to zero
/// when either factor is missing
pub fn max_ceiling(
    category: FinancingCategory,
    available_salary: Money,
    max_tenor: u32,
    settings: &GlobalSettings,
) -> Money {
    if category == FinancingCategory::Micro && settings.micro_max_ceiling.is_positive() {
        return settings.micro_max_ceiling.round_to_unit();
    }

    if available_salary.is_positive() && max_tenor > 0 {
        available_salary.times_months(max_tenor).round_to_unit()
    } else {
        Money::ZERO
    }
}
