use chrono::{Datelike, NaiveDate};

use crate::errors::{EngineError, Result};
use crate::reference::GlobalSettings;
use crate::types::FinancingCategory;

/// applicant age in whole months via calendar subtraction
///
/// years and months are subtracted field-wise, minus one month when the
/// day-of-month has not been reached yet; never a day-count division
pub fn age_in_months(birth_date: NaiveDate, today: NaiveDate) -> Result<u32> {
    if birth_date > today {
        return Err(EngineError::InvalidDate {
            message: format!("birth date {} is in the future", birth_date),
        });
    }

    let mut months = (today.year() - birth_date.year()) * 12
        + (today.month() as i32 - birth_date.month() as i32);
    if today.day() < birth_date.day() {
        months -= 1;
    }

    Ok(months.max(0) as u32)
}

/// maximum eligible tenor in months
///
/// micro category short-circuits to the settings override; the macro
/// formula counts the months left until the age cap, saturating at zero
/// for applicants already past it
pub fn max_tenor(
    category: FinancingCategory,
    age_in_months: Option<u32>,
    settings: &GlobalSettings,
) -> u32 {
    if category == FinancingCategory::Micro && settings.micro_max_tenor_months > 0 {
        return settings.micro_max_tenor_months;
    }

    match age_in_months {
        Some(age) => (settings.age_cap_years * 12).saturating_sub(age),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};

    fn settings() -> GlobalSettings {
        GlobalSettings {
            micro_max_tenor_months: 0,
            micro_max_ceiling: Money::ZERO,
            age_cap_years: 58,
            monthly_service_rate: Rate::from_percentage(1),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_exact_years() {
        let age = age_in_months(date(1978, 6, 1), date(2025, 6, 1)).unwrap();
        assert_eq!(age, 47 * 12);
    }

    #[test]
    fn test_age_day_not_yet_reached() {
        // one day short of the monthly anniversary
        let age = age_in_months(date(1978, 6, 15), date(2025, 6, 14)).unwrap();
        assert_eq!(age, 47 * 12 - 1);

        let age = age_in_months(date(1978, 6, 15), date(2025, 6, 15)).unwrap();
        assert_eq!(age, 47 * 12);
    }

    #[test]
    fn test_age_month_borrow() {
        let age = age_in_months(date(1980, 11, 20), date(2025, 2, 10)).unwrap();
        // 44 years 3 months minus the unreached day
        assert_eq!(age, 44 * 12 + 2);
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let result = age_in_months(date(2026, 1, 1), date(2025, 6, 1));
        assert!(matches!(result, Err(EngineError::InvalidDate { .. })));
    }

    #[test]
    fn test_macro_tenor_from_age_cap() {
        // 47 years old against a 58-year cap leaves 132 months
        assert_eq!(max_tenor(FinancingCategory::Macro, Some(564), &settings()), 132);
    }

    #[test]
    fn test_macro_tenor_past_cap() {
        // 59 years old, already past the cap
        assert_eq!(max_tenor(FinancingCategory::Macro, Some(708), &settings()), 0);
    }

    #[test]
    fn test_macro_tenor_unknown_age() {
        assert_eq!(max_tenor(FinancingCategory::Macro, None, &settings()), 0);
    }

    #[test]
    fn test_micro_override() {
        let mut settings = settings();
        settings.micro_max_tenor_months = 36;

        assert_eq!(max_tenor(FinancingCategory::Micro, Some(564), &settings), 36);
        // override also applies with no age on record
        assert_eq!(max_tenor(FinancingCategory::Micro, None, &settings), 36);
        // macro category ignores the override
        assert_eq!(max_tenor(FinancingCategory::Macro, Some(564), &settings), 132);
    }

    #[test]
    fn test_micro_without_override_falls_back() {
        // micro with a zero override uses the age formula
        assert_eq!(max_tenor(FinancingCategory::Micro, Some(564), &settings()), 132);
    }
}
