use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::calculator;
use crate::decimal::Money;
use crate::errors::Result;
use crate::reference::ReferenceData;
use crate::types::{DeductionLineItem, FinancingCategory};
use crate::validation::{self, ValidationReport};

/// mutable working state of the creation wizard
///
/// owned by a single wizard session; every input edit recomputes all
/// derived fields synchronously in dependency order before the caller
/// observes the next state, so derived values are never stale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoanApplicationDraft {
    // wizard inputs
    pub birth_date: Option<NaiveDate>,
    pub category: FinancingCategory,
    pub available_salary: Money,
    pub principal_requested: Money,
    pub tenor_months: u32,

    // derived fields
    pub age_in_months: Option<u32>,
    pub max_tenor: u32,
    pub max_ceiling: Money,
    pub deduction_breakdown: Vec<DeductionLineItem>,
    pub total_deduction: Money,
    pub installment: Money,
    pub net_disbursement: Money,
}

impl LoanApplicationDraft {
    /// empty draft at wizard entry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_birth_date(
        &mut self,
        birth_date: NaiveDate,
        reference: &ReferenceData,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.birth_date = Some(birth_date);
        self.recompute(reference, time)
    }

    pub fn set_category(
        &mut self,
        category: FinancingCategory,
        reference: &ReferenceData,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.category = category;
        self.recompute(reference, time)
    }

    pub fn set_available_salary(
        &mut self,
        salary: Money,
        reference: &ReferenceData,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.available_salary = salary;
        self.recompute(reference, time)
    }

    pub fn set_principal_requested(
        &mut self,
        principal: Money,
        reference: &ReferenceData,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.principal_requested = principal;
        self.recompute(reference, time)
    }

    pub fn set_tenor_months(
        &mut self,
        tenor_months: u32,
        reference: &ReferenceData,
        time: &SafeTimeProvider,
    ) -> Result<()> {
        self.tenor_months = tenor_months;
        self.recompute(reference, time)
    }

    /// rerun the whole calculation pipeline from the current inputs
    ///
    /// stages run in dependency order: age -> tenor -> ceiling ->
    /// deductions -> installment/net. Pure in the inputs, so repeated
    /// calls are idempotent.
    pub fn recompute(&mut self, reference: &ReferenceData, time: &SafeTimeProvider) -> Result<()> {
        let today = time.now().date_naive();
        let settings = &reference.settings;

        self.age_in_months = match self.birth_date {
            Some(birth) => Some(calculator::age_in_months(birth, today)?),
            None => None,
        };

        self.max_tenor = calculator::max_tenor(self.category, self.age_in_months, settings);
        self.max_ceiling = calculator::max_ceiling(
            self.category,
            self.available_salary,
            self.max_tenor,
            settings,
        );

        let breakdown = calculator::deduction::calculate(
            self.principal_requested,
            reference.active_rules(),
            reference.match_band(self.tenor_months),
        );
        self.deduction_breakdown = breakdown.line_items;
        self.total_deduction = breakdown.total;

        self.installment = calculator::installment(
            self.principal_requested,
            self.tenor_months,
            settings.monthly_service_rate,
        );
        self.net_disbursement =
            calculator::net_disbursement(self.principal_requested, self.total_deduction);

        Ok(())
    }

    /// advisory submission checks over the current derived state
    pub fn validate(&self) -> ValidationReport {
        validation::validate_draft(self)
    }
}
