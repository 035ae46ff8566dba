use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a loan application
pub type ApplicationId = Uuid;

/// financing category selected in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinancingCategory {
    /// standard pension financing, tenor and ceiling derived from age and salary
    Macro,
    /// micro financing with fixed tenor and ceiling from settings
    Micro,
}

impl Default for FinancingCategory {
    fn default() -> Self {
        FinancingCategory::Macro
    }
}

/// how a deduction rule is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionKind {
    /// percentage of the requested principal
    Percentage,
    /// fixed currency amount
    Fixed,
}

/// a deduction taken from principal at disbursement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionRule {
    pub id: u32,
    pub name: String,
    pub kind: DeductionKind,
    /// percentage when kind is Percentage, currency amount when Fixed
    pub rate_or_amount: Decimal,
    /// itemized to the applicant when true
    pub is_visible: bool,
    /// excluded from every calculation when false
    pub is_active: bool,
}

/// tenor-indexed deduction band feeding the Ta'awun differential
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenorDeductionBand {
    pub min_months: u32,
    pub max_months: u32,
    pub percent_rate: Decimal,
    pub is_active: bool,
}

impl TenorDeductionBand {
    /// check whether a tenor falls inside this band
    pub fn covers(&self, tenor_months: u32) -> bool {
        self.min_months <= tenor_months && tenor_months <= self.max_months
    }
}

/// computed snapshot of a single deduction line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionLineItem {
    pub name: String,
    pub kind: DeductionKind,
    pub rate_or_amount: Decimal,
    pub computed_value: Money,
}

/// applicant identity captured by the wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub member_number: String,
    pub birth_date: NaiveDate,
}

/// metadata for an uploaded supporting document
///
/// the upload itself is external I/O; only the resulting reference is kept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAttachment {
    pub name: String,
    pub content_type: String,
    pub storage_url: String,
    pub uploaded_at: DateTime<Utc>,
}
