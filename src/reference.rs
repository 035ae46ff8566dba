use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{EngineError, Result};
use crate::types::{DeductionKind, DeductionRule, TenorDeductionBand};

/// process-wide settings singleton, read-only within a calculation pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// fixed tenor for the micro category, 0 disables the override
    pub micro_max_tenor_months: u32,
    /// fixed ceiling for the micro category, zero disables the override
    pub micro_max_ceiling: Money,
    /// retirement age cap used by the macro tenor formula
    pub age_cap_years: u32,
    /// flat monthly service rate applied to the full principal
    pub monthly_service_rate: Rate,
}

/// reference tables fetched once per wizard session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub deduction_rules: Vec<DeductionRule>,
    pub tenor_bands: Vec<TenorDeductionBand>,
    pub settings: GlobalSettings,
}

impl ReferenceData {
    /// check structural invariants of the fetched tables
    ///
    /// active bands must not overlap: at most one band may match any tenor
    pub fn validate(&self) -> Result<()> {
        let active: Vec<&TenorDeductionBand> = self
            .tenor_bands
            .iter()
            .filter(|b| b.is_active)
            .collect();

        for (i, a) in active.iter().enumerate() {
            if a.min_months > a.max_months {
                return Err(EngineError::InvalidConfiguration {
                    message: format!(
                        "tenor band {}..{} is inverted",
                        a.min_months, a.max_months
                    ),
                });
            }
            for b in &active[i + 1..] {
                if a.min_months <= b.max_months && b.min_months <= a.max_months {
                    return Err(EngineError::InvalidConfiguration {
                        message: format!(
                            "tenor bands {}..{} and {}..{} overlap",
                            a.min_months, a.max_months, b.min_months, b.max_months
                        ),
                    });
                }
            }
        }

        let mut ids: Vec<u32> = self.deduction_rules.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != self.deduction_rules.len() {
            return Err(EngineError::InvalidConfiguration {
                message: "duplicate deduction rule id".to_string(),
            });
        }

        Ok(())
    }

    /// active deduction rules in fetch order
    pub fn active_rules(&self) -> impl Iterator<Item = &DeductionRule> {
        self.deduction_rules.iter().filter(|r| r.is_active)
    }

    /// find the active band covering a tenor, if any
    ///
    /// validated data has at most one match; the first wins otherwise
    pub fn match_band(&self, tenor_months: u32) -> Option<&TenorDeductionBand> {
        self.tenor_bands
            .iter()
            .filter(|b| b.is_active)
            .find(|b| b.covers(tenor_months))
    }

    /// standard pension cooperative reference set
    ///
    /// mirrors the production defaults: 58-year age cap, 1% monthly service
    /// rate, a 2% visible administration fee, a hidden 1% provision, and
    /// Ta'awun bands stepping up with tenor
    pub fn standard_pension() -> Self {
        Self {
            deduction_rules: vec![
                DeductionRule {
                    id: 1,
                    name: "Biaya Administrasi".to_string(),
                    kind: DeductionKind::Percentage,
                    rate_or_amount: dec!(2),
                    is_visible: true,
                    is_active: true,
                },
                DeductionRule {
                    id: 2,
                    name: "Simpanan Wajib".to_string(),
                    kind: DeductionKind::Fixed,
                    rate_or_amount: dec!(100000),
                    is_visible: true,
                    is_active: true,
                },
                DeductionRule {
                    id: 3,
                    name: "Provisi".to_string(),
                    kind: DeductionKind::Percentage,
                    rate_or_amount: dec!(1),
                    is_visible: false,
                    is_active: true,
                },
            ],
            tenor_bands: vec![
                TenorDeductionBand {
                    min_months: 6,
                    max_months: 60,
                    percent_rate: dec!(2),
                    is_active: true,
                },
                TenorDeductionBand {
                    min_months: 61,
                    max_months: 120,
                    percent_rate: dec!(3),
                    is_active: true,
                },
                TenorDeductionBand {
                    min_months: 121,
                    max_months: 180,
                    percent_rate: dec!(4),
                    is_active: true,
                },
            ],
            settings: GlobalSettings {
                micro_max_tenor_months: 0,
                micro_max_ceiling: Money::ZERO,
                age_cap_years: 58,
                monthly_service_rate: Rate::from_percentage(1),
            },
        }
    }

    /// micro financing reference set with fixed tenor and ceiling overrides
    pub fn micro_pension(max_tenor_months: u32, max_ceiling: Money) -> Self {
        let mut reference = Self::standard_pension();
        reference.settings.micro_max_tenor_months = max_tenor_months;
        reference.settings.micro_max_ceiling = max_ceiling;
        reference
    }
}
