use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{DeductionKind, DeductionLineItem, DeductionRule, TenorDeductionBand};

/// name of the synthetic differential line item
pub const TAAWUN_NAME: &str = "Ta'awun";

/// sanity bound: totals past this trigger a telemetry warning, not a failure
const WARNING_THRESHOLD_UNITS: i64 = 100_000_000;

/// itemized deduction result for one principal amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DeductionBreakdown {
    pub line_items: Vec<DeductionLineItem>,
    pub total: Money,
}

/// compute itemized and total deductions from principal
///
/// visible active rules are itemized; hidden active percentage rules only
/// feed the sum the Ta'awun differential is measured against. A band rate
/// at or below that sum yields no Ta'awun line (negative differential is
/// treated as zero, matching observed production behavior).
pub fn calculate<'a>(
    principal: Money,
    active_rules: impl Iterator<Item = &'a DeductionRule>,
    matched_band: Option<&TenorDeductionBand>,
) -> DeductionBreakdown {
    let mut line_items = Vec::new();
    let mut visible_total = Money::ZERO;
    let mut hidden_percent_sum = Decimal::ZERO;

    for rule in active_rules {
        let value = match rule.kind {
            DeductionKind::Percentage => principal.percentage(rule.rate_or_amount),
            DeductionKind::Fixed => Money::from_decimal(rule.rate_or_amount),
        };

        if rule.is_visible {
            visible_total += value;
            line_items.push(DeductionLineItem {
                name: rule.name.clone(),
                kind: rule.kind,
                rate_or_amount: rule.rate_or_amount,
                computed_value: value,
            });
        } else if rule.kind == DeductionKind::Percentage {
            hidden_percent_sum += rule.rate_or_amount;
        }
    }

    let band_percent = matched_band.map(|b| b.percent_rate).unwrap_or(Decimal::ZERO);
    let taawun_percent = band_percent - hidden_percent_sum;

    let mut total = visible_total;
    if taawun_percent > Decimal::ZERO {
        let value = principal.percentage(taawun_percent).round_to_unit();
        total += value;
        line_items.push(DeductionLineItem {
            name: TAAWUN_NAME.to_string(),
            kind: DeductionKind::Percentage,
            rate_or_amount: taawun_percent,
            computed_value: value,
        });
    }

    let total = total.round_to_unit();
    if total > Money::from_major(WARNING_THRESHOLD_UNITS) {
        tracing::warn!(
            total = %total,
            principal = %principal,
            "total deduction exceeds sanity threshold"
        );
    }

    DeductionBreakdown { line_items, total }
}
