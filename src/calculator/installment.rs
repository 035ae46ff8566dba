use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// flat-rate monthly installment, rounded to the nearest whole unit
///
/// principal amortizes linearly over the tenor while the service rate is
/// charged on the full principal every month; cleared to zero when either
/// principal or tenor is missing
pub fn installment(principal: Money, tenor_months: u32, service_rate: Rate) -> Money {
    if !principal.is_positive() || tenor_months == 0 {
        return Money::ZERO;
    }

    let principal_portion = principal / Decimal::from(tenor_months);
    (principal_portion + service_rate.of(principal)).round_to_unit()
}

/// amount disbursed after deductions
///
/// a non-positive total deduction leaves the principal untouched rather
/// than inflating the payout
pub fn net_disbursement(principal: Money, total_deduction: Money) -> Money {
    if total_deduction.is_positive() {
        (principal - total_deduction).round_to_unit()
    } else if principal.is_positive() {
        principal.round_to_unit()
    } else {
        Money::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installment_standard() {
        // 50,000,000 over 24 months at 1% monthly service rate
        let result = installment(
            Money::from_major(50_000_000),
            24,
            Rate::from_percentage(1),
        );
        assert_eq!(result, Money::from_major(2_583_333));
    }

    #[test]
    fn test_installment_zero_rate() {
        let result = installment(Money::from_major(12_000_000), 12, Rate::ZERO);
        assert_eq!(result, Money::from_major(1_000_000));
    }

    #[test]
    fn test_installment_cleared_on_zero_inputs() {
        assert_eq!(
            installment(Money::ZERO, 24, Rate::from_percentage(1)),
            Money::ZERO
        );
        assert_eq!(
            installment(Money::from_major(50_000_000), 0, Rate::from_percentage(1)),
            Money::ZERO
        );
    }

    #[test]
    fn test_net_disbursement() {
        let net = net_disbursement(Money::from_major(50_000_000), Money::from_major(1_000_000));
        assert_eq!(net, Money::from_major(49_000_000));
    }

    #[test]
    fn test_net_disbursement_without_deductions() {
        let net = net_disbursement(Money::from_major(50_000_000), Money::ZERO);
        assert_eq!(net, Money::from_major(50_000_000));

        assert_eq!(net_disbursement(Money::ZERO, Money::ZERO), Money::ZERO);
    }

    #[test]
    fn test_net_plus_deduction_recovers_principal() {
        let principal = Money::from_major(37_500_000);
        let deduction = Money::from_major(1_125_000);
        let net = net_disbursement(principal, deduction);

        assert_eq!(net + deduction, principal);
    }
}
