//! pure calculation stages of the financing wizard
//!
//! each stage is a named function with explicit inputs and outputs; the
//! draft runs them top-to-bottom in dependency order (age -> tenor ->
//! ceiling -> deductions -> installment/net) on every input edit

pub mod age;
pub mod ceiling;
pub mod deduction;
pub mod installment;

pub use age::{age_in_months, max_tenor};
pub use ceiling::max_ceiling;
pub use deduction::{DeductionBreakdown, TAAWUN_NAME};
pub use installment::{installment, net_disbursement};
