use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};

/// calculate the fixed monthly payment for a loan
///
/// zero-rate loans repay in equal principal slices; otherwise the standard
/// amortization formula applies:
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), with r the monthly rate
pub fn monthly_payment(amount: Money, term_months: u32, interest_rate: Rate) -> Money {
    if term_months == 0 {
        return amount;
    }

    let monthly_rate = interest_rate.as_decimal() / dec!(12);

    if monthly_rate.is_zero() {
        return amount / Decimal::from(term_months);
    }

    let r = monthly_rate;
    let n = term_months;

    let mut compound = Decimal::ONE;
    let base = Decimal::ONE + r;
    for _ in 0..n {
        compound *= base;
    }

    let numerator = amount.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

/// total repaid over the full term at the fixed monthly payment
pub fn total_repayment(amount: Money, term_months: u32, interest_rate: Rate) -> Money {
    monthly_payment(amount, term_months, interest_rate) * Decimal::from(term_months)
}
