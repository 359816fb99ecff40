use crate::decimal::Money;
use crate::errors::{LoanError, Result};
use crate::types::{LoanApplication, LoanStatus};

/// auto-decide approves at or below this amount
pub const AUTO_APPROVE_MAX_AMOUNT: i64 = 100_000;

/// auto-decide approves at or below this term
pub const AUTO_APPROVE_MAX_TERM_MONTHS: u32 = 60;

/// approve a pending loan
pub fn approve(loan: &mut LoanApplication) -> Result<()> {
    transition(loan, LoanStatus::Approved)
}

/// reject a pending loan
pub fn reject(loan: &mut LoanApplication) -> Result<()> {
    transition(loan, LoanStatus::Rejected)
}

/// decide a pending loan by rule: approved iff the amount and term both sit
/// at or below the auto-approval limits, rejected otherwise
pub fn auto_decide(loan: &mut LoanApplication) -> Result<()> {
    let decision = if qualifies_for_auto_approval(loan.amount, loan.term_months) {
        LoanStatus::Approved
    } else {
        LoanStatus::Rejected
    };
    transition(loan, decision)
}

/// the auto-approval rule, inclusive on both bounds
pub fn qualifies_for_auto_approval(amount: Money, term_months: u32) -> bool {
    amount <= Money::from_major(AUTO_APPROVE_MAX_AMOUNT)
        && term_months <= AUTO_APPROVE_MAX_TERM_MONTHS
}

/// apply a decision to a pending loan
///
/// approved and rejected are terminal; any transition attempted on a decided
/// loan is refused rather than silently ignored
fn transition(loan: &mut LoanApplication, decision: LoanStatus) -> Result<()> {
    if !loan.status.is_pending() {
        return Err(LoanError::InvalidTransition {
            id: loan.id,
            status: loan.status,
        });
    }

    loan.status = decision;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn pending_loan(amount: i64, term_months: u32) -> LoanApplication {
        LoanApplication {
            id: Uuid::new_v4(),
            applicant_name: "Test User".to_string(),
            amount: Money::from_major(amount),
            term_months,
            interest_rate: Rate::from_decimal(dec!(0.08)),
            status: LoanStatus::Pending,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_approve_pending() {
        let mut loan = pending_loan(50_000, 24);
        approve(&mut loan).unwrap();
        assert_eq!(loan.status, LoanStatus::Approved);
    }

    #[test]
    fn test_reject_pending() {
        let mut loan = pending_loan(50_000, 24);
        reject(&mut loan).unwrap();
        assert_eq!(loan.status, LoanStatus::Rejected);
    }

    #[test]
    fn test_auto_decide_boundaries() {
        // inclusive on both bounds
        let cases = [
            (100_000, 60, LoanStatus::Approved),
            (100_001, 60, LoanStatus::Rejected),
            (100_000, 61, LoanStatus::Rejected),
            (200_000, 84, LoanStatus::Rejected),
            (50_000, 24, LoanStatus::Approved),
        ];

        for (amount, term, expected) in cases {
            let mut loan = pending_loan(amount, term);
            auto_decide(&mut loan).unwrap();
            assert_eq!(loan.status, expected, "amount={amount} term={term}");
        }
    }

    #[test]
    fn test_decided_loans_are_terminal() {
        let mut loan = pending_loan(50_000, 24);
        approve(&mut loan).unwrap();

        assert!(approve(&mut loan).is_err());
        assert!(reject(&mut loan).is_err());
        assert!(auto_decide(&mut loan).is_err());
        assert_eq!(loan.status, LoanStatus::Approved);

        let mut loan = pending_loan(50_000, 24);
        reject(&mut loan).unwrap();
        assert!(approve(&mut loan).is_err());
        assert_eq!(loan.status, LoanStatus::Rejected);
    }

    #[test]
    fn test_invalid_transition_error_carries_status() {
        let mut loan = pending_loan(50_000, 24);
        approve(&mut loan).unwrap();

        match reject(&mut loan) {
            Err(LoanError::InvalidTransition { id, status }) => {
                assert_eq!(id, loan.id);
                assert_eq!(status, LoanStatus::Approved);
            }
            other => panic!("expected InvalidTransition, got {other:?}"),
        }
    }
}
