use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{LoanApplication, LoanStatus};

/// aggregate statistics over a collection of loan applications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoanSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// sum of amounts over approved loans only
    pub total_approved_amount: Money,
}

/// derive summary statistics from the current collection
///
/// pure projection, recomputed on every call
pub fn summarize(loans: &[LoanApplication]) -> LoanSummary {
    let mut summary = LoanSummary {
        total: loans.len(),
        ..Default::default()
    };

    for loan in loans {
        match loan.status {
            LoanStatus::Pending => summary.pending += 1,
            LoanStatus::Approved => {
                summary.approved += 1;
                summary.total_approved_amount += loan.amount;
            }
            LoanStatus::Rejected => summary.rejected += 1,
        }
    }

    summary
}
