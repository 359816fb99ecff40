use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for a loan application
pub type LoanId = Uuid;

/// loan application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// submitted, awaiting a decision
    Pending,
    /// decided in favour of the applicant
    Approved,
    /// decided against the applicant
    Rejected,
}

impl LoanStatus {
    /// check if a decision is still outstanding
    pub fn is_pending(&self) -> bool {
        matches!(self, LoanStatus::Pending)
    }

    /// check if the status is terminal
    pub fn is_decided(&self) -> bool {
        !self.is_pending()
    }
}

/// a loan application tracked through its decision lifecycle
///
/// field names serialize in the original wire shape (camelCase keys,
/// lowercase status) so stored collections stay interchangeable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplication {
    pub id: LoanId,
    pub applicant_name: String,
    pub amount: Money,
    pub term_months: u32,
    pub interest_rate: Rate,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
}

/// input for creating a new loan application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanRequest {
    pub applicant_name: String,
    pub amount: Money,
    pub term_months: u32,
    pub interest_rate: Rate,
}
