use crate::errors::{LoanError, Result};
use crate::types::CreateLoanRequest;

/// validate a creation request against the business rules
///
/// rules run in a fixed order and stop at the first failure, so a request
/// breaking several rules reports exactly one error
pub fn validate_request(request: &CreateLoanRequest) -> Result<()> {
    if request.applicant_name.trim().is_empty() {
        return Err(LoanError::validation("Applicant name is required"));
    }

    if !request.amount.is_positive() {
        return Err(LoanError::validation("Amount must be greater than 0"));
    }

    if request.term_months == 0 {
        return Err(LoanError::validation("Term months must be greater than 0"));
    }

    if request.interest_rate.is_negative() {
        return Err(LoanError::validation(
            "Interest rate is required and cannot be negative",
        ));
    }

    Ok(())
}
