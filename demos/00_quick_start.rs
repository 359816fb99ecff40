/// quick start - minimal example to get started
use loan_tracker_rs::{CreateLoanRequest, LoanRepository, MemoryStore, Money, Rate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut repo = LoanRepository::open(Box::new(MemoryStore::new()))?;

    // submit a $50,000 application over 24 months at 8% p.a.
    let loan = repo.create(CreateLoanRequest {
        applicant_name: "John Doe".to_string(),
        amount: Money::from_major(50_000),
        term_months: 24,
        interest_rate: Rate::from_percentage(8),
    })?;

    println!("created {} for {}", loan.id, loan.applicant_name);
    println!(
        "monthly payment: {}",
        repo.monthly_payment(loan.id).unwrap().round_dp(2)
    );

    // within the auto-approval limits, so this approves
    let decided = repo.auto_decide(loan.id)?;
    println!("decision: {:?}", decided.status);

    Ok(())
}
