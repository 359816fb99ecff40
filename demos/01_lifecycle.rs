/// full lifecycle - create, decide, delete, and report on applications
use loan_tracker_rs::{
    CreateLoanRequest, JsonFileStore, LoanRepository, Money, Rate,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // file-backed store: reruns pick up where the last run left off
    let dir = std::env::temp_dir().join("loan-tracker-demo");
    let mut repo = LoanRepository::open(Box::new(JsonFileStore::new(&dir)))?;

    let small = repo.create(CreateLoanRequest {
        applicant_name: "Jane Smith".to_string(),
        amount: Money::from_major(25_000),
        term_months: 36,
        interest_rate: Rate::from_percentage(6),
    })?;

    let large = repo.create(CreateLoanRequest {
        applicant_name: "Acme Corp".to_string(),
        amount: Money::from_major(250_000),
        term_months: 84,
        interest_rate: Rate::from_percentage(5),
    })?;

    // rule-based decisions: small passes, large breaches both limits
    repo.auto_decide(small.id)?;
    repo.auto_decide(large.id)?;

    for loan in repo.list() {
        println!(
            "{:<12} {:>10} over {:>3} months at {} -> {:?}",
            loan.applicant_name,
            loan.amount.to_string(),
            loan.term_months,
            loan.interest_rate,
            loan.status,
        );
    }

    // rejected applications can be cleared out
    repo.delete(large.id)?;

    let summary = repo.summarize();
    println!(
        "\n{} applications: {} pending, {} approved, {} rejected",
        summary.total, summary.pending, summary.approved, summary.rejected
    );
    println!("total approved: {}", summary.total_approved_amount);

    for event in repo.take_events() {
        println!("event: {event:?}");
    }

    Ok(())
}
