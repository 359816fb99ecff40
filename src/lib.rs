pub mod amortization;
pub mod decimal;
pub mod decision;
pub mod errors;
pub mod events;
pub mod repository;
pub mod store;
pub mod summary;
pub mod types;
pub mod validation;

// re-export key types
pub use amortization::{monthly_payment, total_repayment};
pub use decimal::{Money, Rate};
pub use decision::{AUTO_APPROVE_MAX_AMOUNT, AUTO_APPROVE_MAX_TERM_MONTHS};
pub use errors::{LoanError, Result};
pub use events::{EventStore, LoanEvent};
pub use repository::{IdGenerator, LoanRepository, SequentialIds, UuidIds};
pub use store::{JsonFileStore, LoanStore, MemoryStore, STORAGE_KEY};
pub use summary::{summarize, LoanSummary};
pub use types::{CreateLoanRequest, LoanApplication, LoanId, LoanStatus};
pub use validation::validate_request;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
