use hourglass_rs::SafeTimeProvider;
use uuid::Uuid;

use crate::decimal::Money;
use crate::decision;
use crate::errors::{LoanError, Result};
use crate::events::{EventStore, LoanEvent};
use crate::store::LoanStore;
use crate::summary::{self, LoanSummary};
use crate::types::{CreateLoanRequest, LoanApplication, LoanId, LoanStatus};
use crate::validation::validate_request;

/// id generation capability, injected so tests can supply deterministic ids
pub trait IdGenerator {
    fn next_id(&mut self) -> LoanId;
}

/// random v4 ids for production use
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> LoanId {
        Uuid::new_v4()
    }
}

/// monotonically increasing ids for tests
#[derive(Debug)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> LoanId {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        id
    }
}

/// owns the ordered collection of loan applications
///
/// every mutation validates, applies the change in memory, then writes the
/// whole collection through the store. A failed write rolls the in-memory
/// collection back, so memory and store never diverge.
pub struct LoanRepository {
    loans: Vec<LoanApplication>,
    store: Box<dyn LoanStore>,
    ids: Box<dyn IdGenerator>,
    time: SafeTimeProvider,
    events: EventStore,
}

impl LoanRepository {
    /// open with production capabilities: random ids, system time
    pub fn open(store: Box<dyn LoanStore>) -> Result<Self> {
        Self::open_with(
            store,
            Box::new(UuidIds),
            SafeTimeProvider::new(hourglass_rs::TimeSource::System),
        )
    }

    /// open with explicit id and clock capabilities
    pub fn open_with(
        store: Box<dyn LoanStore>,
        ids: Box<dyn IdGenerator>,
        time: SafeTimeProvider,
    ) -> Result<Self> {
        let loans = store.load()?;
        Ok(Self {
            loans,
            store,
            ids,
            time,
            events: EventStore::new(),
        })
    }

    /// validate a creation request and append the new pending application
    pub fn create(&mut self, request: CreateLoanRequest) -> Result<LoanApplication> {
        validate_request(&request)?;

        let loan = LoanApplication {
            id: self.ids.next_id(),
            applicant_name: request.applicant_name.trim().to_string(),
            amount: request.amount,
            term_months: request.term_months,
            interest_rate: request.interest_rate,
            status: LoanStatus::Pending,
            created_at: self.time.now(),
        };

        let previous = self.loans.clone();
        self.loans.push(loan.clone());
        self.persist(previous)?;

        self.events.emit(LoanEvent::LoanCreated {
            id: loan.id,
            amount: loan.amount,
            term_months: loan.term_months,
            timestamp: loan.created_at,
        });

        Ok(loan)
    }

    /// look up one application
    pub fn get(&self, id: LoanId) -> Option<&LoanApplication> {
        self.loans.iter().find(|loan| loan.id == id)
    }

    /// all applications in insertion order
    pub fn list(&self) -> &[LoanApplication] {
        &self.loans
    }

    /// approve a pending application
    pub fn approve(&mut self, id: LoanId) -> Result<LoanApplication> {
        let loan = self.apply_transition(id, decision::approve)?;
        self.events.emit(LoanEvent::LoanApproved {
            id: loan.id,
            timestamp: self.time.now(),
        });
        Ok(loan)
    }

    /// reject a pending application
    pub fn reject(&mut self, id: LoanId) -> Result<LoanApplication> {
        let loan = self.apply_transition(id, decision::reject)?;
        self.events.emit(LoanEvent::LoanRejected {
            id: loan.id,
            timestamp: self.time.now(),
        });
        Ok(loan)
    }

    /// decide a pending application by the auto-approval rule
    pub fn auto_decide(&mut self, id: LoanId) -> Result<LoanApplication> {
        let loan = self.apply_transition(id, decision::auto_decide)?;
        self.events.emit(LoanEvent::LoanAutoDecided {
            id: loan.id,
            outcome: loan.status,
            timestamp: self.time.now(),
        });
        Ok(loan)
    }

    /// apply a decision-engine transition to the application with this id,
    /// then persist the updated collection
    pub fn apply_transition<F>(&mut self, id: LoanId, transition: F) -> Result<LoanApplication>
    where
        F: FnOnce(&mut LoanApplication) -> Result<()>,
    {
        let index = self.index_of(id).ok_or(LoanError::LoanNotFound { id })?;

        let previous = self.loans.clone();
        transition(&mut self.loans[index])?;
        self.persist(previous)?;

        Ok(self.loans[index].clone())
    }

    /// remove the application with this id, whatever its status
    ///
    /// restricting deletion to pending applications is a caller policy
    pub fn delete(&mut self, id: LoanId) -> Result<LoanApplication> {
        let index = self.index_of(id).ok_or(LoanError::LoanNotFound { id })?;

        let previous = self.loans.clone();
        let removed = self.loans.remove(index);
        self.persist(previous)?;

        self.events.emit(LoanEvent::LoanDeleted {
            id: removed.id,
            status_at_deletion: removed.status,
            timestamp: self.time.now(),
        });

        Ok(removed)
    }

    /// summary statistics over the current collection
    pub fn summarize(&self) -> LoanSummary {
        summary::summarize(&self.loans)
    }

    /// fixed monthly payment for the application with this id
    pub fn monthly_payment(&self, id: LoanId) -> Option<Money> {
        self.get(id)
            .map(|loan| crate::amortization::monthly_payment(loan.amount, loan.term_months, loan.interest_rate))
    }

    /// drain events emitted since the last call
    pub fn take_events(&mut self) -> Vec<LoanEvent> {
        self.events.take_events()
    }

    fn index_of(&self, id: LoanId) -> Option<usize> {
        self.loans.iter().position(|loan| loan.id == id)
    }

    fn persist(&mut self, previous: Vec<LoanApplication>) -> Result<()> {
        if let Err(e) = self.store.save(&self.loans) {
            self.loans = previous;
            return Err(e);
        }
        Ok(())
    }
}
