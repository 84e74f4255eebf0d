pub mod lookup;
pub mod persistence;

pub use lookup::{LookupError, LookupOutcome, LookupService, NotFoundReason};
pub use persistence::{OutputFormat, PersistenceError, SaveOutcome, save_results};
