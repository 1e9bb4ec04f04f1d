//! Quote module - confirmed configurations and their totals.

mod ledger;

pub use ledger::{LedgerSummary, QuoteLedger};
