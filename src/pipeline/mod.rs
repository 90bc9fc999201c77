//! Pipeline entry points for harvester operations.
//!
//! - `run_harvest`: crawl the listing and write matched problems to CSV
//! - `run_latest`: collect the latest N contests from the listing

pub mod crawl;
pub mod latest;

pub use crawl::{HarvestOutcome, Harvester, run_harvest};
pub use latest::{collect_latest, run_latest};
