pub mod config;
pub mod database;
pub mod error;
pub mod frontier;
pub mod growth;
pub mod mining;
pub mod scan;
pub mod utils;

pub use config::MiningConfig;
pub use database::SequenceDb;
pub use error::PrefixSpanError;
pub use frontier::TopkFrontier;
pub use growth::{frequent_growth, frequent_growth_parallel, topk_growth, Results};
pub use mining::PrefixSpan;
pub use scan::{scan, Match, Projection};
pub use utils::{group_by_length, PatternLevel};
