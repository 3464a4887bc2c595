pub mod app;
pub mod calculator;
pub mod config;
pub mod equivalence;
pub mod errors;
pub mod factors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod report;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use equivalence::{compute_equivalents, EquivalenceSet};
pub use report::{build_report, AggregateReport};
pub use state::AppState;
pub use storage::load_data;
