pub mod cluster;
pub mod executor;
pub mod processor;

pub use cluster::{ClusterClient, TaskSubmission};
pub use executor::JobExecutor;
pub use processor::AnalysisProcessor;
