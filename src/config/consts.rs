/// Tree holding the event records in every input file
pub const TREE_NAME: &str = "Events";
/// Default redirector for remote file access
pub const DEFAULT_REDIRECTOR: &str = "xcache";
/// Default root directory for run outputs
pub const DEFAULT_OUTPUT_LOCATION: &str = "./outfiles/";
/// Default job tag
pub const DEFAULT_TAG: &str = "test";
/// Default analysis channel
pub const DEFAULT_CHANNEL: &str = "2b1l";
/// Default data-taking year
pub const DEFAULT_YEAR: &str = "2017";
/// Default number of files per sample
pub const DEFAULT_NFILES: i64 = 1;
/// Sentinel for "process every file"
pub const ALL_FILES: i64 = -1;
/// Default worker count for the process pool executor
pub const DEFAULT_WORKERS: usize = 4;
/// Default row-group size handed to processors
pub const DEFAULT_CHUNKSIZE: u64 = 50_000;
/// Default worker program implementing the processor protocol
pub const DEFAULT_PROCESSOR_COMMAND: &str = "wprime-processor";
/// Default log level when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Extension of the primary output artifact
pub const OUTPUT_EXTENSION: &str = "pkl";
/// Name of the metadata subfolder next to the output artifact
pub const METADATA_DIR: &str = "metadata";
