mod bucketwriter;
mod cli;
mod cycles;
mod driver;
mod graphbuilder;
mod logsetup;
mod partitioner;
mod record;
mod runconfig;
mod scheduler;
mod worker;
mod workdir;

pub use crate::bucketwriter::{bucket_path, BucketWriter};
pub use crate::cli::Cli;
pub use crate::cycles::longest_cycle;
pub use crate::driver::run as run_driver;
pub use crate::graphbuilder::{build as build_key_graphs, KeyGraph};
pub use crate::logsetup::init as init_logging;
pub use crate::partitioner::{bucket_index, partition};
pub use crate::record::{parse_line, Key, Record};
pub use crate::runconfig::{LogLevel, RunConfig};
pub use crate::scheduler::{run as run_scheduler, Executor};
pub use crate::worker::{process_bucket, BucketResult};
pub use crate::workdir::WorkDir;
