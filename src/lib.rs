pub mod batch;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod processing;
pub mod report;
pub mod utils;

pub use batch::{collect_image_entries, prepare_output_root, run, ImageEntry};
pub use config::RunConfig;
pub use error::{MirrorError, Result};
pub use formats::CodecKind;
pub use processing::{
    apply_keep_policy, ensure_parent_dirs, process_file, transcode_entry, KeepOutcome,
    TranscodeOutcome,
};
pub use report::{per_file_line, print_summary, RunStatistics};
pub use utils::{display_file_size, percent_change};
