/// Run statistics and human-facing output
///
/// The pipeline core returns a `RunStatistics` value; everything printed
/// here is presentation on top of it and is not a machine contract.
use crate::constants::SUMMARY_RULE;
use crate::info;
use crate::processing::KeepOutcome;
use crate::utils::display_file_size;
use std::path::Path;

/// Counters for one run. Initialized to zero before traversal, bumped once
/// per successfully processed file, printed and discarded at run end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStatistics {
    /// Files the walker enumerated, including ones that later failed
    pub files_found: usize,
    /// Files whose recompressed candidate was kept
    pub files_compressed: usize,
    /// Files the resize cap was applied to
    pub files_resized: usize,
}

impl RunStatistics {
    pub fn record(&mut self, outcome: &KeepOutcome) {
        if outcome.kept_compressed {
            self.files_compressed += 1;
        }
        if outcome.resized {
            self.files_resized += 1;
        }
    }
}

/// One progress line per processed file. When the candidate was kept the
/// line carries the reduction percentage; when the original was retained
/// the size is simply repeated.
pub fn per_file_line(outcome: &KeepOutcome, dest: &Path) -> String {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if outcome.kept_compressed {
        format!(
            "{} -> {}, ({}%) [{}] ({} X {})",
            display_file_size(outcome.original_size, false),
            display_file_size(outcome.final_size, false),
            outcome.reduction_percent,
            name,
            outcome.width,
            outcome.height
        )
    } else {
        format!(
            "{} -> {} [{}] ({} X {})",
            display_file_size(outcome.original_size, false),
            display_file_size(outcome.original_size, true),
            name,
            outcome.width,
            outcome.height
        )
    }
}

pub fn print_summary(stats: &RunStatistics) {
    info!("{}", SUMMARY_RULE);
    info!("{} Image Files Found", stats.files_found);
    info!("{} Files Compressed", stats.files_compressed);
    info!("{} Files Resized", stats.files_resized);
    info!("{}", SUMMARY_RULE);
}
