use crate::config::RunConfig;
use crate::error::{MirrorError, Result};
use crate::formats::CodecKind;
use crate::processing::process_file;
use crate::report::{per_file_line, RunStatistics};
use crate::{info, verbose, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// One enumerated source image: where it lives, where it lands relative to
/// the output root, and the transcode class inferred from its extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub source: PathBuf,
    pub relative: PathBuf,
    pub kind: CodecKind,
}

/// Eagerly enumerate every recognized image under the source root. The
/// complete list is materialized before any file is processed.
///
/// Non-image files are not enumerated, so they never reach the output tree.
pub fn collect_image_entries(config: &RunConfig) -> Result<Vec<ImageEntry>> {
    if !config.source_dir.is_dir() {
        return Err(MirrorError::SourceNotFound(config.source_dir.clone()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(&config.source_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !config.recognizes(entry.path()) {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(&config.source_dir) {
            entries.push(ImageEntry {
                source: entry.path().to_path_buf(),
                relative: relative.to_path_buf(),
                kind: CodecKind::from_path(entry.path()),
            });
        }
    }

    Ok(entries)
}

/// Destroy and recreate the output root. Runs once before any file
/// processing; a failure here aborts the whole run.
pub fn prepare_output_root(config: &RunConfig) -> Result<()> {
    if config.output_dir.exists() {
        fs::remove_dir_all(&config.output_dir)?;
    }
    fs::create_dir_all(&config.output_dir)
        .map_err(|_| MirrorError::DirectoryCreationFailed(config.output_dir.clone()))?;
    Ok(())
}

/// Run the whole pipeline: wipe the output root, enumerate, then process
/// each file to completion in order. Per-file failures are logged and
/// excluded from the compressed/resized totals; only pre-flight failures
/// abort the run.
pub fn run(config: &RunConfig) -> Result<RunStatistics> {
    config.validate()?;
    prepare_output_root(config)?;

    let entries = collect_image_entries(config)?;
    verbose!(
        "Enumerated {} image files under {}",
        entries.len(),
        config.source_dir.display()
    );
    if entries.is_empty() {
        warn!(
            "No image files found in {}",
            config.source_dir.display()
        );
    }

    let mut stats = RunStatistics {
        files_found: entries.len(),
        ..Default::default()
    };

    let bar = if crate::logger::is_quiet() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(entries.len() as u64)
    };
    bar.set_style(ProgressStyle::default_bar());

    for entry in &entries {
        let dest = config.output_dir.join(&entry.relative);
        match process_file(entry, &dest, config) {
            Ok(outcome) => {
                stats.record(&outcome);
                bar.suspend(|| info!("{}", per_file_line(&outcome, &dest)));
            }
            Err(err) => {
                crate::error!("Failed to process {}: {}", entry.source.display(), err);
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(stats)
}
