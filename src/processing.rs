use crate::batch::ImageEntry;
use crate::config::RunConfig;
use crate::constants::{
    LIBDEFLATER_HIGH_LEVEL, LIBDEFLATER_LOW_LEVEL, OXIPNG_PRESET, ZOPFLI_ITERATIONS,
};
use crate::error::{MirrorError, Result};
use crate::formats::CodecKind;
use crate::utils::percent_change;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use oxipng::{Deflaters, InFile, Options, OutFile};
use std::fs;
use std::io::{BufWriter, Write};
use std::num::NonZeroU8;
use std::path::{Path, PathBuf};

/// The recompressed candidate written to its destination path, before the
/// keep decision has looked at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeOutcome {
    pub dest: PathBuf,
    /// Byte size of the candidate at `dest`
    pub candidate_size: u64,
    /// Pixel dimensions of the produced output
    pub width: u32,
    pub height: u32,
    /// Whether the resize cap was applied
    pub resized: bool,
    /// Whether re-encoding was attempted at all (false for verbatim copies)
    pub recompressed: bool,
}

/// Final per-file result after the keep decision has settled what the
/// destination path holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeepOutcome {
    pub original_size: u64,
    pub final_size: u64,
    /// Percent reduction the candidate achieved, kept or not
    pub reduction_percent: f64,
    pub kept_compressed: bool,
    pub resized: bool,
    pub width: u32,
    pub height: u32,
}

/// Run one enumerated file through transcode and keep decision, leaving the
/// final bytes at `dest`.
pub fn process_file(entry: &ImageEntry, dest: &Path, config: &RunConfig) -> Result<KeepOutcome> {
    let original_size = fs::metadata(&entry.source)?.len();
    if original_size == 0 {
        return Err(MirrorError::EmptyFile(entry.source.clone()));
    }

    ensure_parent_dirs(dest)?;
    let outcome = transcode_entry(&entry.source, dest, entry.kind, config)?;
    apply_keep_policy(&entry.source, original_size, outcome, config)
}

/// Produce the candidate at `dest`: re-encode JPEG/PNG sources honoring the
/// resize cap, copy everything else verbatim.
pub fn transcode_entry(
    source: &Path,
    dest: &Path,
    kind: CodecKind,
    config: &RunConfig,
) -> Result<TranscodeOutcome> {
    match kind {
        CodecKind::Jpeg => encode_jpeg(source, dest, config),
        CodecKind::Png => encode_png(source, dest, config),
        CodecKind::Passthrough => copy_verbatim(source, dest),
    }
}

/// Keep the candidate only when its size reduction clears the threshold;
/// otherwise overwrite it with the original bytes.
pub fn apply_keep_policy(
    source: &Path,
    original_size: u64,
    outcome: TranscodeOutcome,
    config: &RunConfig,
) -> Result<KeepOutcome> {
    if original_size == 0 {
        return Err(MirrorError::EmptyFile(source.to_path_buf()));
    }

    let reduction = percent_change(original_size, outcome.candidate_size);
    let keep = outcome.recompressed && reduction > config.keep_threshold;
    if outcome.recompressed && !keep {
        fs::copy(source, &outcome.dest)?;
    }

    Ok(KeepOutcome {
        original_size,
        final_size: if keep {
            outcome.candidate_size
        } else {
            original_size
        },
        reduction_percent: reduction,
        kept_compressed: keep,
        resized: outcome.resized,
        width: outcome.width,
        height: outcome.height,
    })
}

/// Create all missing ancestor directories of `dest`. Idempotent.
pub fn ensure_parent_dirs(dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|_| MirrorError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }
    Ok(())
}

fn load_and_cap(source: &Path, max_width: u32) -> Result<(DynamicImage, bool)> {
    let img = ImageReader::open(source)?.decode()?;
    if img.width() > max_width {
        // resize() preserves aspect ratio; the unbounded height leaves the
        // width cap as the binding constraint.
        let resized = img.resize(max_width, u32::MAX, FilterType::Lanczos3);
        Ok((resized, true))
    } else {
        Ok((img, false))
    }
}

fn encode_jpeg(source: &Path, dest: &Path, config: &RunConfig) -> Result<TranscodeOutcome> {
    let (img, resized) = load_and_cap(source, config.max_width)?;

    let file = fs::File::create(dest)?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, config.jpeg_quality);
    img.write_with_encoder(encoder)?;
    writer.flush()?;

    Ok(TranscodeOutcome {
        dest: dest.to_path_buf(),
        candidate_size: fs::metadata(dest)?.len(),
        width: img.width(),
        height: img.height(),
        resized,
        recompressed: true,
    })
}

fn encode_png(source: &Path, dest: &Path, config: &RunConfig) -> Result<TranscodeOutcome> {
    let (img, resized) = load_and_cap(source, config.max_width)?;

    let temp_path = dest.with_extension("tmp.png");
    img.save_with_format(&temp_path, image::ImageFormat::Png)?;

    struct TempFileGuard(PathBuf);
    impl Drop for TempFileGuard {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }
    let _guard = TempFileGuard(temp_path.clone());

    let mut options = Options::from_preset(OXIPNG_PRESET);
    options.force = true;
    options.deflate = if config.png_quality >= 90 {
        Deflaters::Zopfli {
            iterations: NonZeroU8::new(ZOPFLI_ITERATIONS).unwrap(),
        }
    } else if config.png_quality >= 70 {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_HIGH_LEVEL,
        }
    } else {
        Deflaters::Libdeflater {
            compression: LIBDEFLATER_LOW_LEVEL,
        }
    };

    let input = InFile::Path(temp_path.clone());
    let out = OutFile::Path {
        path: Some(dest.to_path_buf()),
        preserve_attrs: false,
    };
    oxipng::optimize(&input, &out, &options)
        .map_err(|e| MirrorError::PngOptimization(e.to_string()))?;

    Ok(TranscodeOutcome {
        dest: dest.to_path_buf(),
        candidate_size: fs::metadata(dest)?.len(),
        width: img.width(),
        height: img.height(),
        resized,
        recompressed: true,
    })
}

fn copy_verbatim(source: &Path, dest: &Path) -> Result<TranscodeOutcome> {
    let (width, height) = ImageReader::open(source)?.into_dimensions()?;
    let candidate_size = fs::copy(source, dest)?;

    Ok(TranscodeOutcome {
        dest: dest.to_path_buf(),
        candidate_size,
        width,
        height,
        resized: false,
        recompressed: false,
    })
}
