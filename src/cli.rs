use crate::config::RunConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "img-mirror",
    about = "Recursively compress an image tree into a mirrored output directory",
    long_about = "img-mirror walks a source directory, recompresses every recognized image \
                  (JPEG and PNG are re-encoded, GIF is copied verbatim) and writes the result \
                  to the same relative path under the output directory. A recompressed file is \
                  only kept when it is meaningfully smaller than the original; otherwise the \
                  original bytes are copied instead. The output directory is wiped and \
                  recreated at the start of every run.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    img-mirror ./unprocessed ./processed\n  \
    img-mirror ./assets ./dist -w 1280 --jpeg-quality 75\n  \
    img-mirror ./photos ./out --include-webp --verbose"
)]
pub struct Args {
    #[arg(help = "Source directory to walk for images")]
    pub source: PathBuf,

    #[arg(help = "Output directory for the mirrored tree (wiped at run start)")]
    pub output: PathBuf,

    #[arg(
        short = 'w',
        long,
        help = "Resize cap in pixels (default: 1920)",
        long_help = "Maximum pixel width. Images wider than this are downscaled to it, \
                     preserving aspect ratio; narrower images are never upscaled."
    )]
    pub max_width: Option<u32>,

    #[arg(
        long,
        help = "JPEG re-encode quality (1-100, default: 80)",
        long_help = "Quality used when re-encoding JPEG sources."
    )]
    pub jpeg_quality: Option<u8>,

    #[arg(
        long,
        help = "PNG optimization quality (1-100, default: 80)",
        long_help = "Quality used when optimizing PNG sources. \
                     >=90 uses Zopfli, >=70 uses high compression, <70 uses standard compression."
    )]
    pub png_quality: Option<u8>,

    #[arg(
        short = 't',
        long,
        help = "Minimum percent size reduction to keep a recompressed file (default: 30)",
        long_help = "A recompressed candidate is kept only when it shrinks the file by more \
                     than this percentage; otherwise the original bytes are copied verbatim."
    )]
    pub keep_threshold: Option<f64>,

    #[arg(long, help = "Also treat .webp files as images")]
    pub include_webp: bool,

    #[arg(short, long, help = "Suppress progress and per-file output")]
    pub quiet: bool,

    #[arg(short, long, help = "Print extra detail while running")]
    pub verbose: bool,
}

impl Args {
    pub fn into_config(self) -> RunConfig {
        let mut config = RunConfig::new(self.source, self.output);
        if let Some(max_width) = self.max_width {
            config.max_width = max_width;
        }
        if let Some(quality) = self.jpeg_quality {
            config.jpeg_quality = quality;
        }
        if let Some(quality) = self.png_quality {
            config.png_quality = quality;
        }
        if let Some(threshold) = self.keep_threshold {
            config.keep_threshold = threshold;
        }
        config.include_webp = self.include_webp;
        config
    }
}
