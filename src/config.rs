use crate::constants::{
    DEFAULT_JPEG_QUALITY, DEFAULT_KEEP_THRESHOLD, DEFAULT_MAX_WIDTH, DEFAULT_PNG_QUALITY,
    MAX_QUALITY, MIN_QUALITY, RECOGNIZED_EXTENSIONS, WEBP_EXTENSION,
};
use crate::error::{MirrorError, Result};
use crate::formats::lowercase_extension;
use std::path::{Path, PathBuf};

/// Configuration for one mirroring run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root of the tree to walk
    pub source_dir: PathBuf,
    /// Root of the mirrored output tree, wiped at run start
    pub output_dir: PathBuf,
    /// Resize cap: images wider than this are downscaled to it
    pub max_width: u32,
    /// JPEG re-encode quality (1-100)
    pub jpeg_quality: u8,
    /// PNG optimization quality (1-100), mapped to oxipng deflate effort
    pub png_quality: u8,
    /// Minimum percent size reduction required to keep a recompressed file
    pub keep_threshold: f64,
    /// Extend the recognized extension set with `webp`
    pub include_webp: bool,
}

impl RunConfig {
    pub fn new(source_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            source_dir,
            output_dir,
            max_width: DEFAULT_MAX_WIDTH,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            png_quality: DEFAULT_PNG_QUALITY,
            keep_threshold: DEFAULT_KEEP_THRESHOLD,
            include_webp: false,
        }
    }

    /// Validate configuration parameters and directory layout.
    ///
    /// The overlap check is lexical: it catches an output root equal to or
    /// nested under the source root (and vice versa) without touching the
    /// filesystem, which is enough to refuse the destructive cases the
    /// wipe-and-mirror design would otherwise hit.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.jpeg_quality) {
            return Err(MirrorError::InvalidQuality(self.jpeg_quality));
        }
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&self.png_quality) {
            return Err(MirrorError::InvalidQuality(self.png_quality));
        }
        if self.max_width == 0 {
            return Err(MirrorError::InvalidMaxWidth);
        }
        if !self.keep_threshold.is_finite()
            || self.keep_threshold < 0.0
            || self.keep_threshold >= 100.0
        {
            return Err(MirrorError::InvalidThreshold(self.keep_threshold));
        }
        if !self.source_dir.is_dir() {
            return Err(MirrorError::SourceNotFound(self.source_dir.clone()));
        }
        if self.output_dir.starts_with(&self.source_dir)
            || self.source_dir.starts_with(&self.output_dir)
        {
            return Err(MirrorError::OverlappingRoots(
                self.output_dir.clone(),
                self.source_dir.clone(),
            ));
        }
        Ok(())
    }

    /// Whether a path's extension is in the configured recognized set.
    pub fn recognizes(&self, path: &Path) -> bool {
        match lowercase_extension(path) {
            Some(ext) => {
                RECOGNIZED_EXTENSIONS.contains(&ext.as_str())
                    || (self.include_webp && ext == WEBP_EXTENSION)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn valid_config() -> (RunConfig, TempDir, TempDir) {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let config = RunConfig::new(
            source.path().to_path_buf(),
            output.path().to_path_buf(),
        );
        (config, source, output)
    }

    #[test]
    fn test_defaults() {
        let (config, _s, _o) = valid_config();
        assert_eq!(config.max_width, 1920);
        assert_eq!(config.jpeg_quality, 80);
        assert_eq!(config.png_quality, 80);
        assert_eq!(config.keep_threshold, 30.0);
        assert!(!config.include_webp);
    }

    #[test]
    fn test_validate_ok() {
        let (config, _s, _o) = valid_config();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_quality_range() {
        let (mut config, _s, _o) = valid_config();
        config.jpeg_quality = 0;
        assert!(matches!(
            config.validate(),
            Err(MirrorError::InvalidQuality(0))
        ));

        config.jpeg_quality = 80;
        config.png_quality = 101;
        assert!(matches!(
            config.validate(),
            Err(MirrorError::InvalidQuality(101))
        ));
    }

    #[test]
    fn test_validate_max_width() {
        let (mut config, _s, _o) = valid_config();
        config.max_width = 0;
        assert!(matches!(config.validate(), Err(MirrorError::InvalidMaxWidth)));
    }

    #[test]
    fn test_validate_threshold_range() {
        let (mut config, _s, _o) = valid_config();
        config.keep_threshold = 100.0;
        assert!(matches!(
            config.validate(),
            Err(MirrorError::InvalidThreshold(_))
        ));

        config.keep_threshold = -1.0;
        assert!(matches!(
            config.validate(),
            Err(MirrorError::InvalidThreshold(_))
        ));

        config.keep_threshold = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_source() {
        let output = TempDir::new().unwrap();
        let config = RunConfig::new(
            PathBuf::from("/nonexistent/source"),
            output.path().to_path_buf(),
        );
        assert!(matches!(
            config.validate(),
            Err(MirrorError::SourceNotFound(_))
        ));
    }

    #[test]
    fn test_validate_overlapping_roots() {
        let source = TempDir::new().unwrap();
        let nested = RunConfig::new(
            source.path().to_path_buf(),
            source.path().join("processed"),
        );
        assert!(matches!(
            nested.validate(),
            Err(MirrorError::OverlappingRoots(_, _))
        ));

        let same = RunConfig::new(
            source.path().to_path_buf(),
            source.path().to_path_buf(),
        );
        assert!(matches!(
            same.validate(),
            Err(MirrorError::OverlappingRoots(_, _))
        ));
    }

    #[test]
    fn test_recognizes_canonical_set() {
        let (config, _s, _o) = valid_config();
        assert!(config.recognizes(Path::new("a.jpg")));
        assert!(config.recognizes(Path::new("a.jpeg")));
        assert!(config.recognizes(Path::new("a.PNG")));
        assert!(config.recognizes(Path::new("a.gif")));

        assert!(!config.recognizes(Path::new("a.txt")));
        assert!(!config.recognizes(Path::new("a.bmp")));
        assert!(!config.recognizes(Path::new("a")));
    }

    #[test]
    fn test_recognizes_webp_opt_in() {
        let (mut config, _s, _o) = valid_config();
        assert!(!config.recognizes(Path::new("a.webp")));

        config.include_webp = true;
        assert!(config.recognizes(Path::new("a.webp")));
        assert!(config.recognizes(Path::new("a.WEBP")));
    }
}
