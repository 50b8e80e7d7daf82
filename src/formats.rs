/// Transcode dispatch classes
///
/// The recognized-extension set on `RunConfig` controls what the walker
/// enumerates; `CodecKind` controls what happens to an enumerated file.
/// GIF and WebP are recognized as images but never re-encoded, so they
/// classify as `Passthrough` and are copied verbatim.
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecKind {
    /// Lossy re-encode at the configured JPEG quality
    Jpeg,
    /// Re-encode then oxipng optimization
    Png,
    /// Verbatim byte copy, dimensions read from the header only
    Passthrough,
}

impl CodecKind {
    pub fn from_path(path: &Path) -> Self {
        match lowercase_extension(path).as_deref() {
            Some("jpg") | Some("jpeg") => CodecKind::Jpeg,
            Some("png") => CodecKind::Png,
            _ => CodecKind::Passthrough,
        }
    }

    /// Whether files of this kind get a recompressed candidate at all.
    pub fn recompresses(&self) -> bool {
        !matches!(self, CodecKind::Passthrough)
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodecKind::Jpeg => "JPEG",
            CodecKind::Png => "PNG",
            CodecKind::Passthrough => "passthrough",
        };
        write!(f, "{}", name)
    }
}

/// Lowercased file extension, if the path has one.
pub fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_kind_from_path() {
        assert_eq!(CodecKind::from_path(Path::new("a.jpg")), CodecKind::Jpeg);
        assert_eq!(CodecKind::from_path(Path::new("a.jpeg")), CodecKind::Jpeg);
        assert_eq!(CodecKind::from_path(Path::new("a.png")), CodecKind::Png);
        assert_eq!(
            CodecKind::from_path(Path::new("a.gif")),
            CodecKind::Passthrough
        );
        assert_eq!(
            CodecKind::from_path(Path::new("a.webp")),
            CodecKind::Passthrough
        );
        assert_eq!(
            CodecKind::from_path(Path::new("a")),
            CodecKind::Passthrough
        );
    }

    #[test]
    fn test_codec_kind_case_insensitive() {
        assert_eq!(CodecKind::from_path(Path::new("a.JPG")), CodecKind::Jpeg);
        assert_eq!(CodecKind::from_path(Path::new("a.PnG")), CodecKind::Png);
    }

    #[test]
    fn test_recompresses() {
        assert!(CodecKind::Jpeg.recompresses());
        assert!(CodecKind::Png.recompresses());
        assert!(!CodecKind::Passthrough.recompresses());
    }

    #[test]
    fn test_lowercase_extension() {
        assert_eq!(
            lowercase_extension(Path::new("a.JPEG")),
            Some("jpeg".to_string())
        );
        assert_eq!(lowercase_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CodecKind::Jpeg), "JPEG");
        assert_eq!(format!("{}", CodecKind::Png), "PNG");
        assert_eq!(format!("{}", CodecKind::Passthrough), "passthrough");
    }
}
