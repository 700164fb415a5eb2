//! Video file handle passed to analysis backends.

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

/// Opaque handle to an uploaded site video.
///
/// The simulated backend never reads the file; only the upload widget and the
/// optional strict input policy look at the name, size and media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHandle {
    /// File name as uploaded.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Media type, if known.
    pub mime_type: Option<String>,
    /// Location on disk, when the handle came from a local file.
    pub path: Option<PathBuf>,
}

impl VideoHandle {
    /// Create a handle from already-known attributes.
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: Option<&str>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.map(normalize_mime),
            path: None,
        }
    }

    /// Create a handle for a local file.
    ///
    /// The media type is sniffed from the first 8KB of content, falling back
    /// to the file extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = tokio::fs::metadata(path).await?;
        if !metadata.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            ));
        }

        let mut file = tokio::fs::File::open(path).await?;
        let mut buffer = [0u8; 8192];
        let bytes_read = file.read(&mut buffer).await?;

        let mime_type = infer::get(&buffer[..bytes_read])
            .map(|t| t.mime_type().to_string())
            .or_else(|| mime_guess::from_path(path).first().map(|m| m.to_string()));

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            name,
            size_bytes: metadata.len(),
            mime_type: mime_type.as_deref().map(normalize_mime),
            path: Some(path.to_path_buf()),
        })
    }

    /// Whether the media type is a `video/*` type.
    pub fn is_video(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|m| mimetype_matches("video/*", m))
    }

    pub fn is_empty(&self) -> bool {
        self.size_bytes == 0
    }

    /// Size in MiB rounded to one decimal, as the upload widget shows it.
    pub fn display_size(&self) -> String {
        let mib = self.size_bytes as f64 / 1024.0 / 1024.0;
        format!("{:.1} MB", (mib * 10.0).round() / 10.0)
    }
}

/// Check if a mimetype matches a pattern (supports wildcards like "video/*").
pub fn mimetype_matches(pattern: &str, mimetype: &str) -> bool {
    if pattern == "*" || pattern == "*/*" {
        return true;
    }
    if let Some(prefix) = pattern.strip_suffix("/*") {
        mimetype.starts_with(prefix) && mimetype[prefix.len()..].starts_with('/')
    } else {
        pattern == mimetype
    }
}

/// Strip parameters and lowercase a media type.
fn normalize_mime(mime: &str) -> String {
    mime.split(';').next().unwrap_or(mime).trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mimetype_matches() {
        assert!(mimetype_matches("video/*", "video/mp4"));
        assert!(mimetype_matches("video/*", "video/quicktime"));
        assert!(!mimetype_matches("video/*", "audio/mpeg"));
        assert!(!mimetype_matches("video/*", "videogame/x"));
        assert!(mimetype_matches("application/pdf", "application/pdf"));
        assert!(mimetype_matches("*/*", "anything/here"));
    }

    #[test]
    fn test_new_normalizes_mime() {
        let video = VideoHandle::new("site.mp4", 10, Some("Video/MP4; codecs=avc1"));
        assert_eq!(video.mime_type.as_deref(), Some("video/mp4"));
        assert!(video.is_video());
    }

    #[test]
    fn test_missing_mime_is_not_video() {
        let video = VideoHandle::new("site", 10, None);
        assert!(!video.is_video());
    }

    #[test]
    fn test_display_size() {
        assert_eq!(VideoHandle::new("a", 0, None).display_size(), "0.0 MB");
        assert_eq!(
            VideoHandle::new("a", 5 * 1024 * 1024 + 300_000, None).display_size(),
            "5.3 MB"
        );
    }

    #[tokio::test]
    async fn test_from_path_uses_extension_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walkthrough.mp4");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not really a video").unwrap();

        let video = VideoHandle::from_path(&path).await.unwrap();
        assert_eq!(video.name, "walkthrough.mp4");
        assert_eq!(video.size_bytes, 18);
        assert_eq!(video.mime_type.as_deref(), Some("video/mp4"));
        assert_eq!(video.path.as_deref(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn test_from_path_sniffs_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.mp4");
        std::fs::write(&path, b"%PDF-1.4\n%rest of a pdf").unwrap();

        let video = VideoHandle::from_path(&path).await.unwrap();
        assert_eq!(video.mime_type.as_deref(), Some("application/pdf"));
        assert!(!video.is_video());
    }

    #[tokio::test]
    async fn test_from_path_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = VideoHandle::from_path(dir.path()).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
