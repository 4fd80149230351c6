//! Best-effort cleanup of uploaded image files referenced by a resume.
//!
//! Deleting a resume must not fail because an image is already gone or the
//! filesystem misbehaves, so every outcome here is swallowed after logging.

use std::path::Path;

use tracing::warn;

/// Removes the uploaded file referenced by `link`, if any.
///
/// The link may be a bare filename or a full URL; only its final path segment
/// is looked up under `upload_dir`. A missing file is a no-op success.
pub async fn remove_referenced_file(upload_dir: &str, link: Option<&str>) {
    let Some(link) = link.map(str::trim).filter(|l| !l.is_empty()) else {
        return;
    };
    let Some(file_name) = file_name_of(link) else {
        return;
    };

    let path = Path::new(upload_dir).join(file_name);
    match tokio::fs::remove_file(&path).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Failed to remove upload {}: {e}", path.display()),
    }
}

/// Final path segment of a link. Rejects traversal components so a stored
/// link can never reach outside the upload directory.
fn file_name_of(link: &str) -> Option<&str> {
    link.rsplit(['/', '\\'])
        .next()
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_of_url() {
        assert_eq!(
            file_name_of("http://localhost:8080/uploads/thumb-123.png"),
            Some("thumb-123.png")
        );
    }

    #[test]
    fn test_file_name_of_bare_name() {
        assert_eq!(file_name_of("thumb-123.png"), Some("thumb-123.png"));
    }

    #[test]
    fn test_file_name_of_rejects_traversal() {
        assert_eq!(file_name_of("uploads/.."), None);
        assert_eq!(file_name_of("uploads/"), None);
    }

    #[tokio::test]
    async fn test_removes_referenced_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thumb.png");
        std::fs::write(&path, b"png").unwrap();

        remove_referenced_file(
            dir.path().to_str().unwrap(),
            Some("http://localhost:8080/uploads/thumb.png"),
        )
        .await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_no_op() {
        let dir = tempfile::tempdir().unwrap();
        remove_referenced_file(dir.path().to_str().unwrap(), Some("gone.png")).await;
    }

    #[tokio::test]
    async fn test_absent_and_blank_links_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        remove_referenced_file(dir.path().to_str().unwrap(), None).await;
        remove_referenced_file(dir.path().to_str().unwrap(), Some("   ")).await;
    }
}
