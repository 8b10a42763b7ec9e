use std::path::{Path, PathBuf};

/// Optional per-team logo images stored as `<dir>/<team>.png`.
#[derive(Debug, Clone)]
pub struct LogoStore {
    dir: PathBuf,
}

impl LogoStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the team's logo, or `None` when no file exists.
    pub fn logo_for(&self, team: &str) -> Option<PathBuf> {
        let path = self.dir.join(format!("{team}.png"));
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_logo_is_found() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Goa.png"), b"png").unwrap();

        let store = LogoStore::new(dir.path());
        assert_eq!(store.logo_for("Goa"), Some(dir.path().join("Goa.png")));
    }

    #[test]
    fn test_missing_logo_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogoStore::new(dir.path());
        assert_eq!(store.logo_for("Odisha"), None);

        let store = LogoStore::new("/nonexistent/logos");
        assert_eq!(store.logo_for("Odisha"), None);
    }
}
