use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use waitlist_types::FlagStore;

/// Name of the marker file recording a successful submission.
const FLAG_FILE: &str = "waitlist_submitted";

/// File-backed submitted flag: the marker file's existence is the flag.
///
/// Written once on the first accepted submission and never removed by the
/// app, so every later run starts on the success screen.
#[derive(Debug, Clone)]
pub struct FileFlag {
    path: PathBuf,
}

impl FileFlag {
    /// Flag stored as `{state_dir}/waitlist_submitted`.
    pub fn in_dir(state_dir: impl AsRef<Path>) -> Self {
        Self {
            path: state_dir.as_ref().join(FLAG_FILE),
        }
    }
}

impl FlagStore for FileFlag {
    type Error = io::Error;

    fn is_set(&self) -> Result<bool, Self::Error> {
        self.path.try_exists()
    }

    fn set(&mut self) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, b"true")?;
        log::info!("recorded submission at {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut flag = FileFlag::in_dir(dir.path());

        assert!(!flag.is_set().unwrap());
        flag.set().unwrap();
        assert!(flag.is_set().unwrap());

        // A second store over the same directory sees the flag.
        let other = FileFlag::in_dir(dir.path());
        assert!(other.is_set().unwrap());
    }

    #[test]
    fn set_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut flag = FileFlag::in_dir(dir.path());
        flag.set().unwrap();
        flag.set().unwrap();
        assert!(flag.is_set().unwrap());
    }
}
