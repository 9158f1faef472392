/// Mock implementations for exercising the shell without a driver library.
use crate::{DirectoryEntry, NtfsUtilsError, VolumeOps};
use std::collections::HashMap;

/// Mock volume session - NEVER touches a real device or the driver library.
///
/// Records every call that crosses the seam so tests can assert which
/// driver operations were (and were not) issued.
pub struct MockVolume {
    cwd: String,
    listings: HashMap<String, Vec<DirectoryEntry>>,
    pub calls: Vec<String>,
    pub fail_pwd: bool,
}

impl MockVolume {
    pub fn new(cwd: &str) -> Self {
        MockVolume {
            cwd: cwd.to_string(),
            listings: HashMap::new(),
            calls: Vec::new(),
            fail_pwd: false,
        }
    }

    pub fn with_listing(mut self, path: &str, entries: Vec<DirectoryEntry>) -> Self {
        self.listings.insert(path.to_string(), entries);
        self
    }

    /// Calls other than the prompt's `pwd` queries.
    pub fn command_calls(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter(|c| c.as_str() != "pwd")
            .map(String::as_str)
            .collect()
    }
}

impl VolumeOps for MockVolume {
    fn pwd(&mut self) -> Result<String, NtfsUtilsError> {
        self.calls.push("pwd".to_string());
        if self.fail_pwd {
            return Err(NtfsUtilsError::Other(
                "driver returned no working directory".to_string(),
            ));
        }
        Ok(self.cwd.clone())
    }

    fn cd(&mut self, path: &str) -> Result<String, NtfsUtilsError> {
        self.calls.push(format!("cd {}", path));
        self.cwd = path.to_string();
        Ok(format!("changed to {}", path))
    }

    fn ls(&mut self, path: &str) -> Result<Vec<DirectoryEntry>, NtfsUtilsError> {
        self.calls.push(format!("ls {}", path));
        Ok(self.listings.get(path).cloned().unwrap_or_default())
    }

    fn cp(&mut self, from_path: &str, to_path: &str) -> Result<String, NtfsUtilsError> {
        self.calls.push(format!("cp {} {}", from_path, to_path));
        Ok(format!("copied {} to {}", from_path, to_path))
    }
}
