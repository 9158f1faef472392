use crate::{DirectoryEntry, NtfsUtilsError};

/// Operations an open volume session offers to the interactive shell.
///
/// `cd` and `cp` return the driver's human-readable response text, which the
/// shell prints verbatim; the driver reports its own failures through that
/// text rather than through an error value.
pub trait VolumeOps {
    /// Current working directory of the session.
    fn pwd(&mut self) -> Result<String, NtfsUtilsError>;

    /// Change the working directory; returns the driver's response text.
    fn cd(&mut self, path: &str) -> Result<String, NtfsUtilsError>;

    /// List a directory, `"."` for the working directory.
    fn ls(&mut self, path: &str) -> Result<Vec<DirectoryEntry>, NtfsUtilsError>;

    /// Copy a file or directory out of the volume; returns the driver's
    /// response text.
    fn cp(&mut self, from_path: &str, to_path: &str) -> Result<String, NtfsUtilsError>;
}
