pub mod entry;
pub mod error;
pub mod test_utils;
pub mod volume;

pub use entry::{DirectoryEntry, EntryKind};
pub use error::NtfsUtilsError;
pub use volume::VolumeOps;
