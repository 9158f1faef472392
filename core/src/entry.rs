use serde::{Deserialize, Serialize};

/// Kind discriminant of a listing row. The driver reports directories with
/// kind code 1; every other code is treated as a plain file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => EntryKind::Directory,
            _ => EntryKind::File,
        }
    }
}

/// One row of a directory listing, copied out of the driver's result chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        DirectoryEntry {
            name: name.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_kind_code_maps_to_directory() {
        assert_eq!(EntryKind::from_code(1), EntryKind::Directory);
    }

    #[test]
    fn test_other_kind_codes_default_to_file() {
        assert_eq!(EntryKind::from_code(0), EntryKind::File);
        assert_eq!(EntryKind::from_code(7), EntryKind::File);
        assert_eq!(EntryKind::from_code(-1), EntryKind::File);
    }
}
