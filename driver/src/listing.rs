// Single-use guard over a driver-owned listing chain.

use crate::ffi::{FreeLsInfoFn, LsInfo};
use log::debug;
use ntfsutils_core::{DirectoryEntry, EntryKind};
use std::ffi::CStr;
use std::ptr::NonNull;

/// Owns one raw `ls` result for the duration of a single traversal.
///
/// The guard is constructed only for a non-null head, traversed at most
/// once, and hands the original head back to `free_ls_info` when dropped,
/// so the driver allocation is released exactly once on every path.
pub(crate) struct Listing {
    head: NonNull<LsInfo>,
    release: FreeLsInfoFn,
}

impl Listing {
    /// Returns `None` for a null head: no result, nothing to release.
    pub(crate) fn from_raw(head: *mut LsInfo, release: FreeLsInfoFn) -> Option<Self> {
        NonNull::new(head).map(|head| Listing { head, release })
    }

    /// Copies every entry out of the chain in driver order.
    ///
    /// The head is a sentinel carrying no entry; traversal dereferences
    /// through it once, then reads nodes until the first null link. A null
    /// link immediately after the sentinel is an empty directory. Node
    /// memory stays driver-owned; nothing is retained past the copy.
    pub(crate) fn entries(&self) -> Vec<DirectoryEntry> {
        let mut entries = Vec::new();
        let mut node = unsafe { self.head.as_ref() }.next;
        while let Some(current) = unsafe { node.as_ref() } {
            let name = if current.filename.is_null() {
                String::new()
            } else {
                unsafe { CStr::from_ptr(current.filename) }
                    .to_string_lossy()
                    .into_owned()
            };
            entries.push(DirectoryEntry::new(name, EntryKind::from_code(current.kind)));
            node = current.next;
        }
        entries
    }
}

impl Drop for Listing {
    fn drop(&mut self) {
        let status = unsafe { (self.release)(self.head.as_ptr()) };
        if status != 0 {
            debug!("free_ls_info returned status {}", status);
        }
    }
}
