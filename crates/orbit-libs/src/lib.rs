//! Dynamic library collection for orbit-tools.
//!
//! Scans a dependency tree for DLLs, sorts the known ones into debug and
//! optimized folders, and writes name lists for project files.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

pub mod collector;
pub mod lists;

pub use collector::{
    check_output, collect, find_files, format_list, prepare_output, write_list, CollectReport,
    CollectorConfig, DEBUG_DIR, DEBUG_LIST, OPTIMIZED_DIR, OPTIMIZED_LIST,
};
pub use lists::{Classification, LibraryLists, DEBUG_DLLS, OPTIMIZED_DLLS};
