//! Library discovery and copying.
//!
//! A run clears the output directory, recreates `debug_dll/` and
//! `optimized_dll/` inside it, scans the source tree for `.dll` files and
//! copies every known one into the folder(s) of its configuration. The
//! de-duplicated names copied into each folder are also written to a list
//! file next to it.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use orbit_core::{OrbitError, Result};

use crate::lists::LibraryLists;

/// Subfolder receiving debug libraries.
pub const DEBUG_DIR: &str = "debug_dll";

/// Subfolder receiving optimized libraries.
pub const OPTIMIZED_DIR: &str = "optimized_dll";

/// List file naming the debug libraries copied.
pub const DEBUG_LIST: &str = "debug_dlls.txt";

/// List file naming the optimized libraries copied.
pub const OPTIMIZED_LIST: &str = "optimized_dlls.txt";

/// Where to look and where to copy to.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Directory tree to scan.
    pub root: PathBuf,
    /// Output directory. Deleted and recreated on every run.
    pub output: PathBuf,
    /// File extension to look for, including the dot.
    pub extension: String,
    /// Names to match against.
    pub lists: LibraryLists,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from("./library_lists"),
            extension: ".dll".to_string(),
            lists: LibraryLists::default(),
        }
    }
}

impl CollectorConfig {
    /// Creates a config for the given source and output directories.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            ..Self::default()
        }
    }
}

/// Summary of a collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectReport {
    /// Number of files with the right extension found.
    pub scanned: usize,
    /// Files copied into the debug folder.
    pub debug: Vec<PathBuf>,
    /// Files copied into the optimized folder.
    pub optimized: Vec<PathBuf>,
    /// Files found but on neither list.
    pub skipped: usize,
}

/// Recursively finds files whose name ends with `extension`.
///
/// Results are sorted. Directories in `exclude` are not entered.
pub fn find_files(dir: &Path, extension: &str, exclude: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = fs::read_dir(&current).map_err(|e| OrbitError::file_access(&current, e))?;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                if !exclude.iter().any(|ex| same_dir(ex, &path)) {
                    pending.push(path);
                }
            } else if path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(extension))
            {
                found.push(path);
            }
        }
    }

    found.sort();
    Ok(found)
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Writes names in the list file format: all names on one line separated by
/// `;`, then one name per line.
pub fn write_list<S: AsRef<str>>(names: &[S], path: &Path) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| OrbitError::file_access(path, e))?;
    file.write_all(format_list(names).as_bytes())?;
    Ok(())
}

/// Formats names in the list file format.
#[must_use]
pub fn format_list<S: AsRef<str>>(names: &[S]) -> String {
    let mut out = String::from("ONE LINE:\n");
    for name in names {
        out.push_str(name.as_ref());
        out.push(';');
    }
    out.push_str("\n\nREADABLE:\n");
    for name in names {
        out.push_str(name.as_ref());
        out.push('\n');
    }
    out
}

/// Removes and recreates the output directory with its two subfolders.
pub fn prepare_output(output: &Path) -> Result<(PathBuf, PathBuf)> {
    if output.exists() {
        fs::remove_dir_all(output).map_err(|e| OrbitError::file_access(output, e))?;
        log::debug!("cleared '{}'", output.display());
    }
    let debug = output.join(DEBUG_DIR);
    let optimized = output.join(OPTIMIZED_DIR);
    for dir in [&debug, &optimized] {
        fs::create_dir_all(dir).map_err(|e| OrbitError::file_access(dir, e))?;
    }
    Ok((debug, optimized))
}

/// Fails if removing `output` would also remove `root`.
///
/// A missing output directory is never a conflict, since nothing gets deleted.
pub fn check_output(root: &Path, output: &Path) -> Result<()> {
    if !output.exists() {
        return Ok(());
    }
    let root = root
        .canonicalize()
        .map_err(|e| OrbitError::file_access(root, e))?;
    let output = output
        .canonicalize()
        .map_err(|e| OrbitError::file_access(output, e))?;
    if root.starts_with(&output) {
        return Err(OrbitError::OutputContainsRoot { output, root });
    }
    Ok(())
}

/// Runs a full collection.
///
/// Refuses to start when the output directory contains the scan root.
pub fn collect(config: &CollectorConfig) -> Result<CollectReport> {
    check_output(&config.root, &config.output)?;
    let (debug_dir, optimized_dir) = prepare_output(&config.output)?;
    let files = find_files(&config.root, &config.extension, &[config.output.clone()])?;

    let mut report = CollectReport {
        scanned: files.len(),
        ..CollectReport::default()
    };
    let mut debug_names = BTreeSet::new();
    let mut optimized_names = BTreeSet::new();

    for path in files {
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            continue;
        };
        let class = config.lists.classify(&name);
        if class.is_unknown() {
            report.skipped += 1;
            continue;
        }
        if class.debug {
            copy_into(&path, &debug_dir, &name)?;
            debug_names.insert(name.clone());
            report.debug.push(path.clone());
        }
        if class.optimized {
            copy_into(&path, &optimized_dir, &name)?;
            optimized_names.insert(name);
            report.optimized.push(path);
        }
    }

    let debug_names: Vec<String> = debug_names.into_iter().collect();
    let optimized_names: Vec<String> = optimized_names.into_iter().collect();
    write_list(debug_names.as_slice(), &config.output.join(DEBUG_LIST))?;
    write_list(optimized_names.as_slice(), &config.output.join(OPTIMIZED_LIST))?;

    log::info!(
        "collected libraries from '{}': {} scanned, {} debug, {} optimized, {} skipped",
        config.root.display(),
        report.scanned,
        report.debug.len(),
        report.optimized.len(),
        report.skipped
    );
    Ok(report)
}

fn copy_into(src: &Path, dir: &Path, name: &str) -> Result<()> {
    let dest = dir.join(name);
    if dest.exists() {
        log::warn!("'{}' overwrites an earlier copy of {name}", src.display());
    }
    fs::copy(src, &dest).map_err(|e| OrbitError::file_access(src, e))?;
    log::debug!("copied '{}' -> '{}'", src.display(), dest.display());
    Ok(())
}
