//! Lazy depth-first directory traversal.
//!
//! [`FileWalker`] yields matching files one at a time while holding at most
//! one directory listing in memory. Descent uses an explicit LIFO stack of
//! pending directory paths instead of call-stack recursion, so arbitrarily
//! deep and wide trees walk in bounded memory. Directories and files pass
//! through independent caller-supplied predicates, and the walker tracks
//! scan statistics and directories found with no entries at all.
//!
//! Known gap: symbolic links that resolve to directories are followed and
//! there is no cycle detection, so a cyclic link tree walks indefinitely.

use crate::error::WalkError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Boolean decision function over a filesystem path.
pub type PathPredicate = Box<dyn Fn(&Path) -> bool>;

/// Scanned-file interval between progress diagnostics.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Traversal configuration, fixed for the lifetime of one walker.
pub struct WalkOptions {
    /// Descend into subdirectories. When false, child directories are still
    /// counted as scanned but never entered.
    pub recursive: bool,
    /// Accepts or prunes subdirectories at any depth. `None` accepts all.
    pub dir_filter: Option<PathPredicate>,
    /// Accepts or rejects files. `None` accepts all.
    pub file_filter: Option<PathPredicate>,
    /// Emit tracing diagnostics (progress, warnings, end-of-scan summary).
    /// When false the walker is silent.
    pub diagnostics: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            dir_filter: None,
            file_filter: None,
            diagnostics: true,
        }
    }
}

/// A file accepted by the traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Size in bytes at the time it was scanned.
    pub size: u64,
}

/// Counters for one traversal. All counters are monotonically non-decreasing
/// for the life of the walker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files accepted by the file predicate and yielded.
    pub matched_files: u64,
    /// Cumulative byte size of matched files.
    pub matched_bytes: u64,
    /// Directory entries seen, whether descended or not.
    pub scanned_dirs: u64,
    /// Regular files seen, whether matched or not.
    pub scanned_files: u64,
    /// Directories refused by the directory predicate, plus directories that
    /// could not be listed.
    pub rejected_dirs: u64,
    /// Files refused by the file predicate, plus entries that are neither
    /// directory nor regular file.
    pub rejected_files: u64,
}

/// Lazy depth-first walker over one directory tree.
///
/// Binds one root path and two optional predicates at construction and is
/// single-use: once exhausted it stays exhausted. The next qualifying file is
/// always computed one step ahead of the consumer, so [`FileWalker::has_next`]
/// is side-effect-free.
pub struct FileWalker {
    root: PathBuf,
    recursive: bool,
    dir_filter: Option<PathPredicate>,
    file_filter: Option<PathPredicate>,
    diagnostics: bool,

    /// Pending directories, popped last-in first-out.
    dir_stack: Vec<PathBuf>,
    /// Directory whose listing is currently being consumed.
    current_dir: PathBuf,
    /// Entry names of `current_dir`, replaced wholesale when exhausted.
    listing: Vec<OsString>,
    listing_index: usize,
    /// Lookahead slot: the next qualifying file, held until consumed.
    pending: Option<MatchedFile>,
    summary_logged: bool,

    stats: ScanStats,
    empty_dirs: Vec<PathBuf>,
}

impl FileWalker {
    /// Create a walker rooted at `root` and compute the first result.
    ///
    /// A relative root is resolved against the current working directory so
    /// that yielded paths are absolute. A root that does not exist or cannot
    /// be listed is not an error: the walker starts exhausted and the failure
    /// is counted as a rejected directory.
    pub fn new(root: impl Into<PathBuf>, options: WalkOptions) -> Self {
        let root = absolute_path(root.into());
        let mut walker = Self {
            dir_stack: vec![root.clone()],
            current_dir: root.clone(),
            root,
            recursive: options.recursive,
            dir_filter: options.dir_filter,
            file_filter: options.file_filter,
            diagnostics: options.diagnostics,
            listing: Vec::new(),
            listing_index: 0,
            pending: None,
            summary_logged: false,
            stats: ScanStats::default(),
            empty_dirs: Vec::new(),
        };
        walker.pending = walker.find_next_matching();
        if walker.pending.is_none() {
            walker.log_summary();
        }
        walker
    }

    /// Whether another qualifying file exists. Side-effect-free and
    /// idempotent: the answer is read from the lookahead slot.
    pub fn has_next(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the buffered file and immediately recompute the lookahead.
    ///
    /// Fails with [`WalkError::Exhausted`] on every call once no files
    /// remain.
    pub fn next_file(&mut self) -> Result<MatchedFile, WalkError> {
        let current = self.pending.take().ok_or(WalkError::Exhausted)?;
        self.pending = self.find_next_matching();
        if self.pending.is_none() {
            self.log_summary();
        }
        Ok(current)
    }

    /// Directories found with zero raw entries so far, as paths relative to
    /// the root. The root itself is recorded as the empty path. Emptiness is
    /// judged on the raw listing, before any predicate filtering.
    pub fn empty_directories(&self) -> &[PathBuf] {
        &self.empty_dirs
    }

    /// Counters for the traversal so far.
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// The absolute root path this walker is bound to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Advance until the next file accepted by the predicates, updating
    /// counters along the way. Returns `None` when the stack runs dry.
    fn find_next_matching(&mut self) -> Option<MatchedFile> {
        loop {
            if self.listing_index == self.listing.len() {
                let dir = self.dir_stack.pop()?;
                self.listing = match fs::read_dir(&dir) {
                    Ok(entries) => entries.flatten().map(|e| e.file_name()).collect(),
                    Err(err) => {
                        self.stats.rejected_dirs += 1;
                        if self.diagnostics {
                            warn!(
                                path = %dir.display(),
                                error = %err,
                                "Cannot list directory, skipping"
                            );
                        }
                        continue;
                    }
                };
                self.listing_index = 0;
                if self.listing.is_empty() {
                    let relative = dir.strip_prefix(&self.root).unwrap_or(&dir).to_path_buf();
                    self.empty_dirs.push(relative);
                }
                self.current_dir = dir;
            }

            while self.listing_index < self.listing.len() {
                let name = self.listing[self.listing_index].clone();
                self.listing_index += 1;
                let path = self.current_dir.join(&name);

                match path.metadata() {
                    Ok(meta) if meta.is_dir() => {
                        self.stats.scanned_dirs += 1;
                        if !self.recursive {
                            if self.diagnostics {
                                debug!(path = %path.display(), "Ignoring directory in non-recursive scan");
                            }
                        } else if self.dir_filter.as_ref().is_some_and(|accept| !accept(&path)) {
                            self.stats.rejected_dirs += 1;
                        } else {
                            self.dir_stack.push(path);
                        }
                    }
                    Ok(meta) if meta.is_file() => {
                        self.stats.scanned_files += 1;
                        if self.diagnostics && self.stats.scanned_files % PROGRESS_INTERVAL == 0 {
                            info!(
                                scanned_files = self.stats.scanned_files,
                                last = %path.display(),
                                "Scan progress"
                            );
                        }
                        if self.file_filter.as_ref().is_some_and(|accept| !accept(&path)) {
                            self.stats.rejected_files += 1;
                        } else {
                            self.stats.matched_files += 1;
                            self.stats.matched_bytes += meta.len();
                            return Some(MatchedFile {
                                path,
                                size: meta.len(),
                            });
                        }
                    }
                    _ => {
                        // Broken symlink, socket, device, or unreadable entry.
                        self.stats.rejected_files += 1;
                        if self.diagnostics {
                            warn!(
                                path = %path.display(),
                                "Not a regular file or directory, skipping"
                            );
                        }
                    }
                }
            }
        }
    }

    /// Emit the end-of-scan summary exactly once, when the lookahead first
    /// turns empty.
    fn log_summary(&mut self) {
        if self.summary_logged || !self.diagnostics {
            return;
        }
        self.summary_logged = true;
        info!(
            matched_files = self.stats.matched_files,
            matched_bytes = self.stats.matched_bytes,
            scanned_dirs = self.stats.scanned_dirs,
            scanned_files = self.stats.scanned_files,
            rejected_dirs = self.stats.rejected_dirs,
            rejected_files = self.stats.rejected_files,
            empty_dirs = self.empty_dirs.len(),
            "Scan complete"
        );
    }
}

impl Iterator for FileWalker {
    type Item = MatchedFile;

    fn next(&mut self) -> Option<MatchedFile> {
        self.next_file().ok()
    }
}

/// Resolve a path against the current working directory without touching the
/// filesystem, so a nonexistent root is still representable.
fn absolute_path(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}
