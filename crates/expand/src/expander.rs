use crate::substitute::substitute;
use crate::EnvMapping;
use denv_core::{Error, Result};
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Summary of one expansion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandReport {
    /// Files whose relative path matched the pattern and were rewritten.
    pub expanded: usize,
    /// Files processed without substitution.
    pub copied: usize,
}

/// Rewrites matched resource files, replacing `${KEY}` placeholders.
///
/// The pattern matches against paths relative to each source root, with
/// `*` stopping at path separators (`**` crosses them). Files outside the
/// pattern are carried over byte-for-byte.
#[derive(Debug)]
pub struct ResourceExpander<'m> {
    mapping: &'m EnvMapping,
    pattern: String,
    matcher: GlobMatcher,
}

impl<'m> ResourceExpander<'m> {
    pub fn new(mapping: &'m EnvMapping, pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|err| Error::pattern(pattern, err.to_string()))?;
        Ok(Self {
            mapping,
            pattern: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether a source-root-relative path receives substitution.
    pub fn matches(&self, relative: &Path) -> bool {
        self.matcher.is_match(relative)
    }

    /// Run substitution over a string.
    pub fn expand_str(&self, input: &str) -> String {
        substitute(input, self.mapping)
    }

    /// Process one file into `dest`. Returns whether it was expanded.
    ///
    /// A matched file that is not valid UTF-8 is carried over unchanged
    /// rather than failing the pass.
    pub fn expand_file(&self, source: &Path, relative: &Path, dest: &Path) -> Result<bool> {
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| Error::file_system(parent, "create directory", err))?;
        }

        if self.matches(relative) {
            match std::fs::read_to_string(source) {
                Ok(text) => {
                    std::fs::write(dest, self.expand_str(&text))
                        .map_err(|err| Error::file_system(dest, "write", err))?;
                    return Ok(true);
                }
                Err(err) if err.kind() == std::io::ErrorKind::InvalidData => {
                    debug!(path = %relative.display(), "matched file is not UTF-8 text; copying unchanged");
                }
                Err(err) => return Err(Error::file_system(source, "read", err)),
            }
        }

        std::fs::copy(source, dest).map_err(|err| Error::file_system(dest, "copy", err))?;
        Ok(false)
    }

    /// Process every file under each source root into `out_root`.
    ///
    /// Roots are walked in order; when two roots contribute the same
    /// relative path, the later root's output overwrites the earlier one.
    pub fn expand_roots(&self, roots: &[PathBuf], out_root: &Path) -> Result<ExpandReport> {
        let mut report = ExpandReport::default();

        for root in roots {
            if !root.is_dir() {
                debug!(root = %root.display(), "source root does not exist; skipping");
                continue;
            }
            for entry in WalkDir::new(root).sort_by_file_name() {
                let entry = entry.map_err(|err| {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    match err.into_io_error() {
                        Some(io) => Error::file_system(&path, "walk", io),
                        None => Error::configuration(format!(
                            "walk cycle detected under '{}'",
                            path.display()
                        )),
                    }
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }
                let Ok(relative) = entry.path().strip_prefix(root) else {
                    continue;
                };
                let dest = out_root.join(relative);
                if self.expand_file(entry.path(), relative, &dest)? {
                    report.expanded += 1;
                } else {
                    report.copied += 1;
                }
            }
        }

        info!(
            pattern = %self.pattern,
            expanded = report.expanded,
            copied = report.copied,
            "resource expansion finished"
        );
        Ok(report)
    }
}
