use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use console::style;
use walkdir::WalkDir;

use crate::constants::discovery::{GRAPH_FILE_SUFFIXES, SKIPPED_DIRS};
use crate::progress::ProgressReporter;

/// Finds graph files under the paths given on the command line
pub struct GraphDiscovery {
    discovered: BTreeSet<PathBuf>,
}

impl Default for GraphDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphDiscovery {
    pub fn new() -> Self {
        Self {
            discovered: BTreeSet::new(),
        }
    }

    /// Resolve files, directories and glob patterns into a sorted,
    /// de-duplicated list of graph files
    pub fn discover_all(
        mut self,
        paths: &[PathBuf],
        progress: Option<&ProgressReporter>,
    ) -> Vec<PathBuf> {
        for path in paths {
            let pattern = path.to_string_lossy();
            if is_glob_pattern(&pattern) {
                self.discover_glob(&pattern, progress);
            } else {
                self.discover_path(path, true, progress);
            }
        }

        self.discovered.into_iter().collect()
    }

    fn discover_glob(&mut self, pattern: &str, progress: Option<&ProgressReporter>) {
        match glob::glob(pattern) {
            Ok(paths) => {
                for path in paths.flatten() {
                    self.discover_path(&path, false, progress);
                }
            }
            Err(e) => {
                eprintln!(
                    "{} Invalid glob pattern '{}': {}",
                    style("⚠").yellow(),
                    pattern,
                    e
                );
            }
        }
    }

    /// `explicit` files are taken as-is whatever their name; files reached
    /// by walking or globbing must carry a graph suffix
    fn discover_path(&mut self, path: &Path, explicit: bool, progress: Option<&ProgressReporter>) {
        if !path.exists() {
            eprintln!(
                "{} Path '{}' does not exist",
                style("⚠").yellow(),
                path.display()
            );
            return;
        }

        if path.is_file() {
            if explicit || is_graph_file(path) {
                self.record(path.to_path_buf(), progress);
            }
            return;
        }

        let graph_files = WalkDir::new(path)
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !SKIPPED_DIRS.iter().any(|skipped| e.file_name() == *skipped)
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_graph_file(e.path()))
            .map(|e| e.into_path());

        for file in graph_files {
            self.record(file, progress);
        }
    }

    fn record(&mut self, path: PathBuf, progress: Option<&ProgressReporter>) {
        if let Some(p) = progress {
            p.found_graph_file(&path);
        }
        self.discovered.insert(path);
    }
}

pub fn is_graph_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| {
            GRAPH_FILE_SUFFIXES
                .iter()
                .any(|suffix| name.len() > suffix.len() && name.ends_with(suffix))
        })
}

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
