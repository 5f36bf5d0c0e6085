use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Interactive stderr feedback for multi-file work
pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// Reporter for interactive terminals only
    pub fn for_stderr() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        let bar_style = ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(bar_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let mut frames = SPINNER_FRAMES.to_vec();
        frames.push("✓");
        let spinner_style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&frames);
        pb.set_style(spinner_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_compass_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Discovering graph files...", style("🔍").cyan());
        let spinner = self.create_spinner("Walking directories...");
        self.current_bar = Some(spinner);
    }

    pub fn found_graph_file(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Found: {}", path.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Found: {}... ",
                style(self.next_compass_frame()).cyan(),
                style(path.display()).dim()
            );
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No graph files found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Discovery complete: found {} graph {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("file", count)
            );
        }
    }

    pub fn start_checking(&mut self, total_graphs: usize) -> ProgressBar {
        let pb = self.create_progress_bar(total_graphs as u64, "Checking graphs");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn update_check_progress(&self, graph_name: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Checking graph: {graph_name}"));
            pb.inc(1);
        }
    }

    pub fn finish_checking(&mut self, cyclic: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }

        if cyclic == 0 {
            eprintln!(
                "{} No cycles detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found cycles in {} {}",
                style("⚠").yellow().bold(),
                style(cyclic).red().bold(),
                pluralize("graph", cyclic)
            );
        }
    }
}
