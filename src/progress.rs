//! Per-package progress reporting for the remote lookup phase
//!
//! Every lookup is announced with a `checking <name>` info event. With the
//! bar enabled (`--progress`) an indicatif bar on stderr also counts
//! finished lookups and shows the package most recently started.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

const BAR_TEMPLATE: &str = "{spinner:.cyan} checking {msg:24!} [{bar:30.cyan/blue}] {pos}/{len}";

/// Progress of the remote lookups
pub struct Progress {
    show_bar: bool,
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Reporter that draws a bar when `show_bar` is set
    pub fn new(show_bar: bool) -> Self {
        Self {
            show_bar,
            bar: None,
        }
    }

    /// Reporter that only emits log events
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Begin the lookup phase for `packages` installed packages
    pub fn begin(&mut self, packages: usize) {
        if !self.show_bar || packages == 0 {
            return;
        }

        let bar = ProgressBar::new(packages as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        self.bar = Some(bar);
    }

    /// A lookup for `name` has started
    pub fn checking(&self, name: &str) {
        info!("checking {}", name);
        if let Some(bar) = &self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// A lookup has finished, whatever its outcome
    pub fn checked(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// End the lookup phase and erase the bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
