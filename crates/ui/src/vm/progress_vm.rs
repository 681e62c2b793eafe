use tracker_core::Progress;

/// Display values for the progress panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub label: String,
    pub remaining: usize,
    pub percent: u8,
    pub is_complete: bool,
}

impl ProgressVm {
    /// Inline style for the filled part of the bar.
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }
}

impl From<&Progress> for ProgressVm {
    fn from(progress: &Progress) -> Self {
        Self {
            label: progress.label(),
            remaining: progress.remaining(),
            percent: progress.percent(),
            is_complete: progress.is_complete(),
        }
    }
}
