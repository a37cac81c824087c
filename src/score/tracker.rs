//! Running score with an optional display binding.

use crate::host::ScoreDisplay;

/// Accumulates points for one session.
///
/// Constructed once by the host and handed to the director by `&mut` on
/// every call that can score, so there is no global instance.
pub struct ScoreTracker {
    total: u32,
    display: Option<Box<dyn ScoreDisplay>>,
}

impl ScoreTracker {
    /// Create a tracker that pushes every change to `display`.
    #[must_use]
    pub fn new(display: Box<dyn ScoreDisplay>) -> Self {
        let mut tracker = Self {
            total: 0,
            display: Some(display),
        };
        tracker.refresh_display();
        tracker
    }

    /// Create a tracker with nothing to show the score on.
    ///
    /// The game still runs; the score is just not visible.
    #[must_use]
    pub fn unbound() -> Self {
        log::error!("Score display is not bound; score will not be shown");
        Self {
            total: 0,
            display: None,
        }
    }

    /// Attach (or replace) the display and push the current text to it.
    pub fn bind_display(&mut self, display: Box<dyn ScoreDisplay>) {
        self.display = Some(display);
        self.refresh_display();
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.display.is_some()
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Text shown to the player.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("Score: {}", self.total)
    }

    /// Add points and update the display. Returns the new total.
    pub fn add_score(&mut self, points: u32) -> u32 {
        self.total = self.total.saturating_add(points);
        self.refresh_display();
        self.total
    }

    fn refresh_display(&mut self) {
        let text = self.display_text();
        if let Some(display) = self.display.as_mut() {
            display.show_score(&text);
        }
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::unbound()
    }
}

impl std::fmt::Debug for ScoreTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreTracker")
            .field("total", &self.total)
            .field("bound", &self.display.is_some())
            .finish()
    }
}
