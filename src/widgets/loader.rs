//! Page loading overlay.
//!
//! The overlay starts visible and is hidden by whichever comes first: the
//! window load event (plus a short fade delay) or a hard fallback deadline
//! for pages whose load event never fires. Hiding starts the fade; once the
//! fade elapses the overlay is removed from the document entirely.
//!
//! A page whose document is already complete at init time hides immediately
//! (no fade delay before hiding, only before removal).

use crate::config::TimingConfig;
use crate::timing::Millis;

/// Overlay lifecycle. `Hidden` corresponds to the fade transition running;
/// `Removed` means the element is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    Visible,
    Hidden,
    Removed,
}

#[derive(Debug, Clone)]
pub struct Loader {
    phase: LoaderPhase,
    /// Hide scheduled by the load event, if it has fired.
    hide_at: Option<Millis>,
    fallback_at: Millis,
    remove_at: Option<Millis>,
    fade: Millis,
}

impl Loader {
    /// Set up the overlay. `document_complete` short-circuits straight to
    /// hiding, matching a page that finished loading before init ran.
    pub fn new(now: Millis, document_complete: bool, timing: &TimingConfig) -> Loader {
        let mut loader = Loader {
            phase: LoaderPhase::Visible,
            hide_at: None,
            fallback_at: now + timing.loader_fallback_ms,
            remove_at: None,
            fade: timing.loader_fade_ms,
        };
        if document_complete {
            loader.hide(now);
        }
        loader
    }

    /// The window load event fired; schedule the hide one fade later.
    /// Ignored once hiding has begun.
    pub fn window_loaded(&mut self, now: Millis) {
        if self.phase == LoaderPhase::Visible && self.hide_at.is_none() {
            self.hide_at = Some(now + self.fade);
        }
    }

    /// Process any deadlines that have elapsed by `now`.
    pub fn tick(&mut self, now: Millis) {
        if self.phase == LoaderPhase::Visible {
            let load_due = self.hide_at.is_some_and(|t| now >= t);
            if load_due || now >= self.fallback_at {
                self.hide(now);
            }
        }
        if self.phase == LoaderPhase::Hidden
            && self.remove_at.is_some_and(|t| now >= t)
        {
            self.phase = LoaderPhase::Removed;
        }
    }

    fn hide(&mut self, now: Millis) {
        self.phase = LoaderPhase::Hidden;
        self.remove_at = Some(now + self.fade);
    }

    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimingConfig;

    fn timing() -> TimingConfig {
        TimingConfig::default()
    }

    #[test]
    fn already_complete_document_hides_immediately() {
        let mut l = Loader::new(0, true, &timing());
        assert_eq!(l.phase(), LoaderPhase::Hidden);
        l.tick(499);
        assert_eq!(l.phase(), LoaderPhase::Hidden);
        l.tick(500);
        assert_eq!(l.phase(), LoaderPhase::Removed);
    }

    #[test]
    fn load_event_hides_after_fade_delay() {
        let mut l = Loader::new(0, false, &timing());
        l.window_loaded(1000);
        l.tick(1499);
        assert_eq!(l.phase(), LoaderPhase::Visible);
        l.tick(1500);
        assert_eq!(l.phase(), LoaderPhase::Hidden);
        l.tick(2000);
        assert_eq!(l.phase(), LoaderPhase::Removed);
    }

    #[test]
    fn fallback_fires_without_load_event() {
        let mut l = Loader::new(0, false, &timing());
        l.tick(2999);
        assert_eq!(l.phase(), LoaderPhase::Visible);
        l.tick(3000);
        assert_eq!(l.phase(), LoaderPhase::Hidden);
        l.tick(3500);
        assert_eq!(l.phase(), LoaderPhase::Removed);
    }

    #[test]
    fn whichever_comes_first_wins() {
        // Load fires late; the fallback beats it.
        let mut l = Loader::new(0, false, &timing());
        l.window_loaded(2900);
        l.tick(3000);
        assert_eq!(l.phase(), LoaderPhase::Hidden);

        // Load fires early; the hide lands before the fallback.
        let mut l = Loader::new(0, false, &timing());
        l.window_loaded(100);
        l.tick(600);
        assert_eq!(l.phase(), LoaderPhase::Hidden);
    }

    #[test]
    fn load_event_after_hide_is_ignored() {
        let mut l = Loader::new(0, true, &timing());
        l.window_loaded(100);
        l.tick(500);
        assert_eq!(l.phase(), LoaderPhase::Removed);
    }

    #[test]
    fn removal_waits_a_full_fade_after_fallback_hide() {
        let mut l = Loader::new(0, false, &timing());
        l.tick(3000);
        l.tick(3499);
        assert_eq!(l.phase(), LoaderPhase::Hidden);
        l.tick(3500);
        assert_eq!(l.phase(), LoaderPhase::Removed);
    }
}
