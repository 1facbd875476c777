//! Page bootstrap.
//!
//! Wires up the independent widgets a page hosts, once per page view. Each
//! widget instance is created only when the shell actually contains its host
//! element — a missing element is a silent skip, never an error — and no
//! widget sees another's state. The navigation/footer generator is a separate
//! unit entirely; the two compose only through the assembled document.

use crate::config::SiteConfig;
use crate::forms::{Form, FormSpec, SubmitOutcome};
use crate::timing::Millis;
use crate::widgets::accordion::Accordion;
use crate::widgets::carousel::Carousel;
use crate::widgets::counter::{Counter, CounterSpec};
use crate::widgets::loader::Loader;
use crate::widgets::scroll::BackToTop;
use serde::{Deserialize, Serialize};

/// Explicit page environment, in place of ambient document/window globals.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Absolute-style location path, e.g. `/divisions/computing.html`.
    pub location: String,
    /// Clock reading at init.
    pub now: Millis,
    /// Whether the document had already finished loading at init.
    pub document_complete: bool,
}

/// What the host shell contains, as a declarative schema.
///
/// Zero counts and empty vectors mean the corresponding elements are absent
/// from the shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSpec {
    pub has_loader: bool,
    pub counters: Vec<CounterSpec>,
    pub faq_items: usize,
    pub slides: usize,
    pub forms: Vec<FormSpec>,
}

/// One page's widget instances.
pub struct Page {
    pub loader: Option<Loader>,
    pub counters: Vec<Counter>,
    pub faq: Option<Accordion>,
    pub carousel: Option<Carousel>,
    pub forms: Vec<Form>,
    pub back_to_top: BackToTop,
}

impl Page {
    /// Initialize every widget the shell hosts.
    pub fn init(ctx: &PageContext, spec: &PageSpec, config: &SiteConfig) -> Page {
        let timing = &config.timing;
        Page {
            loader: spec
                .has_loader
                .then(|| Loader::new(ctx.now, ctx.document_complete, timing)),
            counters: spec
                .counters
                .iter()
                .map(|c| {
                    Counter::new(
                        c,
                        timing.counter_duration_ms,
                        config.behavior.counter_visibility,
                    )
                })
                .collect(),
            faq: (spec.faq_items > 0).then(|| Accordion::new(spec.faq_items)),
            carousel: Carousel::new(spec.slides, timing.carousel_interval_ms, ctx.now),
            forms: spec.forms.iter().map(Form::new).collect(),
            back_to_top: BackToTop::new(config.behavior.back_to_top_threshold),
        }
    }

    /// Pump every time-driven widget to `now`. Stands in for the page's
    /// frame callbacks and interval timers firing.
    pub fn tick(&mut self, now: Millis) {
        if let Some(loader) = &mut self.loader {
            loader.tick(now);
        }
        if let Some(carousel) = &mut self.carousel {
            carousel.tick(now);
        }
        for counter in &mut self.counters {
            counter.frame(now);
        }
    }

    /// The window load event fired.
    pub fn window_loaded(&mut self, now: Millis) {
        if let Some(loader) = &mut self.loader {
            loader.window_loaded(now);
        }
    }

    /// A counter element's visibility changed.
    pub fn observe_counter(&mut self, index: usize, ratio: f64, now: Millis) {
        if let Some(counter) = self.counters.get_mut(index) {
            counter.observe(ratio, now);
        }
    }

    /// Click on FAQ item `i`.
    pub fn click_faq(&mut self, i: usize) {
        if let Some(faq) = &mut self.faq {
            faq.click(i);
        }
    }

    /// Click on carousel dot `i`.
    pub fn click_dot(&mut self, i: usize) {
        if let Some(carousel) = &mut self.carousel {
            carousel.go_to(i);
        }
    }

    /// Submit form `index`. `None` when the page has no such form.
    pub fn submit_form(&mut self, index: usize) -> Option<SubmitOutcome> {
        self.forms.get_mut(index).map(Form::submit)
    }

    /// The window's scroll offset changed.
    pub fn on_scroll(&mut self, scroll_y: u32) {
        self.back_to_top.on_scroll(scroll_y);
    }
}
