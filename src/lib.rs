//! # campus-web
//!
//! Navigation, footer, and page-widget engine for the GCT Bhakkar campus
//! site. Page shells are plain HTML; this crate generates the markup every
//! page shares (two navigation surfaces, footer, back-to-top button), splices
//! it into the shells at build time, and models the site's interactive
//! widgets as deterministic state machines.
//!
//! # Architecture: Two Independent Units
//!
//! The crate mirrors the site's runtime split:
//!
//! - **Navigation/footer generation** ([`nav`], [`footer`], [`active`],
//!   [`assemble`]): expands a static item table into per-page markup, then
//!   derives link state. Generation always completes before activation —
//!   [`nav::NavView::build`] produces the links that
//!   [`nav::NavView::activate`] marks, so the ordering is structural, not
//!   scheduled.
//! - **Page widgets** ([`page`], [`widgets`], [`forms`]): loader, counters,
//!   accordion, carousel, scroll behavior, and form validation, each wired
//!   independently from a declarative [`page::PageSpec`]. Widgets share no
//!   state; a shell without a widget's host element simply gets no instance.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`nav`] | Static nav table, icon registry, root-path heuristic, nav surfaces |
//! | [`footer`] | Footer markup (about, links, divisions, contact, copyright) |
//! | [`active`] | Current-page derivation and final-segment link matching |
//! | [`assemble`] | Shell splicing and the site-level build/check walks |
//! | [`page`] | Per-page widget bootstrap from an explicit context + spec |
//! | [`widgets`] | Loader, counter, carousel, accordion, scroll state machines |
//! | [`forms`] | Required-field validation and submission outcomes |
//! | [`config`] | `config.toml` loading, merging, validation |
//! | [`timing`] | Injected millisecond clock and the easing curve |
//! | [`output`] | CLI output formatting (pure `format_*`, printing `print_*`) |
//!
//! # Design Decisions
//!
//! ## Injected Clock Over Wall Time
//!
//! Every time-driven behavior (counter easing, carousel rotation, loader
//! deadlines) takes the current instant as a [`timing::Millis`] argument.
//! Tests drive exact instant sequences and assert exact displays — there is
//! no sleeping, no flakiness, and no wall clock anywhere in the library.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked, type-safe, auto-escaped, no runtime template files. Icon SVGs
//! are the one exception — trusted compile-time assets rendered unescaped
//! through an explicit registry.
//!
//! ## The Two-Depth Assumption
//!
//! Link prefixes come from a deliberate heuristic, not a general relative
//! path computation: pages live at the site root or exactly one level down
//! under `divisions/`, so the prefix is `../` or nothing. This matches the
//! site's actual layout and fails loudly in `check` for anything deeper,
//! rather than silently generalizing to a layout the site does not have.
//!
//! ## Widgets as Plain State Machines
//!
//! No DOM abstraction layer: a widget owns exactly the flags the page's
//! styling reads (open, active, visible, display text) and exposes the
//! events the page forwards (clicks, scroll offsets, visibility ratios).
//! What remains is small, synchronous, and exhaustively testable.

pub mod active;
pub mod assemble;
pub mod config;
pub mod footer;
pub mod forms;
pub mod nav;
pub mod output;
pub mod page;
pub mod timing;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_helpers;
