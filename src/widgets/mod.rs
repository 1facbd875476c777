//! Page widgets as explicit state machines.
//!
//! Each widget owns its own flags and deadlines and is driven by events
//! (clicks, scroll positions, visibility ratios) and by the injected
//! millisecond clock ([`crate::timing::Millis`]). Widgets never see each
//! other: the page bootstrap wires them independently, and a missing host
//! element simply means no instance.

pub mod accordion;
pub mod carousel;
pub mod counter;
pub mod loader;
pub mod scroll;
