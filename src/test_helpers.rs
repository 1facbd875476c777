//! Shared test utilities for the campus-web test suite.
//!
//! Shell builders for assembly tests plus lookup helpers over [`NavView`]
//! that panic with a clear message on miss.

use crate::nav::{NavView, SideEntry};

/// A minimal page shell with a footer placeholder.
pub fn shell_with_placeholder(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <main><h1>{title}</h1></main>\n\
         <div id=\"footer-placeholder\"></div>\n\
         </body>\n</html>\n"
    )
}

/// A minimal page shell without a footer placeholder.
pub fn shell_bare(title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{title}</title></head>\n<body>\n\
         <main><h1>{title}</h1></main>\n\
         </body>\n</html>\n"
    )
}

/// Find a side-nav entry by label. Panics if not found.
pub fn find_side_entry<'a>(view: &'a NavView, label: &str) -> &'a SideEntry {
    view.side
        .iter()
        .find(|e| e.link.label == label)
        .unwrap_or_else(|| {
            let labels: Vec<&str> = view.side.iter().map(|e| e.link.label.as_str()).collect();
            panic!("side entry '{label}' not found. Available: {labels:?}")
        })
}

/// Labels of active side-nav links, in order.
pub fn active_side_labels(view: &NavView) -> Vec<&str> {
    view.side
        .iter()
        .filter(|e| e.link.active)
        .map(|e| e.link.label.as_str())
        .collect()
}
