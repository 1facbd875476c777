//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! Display is information-first: the primary line for every page is its
//! site-relative path plus what assembly did to it (prefix variant, active
//! link, footer), with problems as indented context lines beneath.

use crate::assemble::{CheckReport, SiteReport};
use crate::nav::{NavView, RootPath};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn prefix_name(root: RootPath) -> &'static str {
    match root {
        RootPath::Root => "(root)",
        RootPath::ParentDir => "../",
    }
}

// ============================================================================
// inject
// ============================================================================

/// ```text
/// index.html  prefix (root)  active: Foundation  footer: yes
/// divisions/computing.html  prefix ../  active: -  footer: yes
///
/// Assembled 7 pages, copied 3 assets
/// ```
pub fn format_inject_output(report: &SiteReport) -> Vec<String> {
    let mut lines = Vec::new();
    for page in &report.pages {
        let active = if page.active_labels.is_empty() {
            "-".to_string()
        } else {
            page.active_labels.join(", ")
        };
        let footer = if page.footer_replaced { "yes" } else { "no" };
        lines.push(format!(
            "{}  prefix {}  active: {}  footer: {}",
            page.path,
            prefix_name(page.root),
            active,
            footer
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Assembled {} pages, copied {} assets",
        report.pages.len(),
        report.assets_copied
    ));
    lines
}

pub fn print_inject_output(report: &SiteReport) {
    for line in format_inject_output(report) {
        println!("{line}");
    }
}

// ============================================================================
// check
// ============================================================================

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut problems = 0;
    for page in &report.pages {
        lines.push(page.path.clone());
        if !page.has_body {
            lines.push(format!("{}missing <body> tag", indent(1)));
            problems += 1;
        }
        if !page.depth_served {
            lines.push(format!(
                "{}page depth outside the root/divisions layout; generated links will break",
                indent(1)
            ));
            problems += 1;
        }
        if !page.has_placeholder {
            lines.push(format!("{}no footer placeholder (footer skipped)", indent(1)));
        }
        for problem in &page.href_problems {
            lines.push(format!("{}{}", indent(1), problem));
            problems += 1;
        }
    }
    lines.push(String::new());
    if problems == 0 {
        lines.push(format!("Checked {} pages, no problems", report.pages.len()));
    } else {
        lines.push(format!(
            "Checked {} pages, {} problems",
            report.pages.len(),
            problems
        ));
    }
    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{line}");
    }
}

// ============================================================================
// links
// ============================================================================

/// ```text
/// side nav (prefix ../)
///     Foundation -> ../index.html
///     Pathways -> ../pathways.html
///         Computer Information Technology -> ../divisions/computing.html
/// bottom nav
///     Foundation -> ../index.html
/// ```
pub fn format_links_output(view: &NavView) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("side nav (prefix {})", prefix_name(view.root)));
    for entry in &view.side {
        lines.push(format!(
            "{}{}{} -> {}",
            indent(1),
            entry.link.label,
            if entry.link.active { " [active]" } else { "" },
            entry.link.href
        ));
        if let Some(panel) = &entry.dropdown {
            for child in &panel.links {
                lines.push(format!("{}{} -> {}", indent(2), child.label, child.href));
            }
        }
    }
    lines.push("bottom nav".to_string());
    for link in &view.bottom {
        lines.push(format!(
            "{}{}{} -> {}",
            indent(1),
            link.label,
            if link.active { " [active]" } else { "" },
            link.href
        ));
    }
    lines
}

pub fn print_links_output(view: &NavView) {
    for line in format_links_output(view) {
        println!("{line}");
    }
}

// ============================================================================
// form submission log
// ============================================================================

/// The page-side submission log line: field values of an accepted submit.
pub fn format_form_submission(values: &[(String, String)]) -> String {
    let pairs: Vec<String> = values
        .iter()
        .map(|(name, value)| format!("{name}={value:?}"))
        .collect();
    format!("Form submitted: {}", pairs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{PageCheck, PageReport};

    fn sample_report() -> SiteReport {
        SiteReport {
            pages: vec![
                PageReport {
                    path: "index.html".to_string(),
                    root: RootPath::Root,
                    active_labels: vec!["Foundation".to_string()],
                    footer_replaced: true,
                },
                PageReport {
                    path: "divisions/computing.html".to_string(),
                    root: RootPath::ParentDir,
                    active_labels: vec![],
                    footer_replaced: false,
                },
            ],
            assets_copied: 3,
        }
    }

    #[test]
    fn inject_output_one_line_per_page_plus_summary() {
        let lines = format_inject_output(&sample_report());
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("index.html"));
        assert!(lines[0].contains("active: Foundation"));
        assert!(lines[1].contains("prefix ../"));
        assert!(lines[1].contains("active: -"));
        assert_eq!(lines[3], "Assembled 2 pages, copied 3 assets");
    }

    #[test]
    fn check_output_clean() {
        let report = CheckReport {
            pages: vec![PageCheck {
                path: "index.html".to_string(),
                has_body: true,
                has_placeholder: true,
                depth_served: true,
                href_problems: vec![],
            }],
        };
        let lines = format_check_output(&report);
        assert_eq!(lines.last().unwrap(), "Checked 1 pages, no problems");
    }

    #[test]
    fn check_output_reports_problems_indented() {
        let report = CheckReport {
            pages: vec![PageCheck {
                path: "blog/deep/post.html".to_string(),
                has_body: false,
                has_placeholder: false,
                depth_served: false,
                href_problems: vec![],
            }],
        };
        let lines = format_check_output(&report);
        assert!(lines.iter().any(|l| l.starts_with("    missing <body>")));
        assert!(lines.iter().any(|l| l.contains("links will break")));
        assert!(lines.last().unwrap().contains("2 problems"));
    }

    #[test]
    fn links_output_shows_both_surfaces_and_children() {
        let view = crate::assemble::activated_view("/pathways.html");
        let lines = format_links_output(&view);
        assert!(lines[0].starts_with("side nav"));
        assert!(lines.iter().any(|l| l.contains("Pathways [active]")));
        assert!(
            lines
                .iter()
                .any(|l| l.contains("Computer Information Technology"))
        );
        assert!(lines.iter().any(|l| l == "bottom nav"));
    }

    #[test]
    fn form_submission_line() {
        let line = format_form_submission(&[
            ("name".to_string(), "Ayesha".to_string()),
            ("email".to_string(), "a@b.pk".to_string()),
        ]);
        assert_eq!(line, r#"Form submitted: name="Ayesha", email="a@b.pk""#);
    }
}
