//! Page shell assembly.
//!
//! Splices generated fragments into static page shells and writes out the
//! finished site. This is the build-time equivalent of the original site's
//! on-load DOM insertion, and it runs the two nav phases in their required
//! order: generation first (`NavView::build`), then activation over the
//! generated links, then rendering into the shell. Each shell is transformed
//! exactly once per build.
//!
//! ## Shell contract
//!
//! - A `<body>` tag must exist; the combined nav fragment is inserted
//!   directly after it. A shell without one is an error, reported per file.
//! - Zero or one element with `id="footer-placeholder"` may exist; it is
//!   replaced wholesale by the footer. Absence is tolerated (no footer).
//! - The back-to-top button is appended just before `</body>`.
//!
//! Everything else in the shell passes through untouched.

use crate::active;
use crate::config::{ConfigError, SiteConfig};
use crate::footer;
use crate::nav::{self, NavView, RootPath};
use crate::widgets::scroll;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("page shell has no <body> tag: {0}")]
    MissingBody(PathBuf),
}

/// Placeholder element id the footer replaces.
pub const FOOTER_PLACEHOLDER_ID: &str = "footer-placeholder";

/// Generated fragments for one page, ready to splice.
#[derive(Debug)]
pub struct Fragments {
    pub nav: String,
    pub footer: String,
    pub back_to_top: String,
}

impl Fragments {
    /// Build all fragments for one location: root-path selection, nav
    /// generation, activation against the location's page, footer, button.
    pub fn for_location(location: &str, year: i32, config: &SiteConfig) -> Fragments {
        Fragments::from_view(&activated_view(location), year, config)
    }

    /// Render fragments from an already-built view.
    pub fn from_view(view: &NavView, year: i32, config: &SiteConfig) -> Fragments {
        Fragments {
            nav: view.render().into_string(),
            footer: footer::render_footer(view.root, year, &config.identity).into_string(),
            back_to_top: scroll::render_back_to_top(false).into_string(),
        }
    }
}

/// Generation then activation for one location, in that order.
pub fn activated_view(location: &str) -> NavView {
    let mut view = NavView::build(&nav::nav_items(), RootPath::for_location(location));
    view.activate(active::current_page(location));
    view
}

/// Result of splicing one shell.
#[derive(Debug)]
pub struct SpliceOutcome {
    pub html: String,
    /// Whether a footer placeholder was found and replaced.
    pub footer_replaced: bool,
}

/// Splice fragments into a shell. `None` when the shell has no `<body>` tag;
/// the caller reports the offending file.
pub fn splice_shell(shell: &str, fragments: &Fragments) -> Option<SpliceOutcome> {
    let body_open = shell.find("<body")?;
    let body_end = body_open + shell[body_open..].find('>')? + 1;

    let mut html = String::with_capacity(shell.len() + fragments.nav.len());
    html.push_str(&shell[..body_end]);
    html.push_str(&fragments.nav);
    html.push_str(&shell[body_end..]);

    let footer_replaced = match placeholder_span(&html) {
        Some((start, end)) => {
            html.replace_range(start..end, &fragments.footer);
            true
        }
        None => false,
    };

    match html.rfind("</body>") {
        Some(close) => html.insert_str(close, &fragments.back_to_top),
        None => html.push_str(&fragments.back_to_top),
    }

    Some(SpliceOutcome {
        html,
        footer_replaced,
    })
}

/// Byte span of the footer placeholder element, opening `<` through the end
/// of its `</div>`. The placeholder is an empty div, so the first close tag
/// after the id attribute ends it.
fn placeholder_span(html: &str) -> Option<(usize, usize)> {
    let id_attr = format!(r#"id="{FOOTER_PLACEHOLDER_ID}""#);
    let id_pos = html.find(&id_attr)?;
    let start = html[..id_pos].rfind('<')?;
    let close_rel = html[id_pos..].find("</div>")?;
    Some((start, id_pos + close_rel + "</div>".len()))
}

// ============================================================================
// Site-level build
// ============================================================================

/// Per-page record in the build report.
#[derive(Debug)]
pub struct PageReport {
    /// Site-relative shell path, e.g. `divisions/computing.html`.
    pub path: String,
    pub root: RootPath,
    /// Labels of links the activation pass marked.
    pub active_labels: Vec<String>,
    pub footer_replaced: bool,
}

/// What a site build produced.
#[derive(Debug)]
pub struct SiteReport {
    pub pages: Vec<PageReport>,
    /// Non-HTML files copied through unchanged.
    pub assets_copied: usize,
}

/// Assemble every shell under `source` into `output`.
///
/// `.html` files are spliced; `config.toml` is consumed by the config layer
/// and not copied; everything else is copied through byte-for-byte. The
/// output tree mirrors the source tree.
pub fn inject_site(
    source: &Path,
    output: &Path,
    config: &SiteConfig,
    year: i32,
) -> Result<SiteReport, AssembleError> {
    let mut pages = Vec::new();
    let mut assets_copied = 0;

    fs::create_dir_all(output)?;

    for entry in WalkDir::new(source) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Ok(rel) = path.strip_prefix(source) else {
            continue;
        };
        let rel_str = rel.to_string_lossy().replace('\\', "/");
        if rel_str == "config.toml" {
            continue;
        }

        let dest = output.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if rel_str.ends_with(".html") {
            let shell = fs::read_to_string(path)?;
            let location = format!("/{rel_str}");
            let view = activated_view(&location);
            let fragments = Fragments::from_view(&view, year, config);
            let outcome = splice_shell(&shell, &fragments)
                .ok_or_else(|| AssembleError::MissingBody(path.to_path_buf()))?;
            fs::write(&dest, &outcome.html)?;
            pages.push(PageReport {
                path: rel_str,
                root: view.root,
                active_labels: view
                    .side
                    .iter()
                    .filter(|e| e.link.active)
                    .map(|e| e.link.label.clone())
                    .collect(),
                footer_replaced: outcome.footer_replaced,
            });
        } else {
            fs::copy(path, &dest)?;
            assets_copied += 1;
        }
    }

    Ok(SiteReport {
        pages,
        assets_copied,
    })
}

// ============================================================================
// Site check
// ============================================================================

/// Per-page record in the check report.
#[derive(Debug)]
pub struct PageCheck {
    pub path: String,
    pub has_body: bool,
    pub has_placeholder: bool,
    /// Whether the page's depth is one the root-path heuristic can serve
    /// (root level, or exactly one level down under `divisions/`).
    pub depth_served: bool,
    /// Problems from the generated-href audit, empty when clean.
    pub href_problems: Vec<String>,
}

#[derive(Debug)]
pub struct CheckReport {
    pub pages: Vec<PageCheck>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.pages
            .iter()
            .all(|p| p.has_body && p.depth_served && p.href_problems.is_empty())
    }
}

/// Validate shells without writing output.
pub fn check_site(source: &Path) -> Result<CheckReport, AssembleError> {
    let mut pages = Vec::new();

    for entry in WalkDir::new(source) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Ok(rel) = path.strip_prefix(source) else {
            continue;
        };
        let rel_str = rel.to_string_lossy().replace('\\', "/");
        if !rel_str.ends_with(".html") {
            continue;
        }

        let shell = fs::read_to_string(path)?;
        let location = format!("/{rel_str}");
        let root = RootPath::for_location(&location);
        let view = NavView::build(&nav::nav_items(), root);

        let depth = rel_str.matches('/').count();
        let depth_served = match root {
            RootPath::Root => depth == 0,
            RootPath::ParentDir => depth == 1,
        };

        pages.push(PageCheck {
            path: rel_str,
            has_body: shell.contains("<body"),
            has_placeholder: shell.contains(&format!(r#"id="{FOOTER_PLACEHOLDER_ID}""#)),
            depth_served,
            href_problems: nav::audit_hrefs(&view),
        });
    }

    Ok(CheckReport { pages })
}
