//! Navigation generation and link state.
//!
//! Produces the two navigation surfaces every page carries — a compact bottom
//! bar for narrow viewports and a full side panel — from a single static
//! [`NavItem`] table, then derives per-page link state (active marking,
//! dropdown open flags) over the generated links.
//!
//! ## Generation, then activation
//!
//! [`NavView::build`] is the generation step: it expands the item table into
//! [`RenderedLink`]s for both surfaces with every href and asset reference
//! prefixed by one [`RootPath`] variant. [`NavView::activate`] is the
//! activation step: it flags the links whose target is the current page.
//! Activation needs the generated links to exist, so the two steps are
//! methods on the same value and can only run in that order.
//!
//! ## Root-path heuristic
//!
//! The site has exactly two page depths: the root, and one level down under
//! `divisions/`. A location containing the `/divisions/` segment gets the
//! `../` prefix on all hrefs and asset paths; everything else gets none.
//! This is a structural assumption, not a general relative-path computation —
//! a page nested any other way gets broken links. `campus-web check` reports
//! such pages rather than guessing.
//!
//! ## Icons
//!
//! Icon markup is looked up by string key in a fixed registry of inline SVG
//! fragments embedded at compile time. An unknown key renders an empty icon
//! slot; it is not an error.

use crate::active;
use maud::{Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};

/// Heading shown above every dropdown panel.
pub const DROPDOWN_TITLE: &str = "Academic Programs";

/// Site-relative path of the logo image referenced from the side panel.
pub const LOGO_ASSET: &str = "images/GCT-Logo.png";

// ============================================================================
// Root-path heuristic
// ============================================================================

/// The single prefix variant applied to every href and asset path on a page.
///
/// Exactly one variant is computed per page and applied uniformly; a wrong
/// variant breaks every link on that page at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootPath {
    /// Page lives at the site root; targets are used as-is.
    Root,
    /// Page lives one level down (under `divisions/`); targets get `../`.
    ParentDir,
}

impl RootPath {
    /// Pick the prefix variant for a location path.
    ///
    /// Locations are absolute-style (`/divisions/computing.html`). Presence
    /// of the `/divisions/` segment is the whole heuristic.
    pub fn for_location(location: &str) -> RootPath {
        if location.contains("/divisions/") {
            RootPath::ParentDir
        } else {
            RootPath::Root
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            RootPath::Root => "",
            RootPath::ParentDir => "../",
        }
    }

    /// Apply the prefix to a site-relative target.
    pub fn join(self, target: &str) -> String {
        format!("{}{}", self.prefix(), target)
    }
}

// ============================================================================
// Static navigation table
// ============================================================================

/// One entry in the static navigation table.
///
/// Immutable and ordered; the table is defined in code, not loaded from
/// content. Items with children additionally render a dropdown panel in the
/// side nav (the bottom bar shows only the primary link).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    /// Site-relative target page, e.g. `divisions/computing.html`.
    pub target: String,
    /// Icon registry key. Unknown keys render an empty icon slot.
    pub icon: String,
    /// Display label.
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildLink>,
}

/// A dropdown child: plain link, no icon, never active-marked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildLink {
    pub target: String,
    pub label: String,
}

fn item(target: &str, icon: &str, label: &str) -> NavItem {
    NavItem {
        target: target.to_string(),
        icon: icon.to_string(),
        label: label.to_string(),
        children: Vec::new(),
    }
}

fn child(target: &str, label: &str) -> ChildLink {
    ChildLink {
        target: target.to_string(),
        label: label.to_string(),
    }
}

/// The site's navigation table.
///
/// Order here is render order on both surfaces.
pub fn nav_items() -> Vec<NavItem> {
    vec![
        item("index.html", "home", "Foundation"),
        item("legacy.html", "info", "Legacy"),
        NavItem {
            target: "pathways.html".to_string(),
            icon: "book".to_string(),
            label: "Pathways".to_string(),
            children: vec![
                child("divisions/computing.html", "Computer Information Technology"),
                child("divisions/electrical.html", "Electrical Technology"),
                child("divisions/machinery.html", "Mechanical Technology"),
                child("divisions/construction.html", "Civil Technology"),
                child("divisions/circuits.html", "Electronics Technology"),
            ],
        },
        item("enrollment.html", "user-plus", "Enrollment"),
        item("chronicle.html", "camera", "Campus Life"),
        item("connect.html", "mail", "Connect"),
    ]
}

// ============================================================================
// Icon registry
// ============================================================================

const ICONS: &[(&str, &str)] = &[
    ("home", include_str!("../static/icons/home.svg")),
    ("info", include_str!("../static/icons/info.svg")),
    ("book", include_str!("../static/icons/book.svg")),
    ("user-plus", include_str!("../static/icons/user-plus.svg")),
    ("camera", include_str!("../static/icons/camera.svg")),
    ("mail", include_str!("../static/icons/mail.svg")),
    ("chevron", include_str!("../static/icons/chevron.svg")),
];

/// Look up an icon fragment by registry key.
///
/// The fragments are trusted compile-time assets, so they render unescaped.
pub fn icon_svg(key: &str) -> Option<PreEscaped<&'static str>> {
    ICONS.iter().find(|(k, _)| *k == key).map(|&(_, svg)| PreEscaped(svg))
}

// ============================================================================
// Rendered link state
// ============================================================================

/// A link generated into one of the nav surfaces.
///
/// Created once at generation time; the `active` flag is set in place by the
/// activation pass and never cleared within a page's lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedLink {
    pub href: String,
    pub label: String,
    pub icon: String,
    pub active: bool,
}

/// A side-nav entry: the primary link plus an optional dropdown panel.
#[derive(Debug, Clone, Serialize)]
pub struct SideEntry {
    pub link: RenderedLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropdown: Option<DropdownPanel>,
}

/// Dropdown state for one side-nav entry.
///
/// Each panel's `open` flag toggles independently — opening one never closes
/// a sibling. That is deliberate and differs from the FAQ accordion, which
/// enforces single-open across the group.
#[derive(Debug, Clone, Serialize)]
pub struct DropdownPanel {
    pub title: String,
    pub open: bool,
    pub links: Vec<PanelLink>,
}

/// A link inside a dropdown panel. Not a candidate for active marking.
#[derive(Debug, Clone, Serialize)]
pub struct PanelLink {
    pub href: String,
    pub label: String,
}

/// Both navigation surfaces for one page.
#[derive(Debug, Clone, Serialize)]
pub struct NavView {
    pub root: RootPath,
    pub side: Vec<SideEntry>,
    pub bottom: Vec<RenderedLink>,
    /// Prefixed logo asset reference, shown in the side panel.
    pub logo_href: String,
}

impl NavView {
    /// Generation: expand the item table into links for both surfaces.
    ///
    /// Every href gets the same root prefix. Dropdown panels start closed
    /// and no link starts active.
    pub fn build(items: &[NavItem], root: RootPath) -> NavView {
        let side = items
            .iter()
            .map(|item| SideEntry {
                link: rendered_link(item, root),
                dropdown: if item.children.is_empty() {
                    None
                } else {
                    Some(DropdownPanel {
                        title: DROPDOWN_TITLE.to_string(),
                        open: false,
                        links: item
                            .children
                            .iter()
                            .map(|c| PanelLink {
                                href: root.join(&c.target),
                                label: c.label.clone(),
                            })
                            .collect(),
                    })
                },
            })
            .collect();

        let bottom = items.iter().map(|item| rendered_link(item, root)).collect();

        NavView {
            root,
            side,
            bottom,
            logo_href: root.join(LOGO_ASSET),
        }
    }

    /// Activation: flag links whose target is the current page.
    ///
    /// One-way — flags are only ever set, matching the inactive→active
    /// transition happening once per page view. Dropdown children are not
    /// candidates, so division pages end up with no active link. Multiple
    /// matching links (side and bottom carry the same targets) all activate.
    pub fn activate(&mut self, current_page: &str) {
        for entry in &mut self.side {
            if active::matches(&entry.link.href, current_page) {
                entry.link.active = true;
            }
        }
        for link in &mut self.bottom {
            if active::matches(&link.href, current_page) {
                link.active = true;
            }
        }
    }

    /// Flip one dropdown's open state. Indices without a dropdown (or out of
    /// range) are ignored.
    pub fn toggle_dropdown(&mut self, index: usize) {
        if let Some(panel) = self
            .side
            .get_mut(index)
            .and_then(|entry| entry.dropdown.as_mut())
        {
            panel.open = !panel.open;
        }
    }

    /// Indices of side entries whose dropdown is currently open.
    pub fn open_dropdowns(&self) -> Vec<usize> {
        self.side
            .iter()
            .enumerate()
            .filter(|(_, e)| e.dropdown.as_ref().is_some_and(|d| d.open))
            .map(|(i, _)| i)
            .collect()
    }

    /// Every href and asset reference this view generated, in render order.
    /// Used by the audit.
    pub fn hrefs(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in &self.side {
            out.push(&entry.link.href);
            if let Some(panel) = &entry.dropdown {
                out.extend(panel.links.iter().map(|l| l.href.as_str()));
            }
        }
        out.extend(self.bottom.iter().map(|l| l.href.as_str()));
        out.push(&self.logo_href);
        out
    }

    /// Render both surfaces as one fragment, bottom bar first, for insertion
    /// at the start of the document body.
    pub fn render(&self) -> Markup {
        html! {
            nav.bottom-nav aria-label="Mobile Navigation" {
                @for link in &self.bottom {
                    a.bottom-nav__link.bottom-nav__link--active[link.active] href=(link.href) {
                        span.bottom-nav__icon {
                            @if let Some(svg) = icon_svg(&link.icon) { (svg) }
                        }
                        span.bottom-nav__label { (link.label) }
                    }
                }
            }
            nav.side-nav aria-label="Main Navigation" {
                div.side-nav__logo {
                    img.side-nav__logo-img src=(self.logo_href) alt="GCT Logo";
                }
                div.side-nav__menu {
                    @for entry in &self.side {
                        @if let Some(panel) = &entry.dropdown {
                            div.side-nav__item.side-nav__item--has-dropdown.side-nav__item--open[panel.open] {
                                (side_link(&entry.link, true))
                                div.side-nav__dropdown-panel {
                                    div.side-nav__dropdown-title { (panel.title) }
                                    @for child in &panel.links {
                                        a.side-nav__dropdown-link href=(child.href) { (child.label) }
                                    }
                                }
                            }
                        } @else {
                            (side_link(&entry.link, false))
                        }
                    }
                }
            }
        }
    }
}

fn rendered_link(item: &NavItem, root: RootPath) -> RenderedLink {
    RenderedLink {
        href: root.join(&item.target),
        label: item.label.clone(),
        icon: item.icon.clone(),
        active: false,
    }
}

fn side_link(link: &RenderedLink, dropdown_toggle: bool) -> Markup {
    html! {
        a.side-nav__link.side-nav__link--dropdown[dropdown_toggle].side-nav__link--active[link.active] href=(link.href) {
            span.side-nav__icon {
                @if let Some(svg) = icon_svg(&link.icon) { (svg) }
            }
            span.side-nav__label { (link.label) }
        }
    }
}

// ============================================================================
// Href audit
// ============================================================================

/// Problems with a view's generated hrefs, empty when well-formed.
///
/// Checks the testable contract: every href is syntactically sound and
/// carries exactly the view's prefix variant — uniformly, no stragglers.
pub fn audit_hrefs(view: &NavView) -> Vec<String> {
    let mut problems = Vec::new();
    for href in view.hrefs() {
        if href.is_empty() || href.contains("//") || href.contains(char::is_whitespace) {
            problems.push(format!("malformed href: {href:?}"));
            continue;
        }
        match view.root {
            RootPath::ParentDir => {
                if !href.starts_with("../") {
                    problems.push(format!("missing ../ prefix: {href:?}"));
                }
            }
            RootPath::Root => {
                if href.starts_with("../") {
                    problems.push(format!("unexpected ../ prefix: {href:?}"));
                }
            }
        }
    }
    problems
}
