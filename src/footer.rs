//! Footer generation.
//!
//! Renders the four-column informational footer (about, quick links,
//! divisions, contact) plus the bottom bar with the copyright line and
//! affiliation credit. The markup replaces a designated placeholder element
//! in the page shell; a shell without the placeholder simply gets no footer.
//!
//! The link tables here are separate from the navigation table on purpose:
//! the footer uses shorter labels for the same targets (Programs instead of
//! Pathways, Admissions instead of Enrollment).

use crate::config::IdentityConfig;
use crate::nav::RootPath;
use maud::{Markup, html};

/// Quick-links column: `(target, label)`, labels differ from the nav table.
const QUICK_LINKS: &[(&str, &str)] = &[
    ("index.html", "Home"),
    ("legacy.html", "Legacy"),
    ("pathways.html", "Programs"),
    ("enrollment.html", "Admissions"),
    ("chronicle.html", "Campus Life"),
    ("connect.html", "Contact Us"),
];

/// Divisions column: short names for the five division pages.
const DIVISION_LINKS: &[(&str, &str)] = &[
    ("divisions/computing.html", "Computer IT"),
    ("divisions/electrical.html", "Electrical"),
    ("divisions/machinery.html", "Mechanical"),
    ("divisions/construction.html", "Civil"),
    ("divisions/circuits.html", "Electronics"),
];

/// Render the footer for one page.
///
/// `root` is the page's prefix variant, applied to every link exactly as the
/// nav generator does. `year` is the calendar year for the copyright line;
/// the CLI stamps the current year, tests pass a fixed one.
pub fn render_footer(root: RootPath, year: i32, identity: &IdentityConfig) -> Markup {
    html! {
        footer.footer {
            div.container {
                div.footer__grid {
                    div.footer__column {
                        h4 { "About " (identity.short_name) }
                        p.footer__text { (identity.about) }
                    }
                    div.footer__column {
                        h4 { "Quick Links" }
                        ul.footer__links {
                            @for (target, label) in QUICK_LINKS {
                                li { a href=(root.join(target)) { (label) } }
                            }
                        }
                    }
                    div.footer__column {
                        h4 { "Divisions" }
                        ul.footer__links {
                            @for (target, label) in DIVISION_LINKS {
                                li { a href=(root.join(target)) { (label) } }
                            }
                        }
                    }
                    div.footer__column {
                        h4 { "Contact" }
                        p.footer__text {
                            @for line in &identity.address {
                                (line) br;
                            }
                            br;
                            "Phone: " (identity.phone) br;
                            "Email: " (identity.email)
                        }
                    }
                }
                div.footer__bottom {
                    p.footer__copyright {
                        "© " (year) " " (identity.name) ". All rights reserved."
                    }
                    p.footer__credits {
                        "Affiliated with " strong { (identity.affiliation) }
                    }
                }
            }
        }
    }
}
