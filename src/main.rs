use campus_web::{assemble, config, output};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once; the string has to outlive clap anyway.
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "campus-web")]
#[command(about = "Assemble navigation, footer, and widget markup into the campus site")]
#[command(long_about = "\
Assemble navigation, footer, and widget markup into the campus site

Page shells are plain HTML files; assembly prepends the generated navigation
surfaces after <body>, replaces the footer placeholder, and appends the
back-to-top button, with every link prefixed for the page's depth and the
current page's nav link marked active.

Site structure:

  site/
  ├── config.toml                # Identity/timing overrides (optional)
  ├── index.html                 # Page shells at the root...
  ├── legacy.html
  ├── divisions/                 # ...or exactly one level down
  │   ├── computing.html
  │   └── electrical.html
  └── images/                    # Assets, copied through unchanged
      └── GCT-Logo.png

Pages live at the root or exactly one level down under divisions/ — the
link prefix heuristic supports nothing deeper. 'campus-web check' flags
pages outside that layout.

Run 'campus-web gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site source directory (page shells, assets, config.toml)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble every page shell into the output directory
    Inject,
    /// Print the combined nav + footer markup for one location
    Render {
        /// Absolute-style location, e.g. /divisions/computing.html
        #[arg(long)]
        location: String,
    },
    /// Print the generated link inventory for one location
    Links {
        /// Absolute-style location, e.g. /index.html
        #[arg(long)]
        location: String,
        /// Emit JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },
    /// Validate page shells without writing output
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Inject => {
            let config = config::load_config(&cli.source)?;
            let year = chrono::Local::now().year();
            let report = assemble::inject_site(&cli.source, &cli.output, &config, year)?;
            output::print_inject_output(&report);
            println!("Site assembled at {}", cli.output.display());
        }
        Command::Render { location } => {
            let config = config::load_config(&cli.source)?;
            let year = chrono::Local::now().year();
            let fragments = assemble::Fragments::for_location(&location, year, &config);
            println!("{}", fragments.nav);
            println!("{}", fragments.footer);
        }
        Command::Links { location, json } => {
            let view = assemble::activated_view(&location);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                output::print_links_output(&view);
            }
        }
        Command::Check => {
            let report = assemble::check_site(&cli.source)?;
            output::print_check_output(&report);
            if !report.is_clean() {
                return Err("site check found problems".into());
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
