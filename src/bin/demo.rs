//! Prints every foreground/background/attribute combination.
//!
//! Run with `cargo run --features cli --bin stylecode-demo`, optionally with
//! `--plain` to see the descriptors without styling.

use anyhow::Result;
use clap::Parser;
use console::{pad_str, Alignment, Term};
use stylecode::COLOR_NAMES;
use tracing_subscriber::EnvFilter;

const CELL_WIDTH: usize = 20;

const BACKGROUNDS: [&str; 9] = [
    "", ":black", ":red", ":green", ":yellow", ":blue", ":magenta", ":cyan", ":white",
];

/// Show all descriptor combinations supported by stylecode.
#[derive(Debug, Parser)]
#[command(name = "stylecode-demo", version)]
struct Args {
    /// Print descriptors without escape sequences
    #[arg(long)]
    plain: bool,
}

/// Returns the three rows of descriptor suffixes shown for background `bg`.
fn row_styles(bg: &str) -> [[String; 4]; 3] {
    let high_bg = format!("{}+h", bg);
    [
        [
            bg.to_string(),
            format!("+b{}", bg),
            format!("+bh{}", bg),
            format!("+u{}", bg),
        ],
        [
            format!("+uh{}", bg),
            format!("+B{}", bg),
            format!("+Bb{}", bg),
            high_bg.clone(),
        ],
        [
            format!("+b{}", high_bg),
            format!("+bh{}", high_bg),
            format!("+u{}", high_bg),
            format!("+uh{}", high_bg),
        ],
    ]
}

/// Renders one line of cells, each padded and styled with its own descriptor.
fn render_row(fg: &str, styles: &[String]) -> String {
    styles
        .iter()
        .map(|style| {
            let descriptor = format!("{}{}", fg, style);
            let cell = pad_str(&descriptor, CELL_WIDTH, Alignment::Left, None);
            stylecode::wrap(&cell, &descriptor)
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    stylecode::set_disabled(args.plain);

    let term = Term::stdout();
    for fg in COLOR_NAMES {
        for bg in BACKGROUNDS {
            for styles in row_styles(bg) {
                term.write_line(&render_row(fg, &styles))?;
            }
        }
    }
    Ok(())
}
