//! Histogram table formatting: Markdown, terminal-rendered Markdown, CSV.

use std::fmt::Write as _;
use std::io::IsTerminal;

use greyscope_core::{GREY_SCALE, Histogram, bucket_range};

/// Builds the Markdown histogram table.
///
/// Rows with a zero count are skipped when `hide_zero` is set (after
/// `--top` masking, or with `--nonzero`).
#[must_use]
pub fn markdown(histogram: &Histogram, hide_zero: bool, total_pixels: u64) -> String {
    let mut out = String::new();
    out.push_str("# Color Histogram\n");
    out.push_str("||Color Name|Min Value|Max Value|Pixels|Percent|\n");
    out.push_str("|:--:|----:|----:|----:|-----:|------:|\n");

    for (i, &count) in histogram.bins().iter().enumerate() {
        if hide_zero && count == 0 {
            continue;
        }
        let (min, max) = bucket_range(i);
        let pct = histogram.percentage(i);
        let _ = writeln!(
            out,
            "|{i}|{}|{min:3}|{max:3}|{count}|{pct:.2}%|",
            GREY_SCALE[i]
        );
    }

    let _ = writeln!(
        out,
        "\n*Pixels considered: {} of {}*",
        histogram.considered(),
        total_pixels
    );
    out
}

/// Renders Markdown for the terminal.
///
/// Degrades to the raw Markdown text when `plain` is requested or stdout
/// is not a terminal.
#[must_use]
pub fn render(markdown: &str, plain: bool) -> String {
    if plain || !std::io::stdout().is_terminal() {
        return markdown.to_string();
    }
    termimad::MadSkin::default().term_text(markdown).to_string()
}

/// Comma-delimited rows, one per bucket: `index,name,min,max,count,percent`.
#[must_use]
pub fn csv_rows(histogram: &Histogram, hide_zero: bool) -> String {
    let mut out = String::new();
    for (i, &count) in histogram.bins().iter().enumerate() {
        if hide_zero && count == 0 {
            continue;
        }
        let (min, max) = bucket_range(i);
        let _ = writeln!(
            out,
            "{i},{},{min},{max},{count},{:.2}",
            GREY_SCALE[i],
            histogram.percentage(i)
        );
    }
    out
}
