//! Text rendering of the visible quote set.
//!
//! Thin presentation layer over the pipeline output: an aligned table or a
//! bar chart of prices with the summary statistics underneath. Everything
//! here formats strings only; no pipeline logic lives in this module.

use quote_core::{Quote, SummaryStats};

const BAR_WIDTH: usize = 40;

/// Render the visible set as an aligned text table.
pub fn render_table(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes match the current search.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:<26} {:>12} {:>10} {:>9} {:>15}\n",
        "SYMBOL", "NAME", "PRICE", "CHANGE", "CHANGE %", "VOLUME"
    ));
    out.push_str(&"-".repeat(86));
    out.push('\n');

    for quote in quotes {
        out.push_str(&format!(
            "{:<8} {:<26} {:>12} {:>10} {:>8}% {:>15}\n",
            quote.symbol,
            truncate(&quote.name, 26),
            format!("${:.2}", quote.price),
            format!("{:+.2}", quote.change),
            format!("{:+.2}", quote.change_percent),
            format_volume(quote.volume),
        ));
    }
    out
}

/// Render the visible set as price bars plus the summary line.
pub fn render_chart(quotes: &[Quote], stats: &SummaryStats) -> String {
    if quotes.is_empty() {
        return "No quotes match the current search.\n".to_string();
    }

    let max_price = quotes.iter().map(|q| q.price).fold(0.0_f64, f64::max);

    let mut out = String::new();
    for quote in quotes {
        let bar_len = if max_price > 0.0 {
            ((quote.price / max_price) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<8} {:>12} |{}\n",
            quote.symbol,
            format!("${:.2}", quote.price),
            "#".repeat(bar_len.max(1)),
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "Stocks: {}   Average price: ${:.2}",
        stats.count, stats.average_price
    ));
    if let Some(best) = &stats.best_performer {
        out.push_str(&format!(
            "   Best performer: {} ({:+.2}%)",
            best.symbol, best.change_percent
        ));
    }
    out.push('\n');
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Group digits in threes, e.g. `45678900` → `45,678,900`.
fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
