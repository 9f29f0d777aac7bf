//! Terminal rendering of contact views
//!
//! Everything here builds `String`s; callers decide where to write them. The
//! layout follows the page the data was designed for: an error banner, the
//! proportion chart, percentage badges, then either a detail card for a
//! single match or the table of visible records.

use std::fmt::Write as _;

use crossterm::style::{style, Attribute, Color, Stylize};

use crate::app::{Aggregate, DetailView, Field, Record, SessionView};
use crate::constants::display::{CHART_WIDTH, EMPTY_CELL, MAX_CELL_WIDTH, NO_PHONE, PALETTE};

/// Plain-text stand-ins for palette colors when color is off
const PLAIN_MARKS: [char; 6] = ['#', '=', '+', '*', '%', '@'];

/// Renders session views as terminal text
#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    max_cell_width: usize,
    width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(false, MAX_CELL_WIDTH)
    }
}

impl Renderer {
    /// Create a renderer; `width` is taken from the terminal when available
    pub fn new(color: bool, max_cell_width: usize) -> Self {
        let width = crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(80);
        Self {
            color,
            max_cell_width,
            width,
        }
    }

    /// Override the wrapping width
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Full view: banner, chart, badges, then detail card or table
    pub fn render_view(&self, view: &SessionView<'_>) -> String {
        let mut out = String::new();

        if let Some(ref error) = view.error {
            out.push_str(&self.fallback_banner(error));
            out.push('\n');
        }

        if view.toggles.show_chart && !view.aggregate.is_empty() {
            out.push_str(&self.chart(&view.aggregate));
            out.push('\n');
        }

        if view.toggles.show_summary && !view.aggregate.is_empty() {
            out.push_str(&self.badges(&view.aggregate));
            out.push('\n');
        }

        match view.detail() {
            DetailView::Person(record) => out.push_str(&self.person_card(record)),
            DetailView::Company(record) => out.push_str(&self.company_card(record)),
            DetailView::Table => {
                out.push_str(&self.table(view.columns, &view.visible));
                let _ = writeln!(
                    out,
                    "{} of {} shown (search by {})",
                    view.visible.len(),
                    view.aggregate.total(),
                    view.filter.field.label()
                );
            }
        }

        out
    }

    /// Error message shown when placeholder data is in use
    pub fn fallback_banner(&self, message: &str) -> String {
        let text = format!("Error: {message}\nShowing placeholder data.\n");
        self.paint(&text, |s| style(s).with(Color::Red).to_string())
    }

    /// Table of records with one header row
    pub fn table(&self, columns: &[String], records: &[Record]) -> String {
        let headers: Vec<String> = columns.iter().map(|c| c.replace('_', " ")).collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for record in records {
            for (i, value) in record.values().iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell_text(value).chars().count());
                }
            }
        }
        for width in widths.iter_mut() {
            *width = (*width).min(self.max_cell_width);
        }

        let mut out = String::new();

        let header_line = join_cells(&headers, &widths);
        out.push_str(&self.paint(&header_line, |s| {
            style(s).attribute(Attribute::Bold).to_string()
        }));
        out.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        for record in records {
            let cells: Vec<String> = record
                .values()
                .iter()
                .map(|v| cell_text(v).to_string())
                .collect();
            out.push_str(&join_cells(&cells, &widths));
            out.push('\n');
        }

        out
    }

    /// Percentage badges in bucket order, wrapped to the terminal width
    pub fn badges(&self, aggregate: &Aggregate) -> String {
        let mut lines = vec![String::new()];
        let mut line_width = 0;

        for (i, (label, count)) in aggregate.iter().enumerate() {
            let text = format!("{}: {:.1}%", label, aggregate.percent(count));
            let badge_width = text.chars().count() + 2;

            if line_width > 0 && line_width + badge_width + 1 > self.width {
                lines.push(String::new());
                line_width = 0;
            }

            let badge = if self.color {
                format!(" {} ", text)
                    .with(Color::White)
                    .on(palette(i))
                    .to_string()
            } else {
                format!("[{}]", text)
            };

            if let Some(line) = lines.last_mut() {
                if line_width > 0 {
                    line.push(' ');
                    line_width += 1;
                }
                line.push_str(&badge);
            }
            line_width += badge_width;
        }

        let mut out = format!("Summary by {}\n", aggregate.field().label());
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Horizontal proportion bar with a legend of `label (count)`
    pub fn chart(&self, aggregate: &Aggregate) -> String {
        let mut out = format!("Distribution by {}\n", aggregate.field().label());

        for (i, width) in segment_widths(aggregate, CHART_WIDTH).into_iter().enumerate() {
            if width > 0 {
                out.push_str(&self.mark(i, width));
            }
        }
        out.push('\n');

        let legend: Vec<String> = aggregate
            .iter()
            .enumerate()
            .map(|(i, (label, count))| format!("{} {} ({})", self.mark(i, 1), label, count))
            .collect();
        out.push_str(&legend.join("  "));
        out.push('\n');

        out
    }

    /// Card for a single person match
    pub fn person_card(&self, record: &Record) -> String {
        let mut out = String::new();
        out.push_str(&self.paint(&record.full_name(), |s| {
            style(s).attribute(Attribute::Bold).to_string()
        }));
        out.push('\n');
        let _ = writeln!(out, "Company: {}", record.get(Field::CompanyName));
        let _ = writeln!(out, "Address: {}", record.address_line());
        let _ = writeln!(out, "Phone: {}", record.phone().unwrap_or(NO_PHONE));
        let _ = writeln!(out, "Email: {}", record.get(Field::Email));
        let _ = writeln!(out, "Website: {}", record.get(Field::Web));
        out
    }

    /// Card for a single company match
    pub fn company_card(&self, record: &Record) -> String {
        let mut out = String::new();
        out.push_str(&self.paint(record.get(Field::CompanyName), |s| {
            style(s).attribute(Attribute::Bold).to_string()
        }));
        out.push('\n');
        let _ = writeln!(out, "Contact: {}", record.full_name());
        let _ = writeln!(out, "Address: {}", record.address_line());
        let _ = writeln!(out, "Phone: {}", record.phone().unwrap_or(NO_PHONE));
        let _ = writeln!(out, "Email: {}", record.get(Field::Email));
        out
    }

    fn mark(&self, index: usize, width: usize) -> String {
        if self.color {
            "█".repeat(width).with(palette(index)).to_string()
        } else {
            PLAIN_MARKS[index % PLAIN_MARKS.len()]
                .to_string()
                .repeat(width)
        }
    }

    fn paint(&self, text: &str, styler: impl Fn(&str) -> String) -> String {
        if self.color {
            styler(text)
        } else {
            text.to_string()
        }
    }
}

fn palette(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Split `total_width` cells among buckets in proportion to their counts
///
/// Uses cumulative rounding so the widths always add up to `total_width`.
pub fn segment_widths(aggregate: &Aggregate, total_width: usize) -> Vec<usize> {
    let total = aggregate.total();
    if total == 0 {
        return vec![0; aggregate.len()];
    }

    let mut widths = Vec::with_capacity(aggregate.len());
    let mut running = 0;
    let mut previous_end = 0;
    for (_, count) in aggregate.iter() {
        running += count;
        let end = (running * total_width + total / 2) / total;
        widths.push(end - previous_end);
        previous_end = end;
    }
    widths
}

fn cell_text(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_CELL
    } else {
        value
    }
}

fn join_cells(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(&truncate(cell, *width), *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
