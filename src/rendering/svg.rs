//! SVG writer for a chart summary.
//!
//! Layout: a column of 14px per week, cells of 12px with a 4px margin, then
//! a legend row (icon, four swatches, total) for each source and an optional
//! footer on the right.

use std::fmt::Write;

use crate::aggregate::Summary;
use crate::chart::View;
use crate::palette::{legend_labels, Palette, DAILY_STEP, WEEKLY_STEP};
use crate::source::SourceKind;
use crate::window::DAYS_PER_WEEK;

/// Column pitch.
pub const PITCH: u32 = 14;

/// Cell width.
pub const CELL: u32 = 12;

/// Outer margin.
pub const MARGIN: u32 = 4;

const GITHUB_ICON: &str = r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#;
const GITLAB_ICON: &str = r#"<path d="m22 13.29-3.33-10a.42.42 0 0 0-.14-.18.38.38 0 0 0-.22-.11.39.39 0 0 0-.23.07.42.42 0 0 0-.14.18l-2.26 6.67H8.32L6.1 3.26a.42.42 0 0 0-.1-.18.38.38 0 0 0-.26-.08.39.39 0 0 0-.23.07.42.42 0 0 0-.14.18L2 13.29a.74.74 0 0 0 .27.83L12 21l9.69-6.88a.71.71 0 0 0 .31-.83Z"/>"#;

/// Rendering knobs that are not part of the summary itself.
#[derive(Debug, Clone, Default)]
pub struct SvgOptions {
    pub palette: Palette,
    pub footer: Option<String>,
}

/// Overall geometry for a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub legend_y: u32,
    pub text_y: u32,
}

impl Geometry {
    pub fn new(total_weeks: u32, view: View) -> Self {
        let rows = match view {
            View::Daily => DAYS_PER_WEEK,
            View::Weekly => 1,
        };
        let legend_y = rows * PITCH + MARGIN + PITCH;
        Self {
            width: total_weeks * PITCH + MARGIN + 2,
            height: legend_y + 32,
            legend_y,
            text_y: legend_y + 26,
        }
    }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Tooltip text for a non-empty cell.
fn cell_title(kind: SourceKind, contribs: u64, date: &str) -> String {
    format!("{} contributions in {} on {}", contribs, kind.display_name(), date)
}

fn write_legend(
    out: &mut String,
    kind: SourceKind,
    geo: &Geometry,
    step: u32,
    summary: &Summary,
    palette: &Palette,
) {
    // The GitLab group sits to the right of GitHub's and moves over when the
    // GitHub total is wide.
    let (icon, group, x, shift) = match kind {
        SourceKind::Github => (GITHUB_ICON, "legend-github", MARGIN, 0),
        _ => (
            GITLAB_ICON,
            "legend-gitlab",
            MARGIN + 100,
            legend_shift(summary.total_github),
        ),
    };
    if shift > 0 {
        let _ = write!(out, r#"<g class="{}" transform="translate({})">"#, group, shift);
    } else {
        let _ = write!(out, r#"<g class="{}">"#, group);
    }
    let _ = write!(
        out,
        r#"<svg x="{}" y="{}" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="{}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{}</svg>"#,
        x,
        geo.legend_y,
        escape_xml(palette.accent(kind)),
        icon
    );
    let ramp = palette.ramp(kind);
    for (i, label) in legend_labels(step).iter().enumerate() {
        let _ = write!(
            out,
            r#"<rect width="10" height="10" x="{}" y="{}" fill="{}"><title>{}</title></rect>"#,
            x + 32 + i as u32 * 12,
            geo.legend_y,
            escape_xml(ramp[i]),
            label
        );
    }
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-family="sans-serif" font-weight="600" font-size="16">{}</text></g>"#,
        x + 32,
        geo.text_y,
        summary.total(kind)
    );
}

/// Approximate extra room the GitHub total needs beyond its swatch row.
fn legend_shift(total: u64) -> u32 {
    // ~10px per bold 16px digit; the swatch row already spans 44px of text.
    let digits = total.to_string().len() as u32;
    (digits * 10).saturating_sub(44)
}

/// Render `summary` as a standalone SVG document.
pub fn render_svg(summary: &Summary, total_weeks: u32, view: View, options: &SvgOptions) -> String {
    let geo = Geometry::new(total_weeks, view);
    let palette = &options.palette;
    let step = match view {
        View::Daily => DAILY_STEP,
        View::Weekly => WEEKLY_STEP,
    };

    let mut out = String::with_capacity(summary.cells.len() * 96 + 2048);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = geo.width,
        h = geo.height
    );
    out.push_str(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);

    out.push_str("<g>");
    for cell in &summary.cells {
        let row = cell.day.unwrap_or(0);
        let _ = write!(
            out,
            r#"<rect width="{}" height="{}" x="{}" y="{}" fill="{}">"#,
            CELL,
            cell.height,
            cell.week * PITCH + MARGIN,
            row * PITCH + cell.top + MARGIN,
            escape_xml(&cell.fill)
        );
        if let (Some(contribs), Some(date)) = (cell.contribs, cell.date.as_deref()) {
            let _ = write!(out, "<title>{}</title>", escape_xml(&cell_title(cell.kind, contribs, date)));
        }
        out.push_str("</rect>");
    }
    out.push_str("</g>");

    write_legend(&mut out, SourceKind::Github, &geo, step, summary, palette);
    write_legend(&mut out, SourceKind::Gitlab, &geo, step, summary, palette);

    if let Some(footer) = options.footer.as_deref().filter(|f| !f.is_empty()) {
        let _ = write!(
            out,
            r##"<text x="{}" y="{}" font-family="sans-serif" font-size="10" text-anchor="end" fill="#6b7280">{}</text>"##,
            total_weeks * PITCH + 2,
            geo.text_y,
            escape_xml(footer)
        );
    }

    out.push_str("</svg>");
    out
}
