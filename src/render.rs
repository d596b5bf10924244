//! Step-plot rendering of encoded waveforms.
//!
//! Two targets are supported: a plain-text plot for terminals and an SVG
//! document for export. Both treat sample *i* as held from time *i* to
//! *i + 1* (post-step semantics).

use crate::bits::BitSequence;
use crate::signal::Waveform;

/// Default trace colour.
pub const DEFAULT_TRACE_COLOR: &str = "#ff6600";

const GRID_COLOR: &str = "gray";
const Y_LIMIT: f64 = 2.0;
const PX_PER_SAMPLE: f64 = 40.0;
const PANEL_HEIGHT: f64 = 220.0;
const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 30.0;
const ASCII_CELL: usize = 4;

/// Colour theme for rendered plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    SoftGray,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::SoftGray];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::SoftGray => "soft-gray",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Theme::Dark => "#1e1e1e",
            Theme::Light => "white",
            Theme::SoftGray => "#dcdcdc",
        }
    }

    pub fn plot_background(&self) -> &'static str {
        match self {
            Theme::Dark => "#2b2b2b",
            Theme::Light => "white",
            Theme::SoftGray => "#e6e6e6",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Theme::Dark => "white",
            Theme::Light | Theme::SoftGray => "black",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase().replace(['_', ' '], "-");
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| format!("unknown theme '{s}', expected dark, light or soft-gray"))
    }
}

/// Options shared by all render targets.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Overrides [`DEFAULT_TRACE_COLOR`].
    pub trace_color: Option<String>,
    /// Draw each bit's digit above its slot.
    pub show_labels: bool,
    /// Overrides the default `"<scheme> Encoding"` title.
    pub title: Option<String>,
}

impl RenderOptions {
    fn trace_color(&self) -> &str {
        self.trace_color.as_deref().unwrap_or(DEFAULT_TRACE_COLOR)
    }

    fn title_for(&self, waveform: &Waveform) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} Encoding", waveform.scheme()))
    }
}

/// Renders a terminal step plot.
///
/// One row is drawn per level the scheme can emit. Noisy samples are
/// snapped to the nearest drawable level.
///
/// ```rust
/// use linecode::{encode, BitSequence, Scheme};
/// use linecode::render::{render_ascii, RenderOptions};
///
/// let bits: BitSequence = "10".parse().unwrap();
/// let signal = encode(&bits, Scheme::NrzL);
/// let plot = render_ascii(&signal.to_waveform(), &bits, &RenderOptions::default());
/// assert_eq!(plot.lines().count(), 3);
/// ```
pub fn render_ascii(waveform: &Waveform, bits: &BitSequence, options: &RenderOptions) -> String {
    let (lo, hi) = waveform.scheme().level_range();
    let rows: Vec<i8> = (lo..=hi).rev().collect();
    let snapped: Vec<i8> = waveform
        .samples()
        .iter()
        .map(|s| (s.round() as i8).clamp(lo, hi))
        .collect();

    let width = snapped.len() * ASCII_CELL + 1;
    let mut grid = vec![vec![' '; width]; rows.len()];
    let row_of = |level: i8| (hi - level) as usize;

    for (i, &level) in snapped.iter().enumerate() {
        let start = i * ASCII_CELL;
        for cell in &mut grid[row_of(level)][start..=start + ASCII_CELL] {
            *cell = '─';
        }
        if i > 0 && snapped[i - 1] != level {
            let (a, b) = (row_of(snapped[i - 1]), row_of(level));
            for row in a.min(b)..=a.max(b) {
                grid[row][start] = '│';
            }
        }
    }

    let mut out = String::new();
    for (row, level) in grid.iter().zip(&rows) {
        let line: String = row.iter().collect();
        out.push_str(&format!("{level:>2} ┤{}\n", line.trim_end()));
    }

    if options.show_labels {
        let spb = waveform.scheme().samples_per_bit();
        let mut labels = vec![' '; width];
        for (i, bit) in bits.iter().enumerate() {
            let column = i * spb * ASCII_CELL + spb * ASCII_CELL / 2;
            if column < width {
                labels[column] = bit.as_char();
            }
        }
        let line: String = labels.iter().collect();
        out.push_str(&format!("    {}\n", line.trim_end()));
    }

    out
}

/// Renders a single-panel SVG step plot.
pub fn render_svg(waveform: &Waveform, bits: &BitSequence, options: &RenderOptions) -> String {
    render_svg_grid(std::slice::from_ref(waveform), bits, options)
}

/// Renders one stacked panel per waveform, all sharing the same bits.
///
/// Used by the compare-all view. An explicit `options.title` is only
/// applied to single-panel documents; grids title each panel by scheme.
pub fn render_svg_grid(waveforms: &[Waveform], bits: &BitSequence, options: &RenderOptions) -> String {
    let max_samples = waveforms.iter().map(Waveform::len).max().unwrap_or(0).max(1);
    let plot_width = max_samples as f64 * PX_PER_SAMPLE;
    let width = MARGIN_LEFT + plot_width + MARGIN_RIGHT;
    let panel_total = MARGIN_TOP + PANEL_HEIGHT + MARGIN_BOTTOM;
    let height = panel_total * waveforms.len().max(1) as f64;
    let theme = options.theme;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n"
    );
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        theme.background()
    ));

    for (index, waveform) in waveforms.iter().enumerate() {
        let title = if waveforms.len() == 1 {
            options.title_for(waveform)
        } else {
            format!("{} Encoding", waveform.scheme())
        };
        let top = index as f64 * panel_total + MARGIN_TOP;
        svg.push_str(&render_panel(waveform, bits, options, &title, top, plot_width));
    }

    svg.push_str("</svg>\n");
    svg
}

fn render_panel(
    waveform: &Waveform,
    bits: &BitSequence,
    options: &RenderOptions,
    title: &str,
    top: f64,
    plot_width: f64,
) -> String {
    let theme = options.theme;
    let x = |t: f64| MARGIN_LEFT + t * PX_PER_SAMPLE;
    let y = |level: f64| top + (Y_LIMIT - level.clamp(-Y_LIMIT, Y_LIMIT)) / (2.0 * Y_LIMIT) * PANEL_HEIGHT;

    let mut out = format!(
        "<g class=\"panel\">\n<rect x=\"{MARGIN_LEFT}\" y=\"{top}\" width=\"{plot_width}\" height=\"{PANEL_HEIGHT}\" fill=\"{}\"/>\n",
        theme.plot_background()
    );
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"14\" font-weight=\"bold\" text-anchor=\"middle\">{}</text>\n",
        MARGIN_LEFT + plot_width / 2.0,
        top - 12.0,
        theme.text(),
        escape(title)
    ));

    // Dashed grid with y ticks at every integer level.
    for level in -2..=2 {
        let gy = y(f64::from(level));
        out.push_str(&format!(
            "<line x1=\"{MARGIN_LEFT}\" y1=\"{gy}\" x2=\"{}\" y2=\"{gy}\" stroke=\"{GRID_COLOR}\" stroke-dasharray=\"4 3\" stroke-opacity=\"0.6\"/>\n",
            MARGIN_LEFT + plot_width
        ));
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"11\" text-anchor=\"end\">{level}</text>\n",
            MARGIN_LEFT - 6.0,
            gy + 4.0,
            theme.text()
        ));
    }
    for t in 0..=waveform.len() {
        let gx = x(t as f64);
        out.push_str(&format!(
            "<line x1=\"{gx}\" y1=\"{top}\" x2=\"{gx}\" y2=\"{}\" stroke=\"{GRID_COLOR}\" stroke-dasharray=\"4 3\" stroke-opacity=\"0.6\"/>\n",
            top + PANEL_HEIGHT
        ));
    }

    if !waveform.is_empty() {
        let mut path = String::new();
        for (t, level) in waveform.points() {
            let (px, py) = (x(t as f64), y(level));
            if t == 0 {
                path.push_str(&format!("M{px} {py}"));
            } else {
                path.push_str(&format!(" V{py}"));
            }
            path.push_str(&format!(" H{}", x(t as f64 + 1.0)));
        }
        out.push_str(&format!(
            "<path d=\"{path}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            escape(options.trace_color())
        ));
    }

    if options.show_labels {
        let spb = waveform.scheme().samples_per_bit() as f64;
        for (i, bit) in bits.iter().enumerate() {
            let center = x(i as f64 * spb + spb / 2.0);
            out.push_str(&format!(
                "<text class=\"bit-label\" x=\"{center}\" y=\"{}\" fill=\"{}\" font-size=\"13\" text-anchor=\"middle\">{bit}</text>\n",
                y(1.6),
                theme.text()
            ));
        }
    }

    out.push_str("</g>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
