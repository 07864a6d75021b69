use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(13, 17, 23);
pub const SURFACE: Color = Color::Rgb(22, 27, 34);
pub const ACCENT: Color = Color::Rgb(0, 245, 160);
pub const MUTED: Color = Color::Gray;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;

/// Sequential teal palette, light to dark.
pub const TEAL: [(u8, u8, u8); 7] = [
    (209, 238, 234),
    (168, 219, 217),
    (133, 196, 201),
    (104, 171, 184),
    (79, 144, 166),
    (59, 115, 143),
    (42, 86, 116),
];

/// Colour of the `index`-th series (cluster, tier, slice).
pub const fn series_color(index: usize) -> Color {
    let (r, g, b) = TEAL[index % TEAL.len()];
    Color::Rgb(r, g, b)
}

/// Continuous scale for values in `[0, 1]`: dark teal at 0, pale teal at 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn teal_scale(value: f64) -> Color {
    let t = value.clamp(0.0, 1.0);
    let (r0, g0, b0) = TEAL[TEAL.len() - 1];
    let (r1, g1, b1) = TEAL[0];
    let mix = |a: u8, b: u8| (f64::from(b) - f64::from(a)).mul_add(t, f64::from(a)).round() as u8;
    Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Readable text colour on top of `teal_scale(value)`.
pub fn text_on_scale(value: f64) -> Color {
    if value > 0.5 {
        Color::Black
    } else {
        Color::White
    }
}

pub fn panel_border() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn title_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn key_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}
