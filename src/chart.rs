//! Stacked bar chart of completed and ongoing projects per year.
//!
//! Rasterised by hand into an RGBA buffer, with text drawn from the
//! `font8x8` glyph table, and encoded with `png`. The dataset is fixed, so
//! the output bytes are identical on every render.

use crate::errors::{AppError, ChartError};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tokio::fs;

pub const CHART_FILE: &str = "completion_chart.png";

pub const YEARS: [u16; 5] = [2020, 2021, 2022, 2023, 2024];
pub const COMPLETED: [u32; 5] = [5, 8, 12, 15, 10];
pub const ONGOING: [u32; 5] = [2, 3, 5, 7, 8];

const WIDTH: usize = 1000;
const HEIGHT: usize = 600;
const MARGIN_LEFT: usize = 80;
const MARGIN_RIGHT: usize = 40;
const MARGIN_TOP: usize = 70;
const MARGIN_BOTTOM: usize = 70;
const Y_MAX: u32 = 25;
const Y_STEP: u32 = 5;
const GLYPH: usize = 8;

pub const TITLE: &str = "Project Completion Over Years";
pub const X_LABEL: &str = "Year";
pub const Y_LABEL: &str = "Number of Projects";

type Rgba = [u8; 4];

const WHITE: Rgba = [0xff, 0xff, 0xff, 0xff];
const AXIS: Rgba = [0x33, 0x33, 0x33, 0xff];
const GRID: Rgba = [0xe0, 0xe0, 0xe0, 0xff];
const COMPLETED_COLOR: Rgba = [0xe7, 0x4c, 0x3c, 0xff];
const ONGOING_COLOR: Rgba = [0x34, 0x98, 0xdb, 0xff];
const TEXT: Rgba = [0x22, 0x22, 0x22, 0xff];

static RENDERED: OnceLock<Vec<u8>> = OnceLock::new();

/// Path the projects page writes the chart to.
pub fn chart_path(static_dir: &Path) -> PathBuf {
    static_dir.join("images").join(CHART_FILE)
}

/// Writes the chart under `static_dir`, replacing whatever is there.
pub async fn write_chart(static_dir: &Path) -> Result<PathBuf, AppError> {
    let bytes = match RENDERED.get() {
        Some(bytes) => bytes,
        None => {
            let bytes = render_png()?;
            RENDERED.get_or_init(|| bytes)
        }
    };

    let path = chart_path(static_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(&path, bytes).await?;
    Ok(path)
}

pub fn render_png() -> Result<Vec<u8>, ChartError> {
    let canvas = draw();
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, WIDTH as u32, HEIGHT as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.write_header()?.write_image_data(&canvas.pixels)?;
    }
    Ok(out)
}

struct Canvas {
    pixels: Vec<u8>,
}

impl Canvas {
    fn new(fill: Rgba) -> Self {
        Self {
            pixels: fill.repeat(WIDTH * HEIGHT),
        }
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Rgba) {
        let x_end = (x + w).min(WIDTH);
        let y_end = (y + h).min(HEIGHT);
        for row in y.min(HEIGHT)..y_end {
            for col in x.min(WIDTH)..x_end {
                let offset = (row * WIDTH + col) * 4;
                self.pixels[offset..offset + 4].copy_from_slice(&color);
            }
        }
    }

    /// Draws `text` left to right with its top-left corner at `(x, y)`.
    fn text(&mut self, x: usize, y: usize, text: &str, scale: usize) {
        for (i, ch) in text.chars().enumerate() {
            let origin = x + i * GLYPH * scale;
            self.glyph(ch, scale, |col, row| (origin + col, y + row));
        }
    }

    /// Draws `text` bottom to top, rotated a quarter turn counter-clockwise.
    /// `(x, y)` is the bottom-left corner of the first glyph.
    fn text_vertical(&mut self, x: usize, y: usize, text: &str, scale: usize) {
        for (i, ch) in text.chars().enumerate() {
            let origin = y - i * GLYPH * scale;
            self.glyph(ch, scale, |col, row| (x + row, origin - col - scale));
        }
    }

    fn glyph(&mut self, ch: char, scale: usize, place: impl Fn(usize, usize) -> (usize, usize)) {
        let Some(bitmap) = BASIC_FONTS.get(ch) else {
            return;
        };
        for (row, bits) in bitmap.iter().enumerate() {
            for col in 0..GLYPH {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let (px, py) = place(col * scale, row * scale);
                self.fill_rect(px, py, scale, scale, TEXT);
            }
        }
    }
}

fn text_width(text: &str, scale: usize) -> usize {
    text.chars().count() * GLYPH * scale
}

fn plot_height() -> usize {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn plot_width() -> usize {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn value_to_px(value: u32) -> usize {
    (value as usize * plot_height()) / Y_MAX as usize
}

fn draw() -> Canvas {
    let mut canvas = Canvas::new(WHITE);
    let baseline = HEIGHT - MARGIN_BOTTOM;

    let mut tick = 0;
    while tick <= Y_MAX {
        let y = baseline - value_to_px(tick);
        canvas.fill_rect(MARGIN_LEFT, y, plot_width(), 1, GRID);
        canvas.fill_rect(MARGIN_LEFT - 8, y, 8, 2, AXIS);
        let label = tick.to_string();
        canvas.text(MARGIN_LEFT - 12 - text_width(&label, 2), y - GLYPH, &label, 2);
        tick += Y_STEP;
    }

    let slot = plot_width() / YEARS.len();
    let bar = slot * 6 / 10;
    for (i, ((&done, &open), year)) in COMPLETED
        .iter()
        .zip(ONGOING.iter())
        .zip(YEARS.iter())
        .enumerate()
    {
        let x = MARGIN_LEFT + i * slot + (slot - bar) / 2;
        let done_px = value_to_px(done);
        let open_px = value_to_px(open);
        canvas.fill_rect(x, baseline - done_px, bar, done_px, COMPLETED_COLOR);
        canvas.fill_rect(x, baseline - done_px - open_px, bar, open_px, ONGOING_COLOR);
        canvas.fill_rect(x + bar / 2, baseline, 2, 8, AXIS);
        let label = year.to_string();
        canvas.text(x + (bar - text_width(&label, 2)) / 2, baseline + 16, &label, 2);
    }

    canvas.fill_rect(MARGIN_LEFT, MARGIN_TOP, 2, plot_height(), AXIS);
    canvas.fill_rect(MARGIN_LEFT, baseline, plot_width(), 2, AXIS);

    canvas.text((WIDTH - text_width(TITLE, 3)) / 2, 20, TITLE, 3);
    canvas.text(
        MARGIN_LEFT + (plot_width() - text_width(X_LABEL, 2)) / 2,
        HEIGHT - 30,
        X_LABEL,
        2,
    );
    canvas.text_vertical(
        12,
        MARGIN_TOP + (plot_height() + text_width(Y_LABEL, 2)) / 2,
        Y_LABEL,
        2,
    );

    // legend, top right of the plot
    let legend_x = WIDTH - MARGIN_RIGHT - 170;
    for (row, (label, color)) in [("Completed", COMPLETED_COLOR), ("Ongoing", ONGOING_COLOR)]
        .into_iter()
        .enumerate()
    {
        let y = MARGIN_TOP + 10 + row * 24;
        canvas.fill_rect(legend_x, y, 28, 16, color);
        canvas.text(legend_x + 36, y, label, 2);
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_deterministic() {
        let first = render_png().unwrap();
        let second = render_png().unwrap();
        assert_eq!(first, second);
        assert_eq!(&first[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn tallest_stack_fits_plot() {
        let tallest = COMPLETED
            .iter()
            .zip(ONGOING.iter())
            .map(|(a, b)| a + b)
            .max()
            .unwrap();
        assert!(tallest <= Y_MAX);
    }

    #[test]
    fn stacked_bar_colors_land_where_expected() {
        let canvas = draw();
        let slot = plot_width() / YEARS.len();
        let x = MARGIN_LEFT + slot / 2;
        let baseline = HEIGHT - MARGIN_BOTTOM;
        let pixel = |y: usize| {
            let offset = (y * WIDTH + x) * 4;
            [
                canvas.pixels[offset],
                canvas.pixels[offset + 1],
                canvas.pixels[offset + 2],
                canvas.pixels[offset + 3],
            ]
        };

        assert_eq!(pixel(baseline - 1), COMPLETED_COLOR);
        assert_eq!(pixel(baseline - value_to_px(COMPLETED[0]) - 1), ONGOING_COLOR);
    }

    fn count_color(canvas: &Canvas, x: usize, y: usize, w: usize, h: usize, color: Rgba) -> usize {
        let mut count = 0;
        for row in y..y + h {
            for col in x..x + w {
                let offset = (row * WIDTH + col) * 4;
                if canvas.pixels[offset..offset + 4] == color {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn labels_are_drawn_in_their_regions() {
        let canvas = draw();
        let baseline = HEIGHT - MARGIN_BOTTOM;
        let slot = plot_width() / YEARS.len();

        // title band
        assert!(count_color(&canvas, 0, 20, WIDTH, 24, TEXT) > 0);
        // one year label under each bar
        for i in 0..YEARS.len() {
            let x = MARGIN_LEFT + i * slot;
            assert!(count_color(&canvas, x, baseline + 16, slot, 16, TEXT) > 0, "year {i}");
        }
        // x axis name
        assert!(count_color(&canvas, MARGIN_LEFT, HEIGHT - 30, plot_width(), 16, TEXT) > 0);
        // y tick numbers left of the axis
        assert!(count_color(&canvas, 20, MARGIN_TOP - GLYPH, MARGIN_LEFT - 32, plot_height() + 16, TEXT) > 0);
        // rotated y axis name
        assert!(count_color(&canvas, 12, MARGIN_TOP, 16, plot_height(), TEXT) > 0);
        // legend text beside the swatches
        let legend_x = WIDTH - MARGIN_RIGHT - 170;
        assert!(count_color(&canvas, legend_x + 36, MARGIN_TOP + 10, 130, 40, TEXT) > 0);
        // nothing drawn in text colour inside the empty plot corner
        assert_eq!(count_color(&canvas, MARGIN_LEFT + 10, MARGIN_TOP + 10, 100, 40, TEXT), 0);
    }

    #[test]
    fn vertical_text_reads_bottom_to_top() {
        let mut canvas = Canvas::new(WHITE);
        canvas.text_vertical(100, 300, "I", 1);
        // rotated, the glyph occupies the 8 rows above y
        assert!(count_color(&canvas, 100, 292, 8, 8, TEXT) > 0);
        assert_eq!(count_color(&canvas, 100, 300, 8, 8, TEXT), 0);
    }

    #[tokio::test]
    async fn write_chart_overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_chart(dir.path()).await.unwrap();
        std::fs::write(&path, b"stale").unwrap();

        let again = write_chart(dir.path()).await.unwrap();
        assert_eq!(path, again);
        assert_eq!(std::fs::read(&again).unwrap(), render_png().unwrap());
    }
}
