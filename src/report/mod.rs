//! Reporting: frequency table, word cloud, sentiment chart and run summary
//!
//! Images are drawn directly on `image` canvases with 8x8 bitmap glyphs.

mod bar_chart;
mod summary;
mod table;
mod word_cloud;

pub use bar_chart::{SentimentChart, CHART_HEIGHT, CHART_WIDTH};
pub use summary::{write_summary, RunSummary};
pub use table::{write_frequency_csv, write_frequency_table};
pub use word_cloud::{PlacedWord, WordCloudRenderer, CLOUD_HEIGHT, CLOUD_WIDTH};

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

use crate::error::{Error, Result};

/// Glyph cell size in pixels at scale 1
pub const GLYPH_SIZE: u32 = 8;

/// Common color definitions
pub mod colors {
    use image::Rgb;

    pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    pub const DARK_GRAY: Rgb<u8> = Rgb([60, 60, 60]);
    pub const LIGHT_GRAY: Rgb<u8> = Rgb([220, 220, 220]);

    /// Bar colors for positive, neutral and negative comments
    pub const POSITIVE: &str = "#66b3ff";
    pub const NEUTRAL: &str = "#ffcc99";
    pub const NEGATIVE: &str = "#ff9999";

    /// Word cloud palette (dark-to-light blue/green/yellow ramp)
    pub const PALETTE: [Rgb<u8>; 8] = [
        Rgb([68, 1, 84]),
        Rgb([70, 50, 127]),
        Rgb([54, 92, 141]),
        Rgb([39, 127, 142]),
        Rgb([31, 161, 135]),
        Rgb([74, 194, 109]),
        Rgb([159, 218, 58]),
        Rgb([220, 200, 30]),
    ];
}

/// Parse a `#rrggbb` color literal
pub fn parse_hex_color(hex: &str) -> Result<Rgb<u8>> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.is_ascii())
        .ok_or_else(|| Error::InvalidColor(hex.to_string()))?;

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
    };

    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Helper function to draw a filled rectangle
pub fn draw_filled_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(width).min(img.width());
    let y_end = y.saturating_add(height).min(img.height());

    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Helper function to draw a vertical line
pub fn draw_vertical_line(img: &mut RgbImage, x: u32, y1: u32, y2: u32, color: Rgb<u8>) {
    let (start, end) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
    if x >= img.width() || img.height() == 0 {
        return;
    }
    for y in start..=end.min(img.height() - 1) {
        img.put_pixel(x, y, color);
    }
}

/// Helper function to draw a horizontal line
pub fn draw_horizontal_line(img: &mut RgbImage, y: u32, x1: u32, x2: u32, color: Rgb<u8>) {
    let (start, end) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
    if y >= img.height() || img.width() == 0 {
        return;
    }
    for x in start..=end.min(img.width() - 1) {
        img.put_pixel(x, y, color);
    }
}

/// Bitmap of one character; unknown characters render as a hollow box
fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .unwrap_or([0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF])
}

/// Pixel size of `text` drawn at `scale`
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    (chars * GLYPH_SIZE * scale, GLYPH_SIZE * scale)
}

/// Draw `text` with its top-left corner at (x, y); pixels outside the canvas
/// are clipped
pub fn draw_text(img: &mut RgbImage, x: u32, y: u32, text: &str, scale: u32, color: Rgb<u8>) {
    let scale = scale.max(1);
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + i as u32 * GLYPH_SIZE * scale;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // Bit 0 is the leftmost pixel
                if bits & (1 << col) == 0 {
                    continue;
                }
                draw_filled_rect(
                    img,
                    origin_x + col * scale,
                    y + row as u32 * scale,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
}

/// Draw `text` horizontally centered on `center_x`
pub fn draw_text_centered(img: &mut RgbImage, center_x: u32, y: u32, text: &str, scale: u32, color: Rgb<u8>) {
    let (width, _) = text_size(text, scale);
    draw_text(img, center_x.saturating_sub(width / 2), y, text, scale, color);
}
