//! Word cloud renderer
//!
//! Words are sized by relative frequency and placed greedily, most frequent
//! first, along an Archimedean spiral around the canvas center. No word starts
//! wider than 60% of the canvas. A word that does not fit is retried one glyph
//! scale smaller and dropped at scale 1.

use std::f64::consts::TAU;
use std::path::Path;

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{colors, draw_text, text_size};
use crate::error::Result;
use crate::nlp::FrequencyTable;
use crate::utils::WordCloudSettings;

/// Canvas width in pixels
pub const CLOUD_WIDTH: u32 = 800;
/// Canvas height in pixels
pub const CLOUD_HEIGHT: u32 = 400;

/// Spiral radius growth per radian
const SPIRAL_GROWTH: f64 = 1.0;
/// Angle increment between candidate positions
const SPIRAL_STEP: f64 = 0.1;
/// Empty pixels kept around each word
const WORD_PADDING: u32 = 2;
/// Widest a word may start out, as a share of the canvas width
const MAX_WIDTH_SHARE: f64 = 0.6;

/// A word positioned on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    /// Glyph scale (word height is 8 * scale pixels)
    pub scale: u32,
    pub x: u32,
    pub y: u32,
    pub color: Rgb<u8>,
}

impl PlacedWord {
    pub fn width(&self) -> u32 {
        text_size(&self.word, self.scale).0
    }

    pub fn height(&self) -> u32 {
        text_size(&self.word, self.scale).1
    }

    fn overlaps(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        let pad = WORD_PADDING;
        x < self.x + self.width() + pad
            && self.x < x + width + pad
            && y < self.y + self.height() + pad
            && self.y < y + height + pad
    }
}

/// Word cloud renderer
#[derive(Debug, Clone)]
pub struct WordCloudRenderer {
    width: u32,
    height: u32,
    background: Rgb<u8>,
    max_words: usize,
    max_font_scale: u32,
    relative_scaling: f64,
    seed: u64,
}

impl WordCloudRenderer {
    /// Create a renderer for the 800x400 white canvas
    pub fn new() -> Self {
        Self::from_settings(&WordCloudSettings::default())
    }

    /// Create a renderer from configuration
    pub fn from_settings(settings: &WordCloudSettings) -> Self {
        Self {
            width: CLOUD_WIDTH,
            height: CLOUD_HEIGHT,
            background: colors::WHITE,
            max_words: settings.max_words,
            max_font_scale: settings.max_font_scale.max(1),
            relative_scaling: settings.relative_scaling.clamp(0.0, 1.0),
            seed: settings.seed,
        }
    }

    /// Set the maximum number of words
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Set the layout seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Compute word positions without drawing
    pub fn layout(&self, table: &FrequencyTable) -> Vec<PlacedWord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let max_count = table.max_count().max(1) as f64;
        let mut placed: Vec<PlacedWord> = Vec::new();

        for entry in table.top(self.max_words) {
            let relative = entry.count as f64 / max_count;
            let target = self.max_font_scale as f64
                * (self.relative_scaling * relative + (1.0 - self.relative_scaling));
            let mut scale = (target.round() as u32)
                .clamp(1, self.max_font_scale)
                .min(self.widest_scale(&entry.word));

            loop {
                if let Some((x, y)) = self.find_position(&entry.word, scale, &placed, &mut rng) {
                    let color = colors::PALETTE[rng.gen_range(0..colors::PALETTE.len())];
                    placed.push(PlacedWord {
                        word: entry.word.clone(),
                        count: entry.count,
                        scale,
                        x,
                        y,
                        color,
                    });
                    break;
                }
                if scale == 1 {
                    debug!(word = %entry.word, "No room left for word");
                    break;
                }
                scale -= 1;
            }
        }

        placed
    }

    /// Largest scale keeping `word` within the allowed share of the width
    fn widest_scale(&self, word: &str) -> u32 {
        let (unit_width, _) = text_size(word, 1);
        let limit = (self.width as f64 * MAX_WIDTH_SHARE) as u32;
        (limit / unit_width.max(1)).max(1)
    }

    fn find_position(
        &self,
        word: &str,
        scale: u32,
        placed: &[PlacedWord],
        rng: &mut StdRng,
    ) -> Option<(u32, u32)> {
        let (w, h) = text_size(word, scale);
        if w == 0 || w > self.width || h > self.height {
            return None;
        }

        let center_x = self.width as f64 / 2.0;
        let center_y = self.height as f64 / 2.0;
        let aspect = self.width as f64 / self.height as f64;
        let start_angle = rng.gen_range(0.0..TAU);
        let max_radius = center_x.max(center_y) + w.max(h) as f64;

        let mut theta: f64 = 0.0;
        loop {
            let radius = SPIRAL_GROWTH * theta;
            if radius * aspect > max_radius * aspect.max(1.0) {
                return None;
            }

            let angle = start_angle + theta;
            let cx = center_x + radius * aspect * angle.cos();
            let cy = center_y + radius * angle.sin();
            let left = cx - w as f64 / 2.0;
            let top = cy - h as f64 / 2.0;

            if left >= 0.0
                && top >= 0.0
                && left + w as f64 <= self.width as f64
                && top + h as f64 <= self.height as f64
            {
                let (x, y) = (left as u32, top as u32);
                if !placed.iter().any(|p| p.overlaps(x, y, w, h)) {
                    return Some((x, y));
                }
            }

            theta += SPIRAL_STEP;
        }
    }

    /// Render the word cloud
    pub fn render(&self, table: &FrequencyTable) -> RgbImage {
        self.draw(&self.layout(table))
    }

    /// Draw already positioned words
    pub fn draw(&self, words: &[PlacedWord]) -> RgbImage {
        let mut img = RgbImage::from_pixel(self.width, self.height, self.background);
        for word in words {
            draw_text(&mut img, word.x, word.y, &word.word, word.scale, word.color);
        }
        img
    }

    /// Render and save as PNG
    pub fn render_to_file<P: AsRef<Path>>(&self, table: &FrequencyTable, path: P) -> Result<Vec<PlacedWord>> {
        let words = self.layout(table);
        self.draw(&words).save(path.as_ref())?;

        info!(
            words = words.len(),
            path = %path.as_ref().display(),
            "Saved word cloud"
        );
        Ok(words)
    }
}

impl Default for WordCloudRenderer {
    fn default() -> Self {
        Self::new()
    }
}
