//! Sentiment distribution bar chart

use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::info;

use super::{
    colors, draw_filled_rect, draw_horizontal_line, draw_text, draw_text_centered, draw_vertical_line,
    parse_hex_color, text_size,
};
use crate::error::Result;
use crate::sentiment::{Polarity, SentimentTally};

/// Canvas width in pixels (8 inches at 100 dpi)
pub const CHART_WIDTH: u32 = 800;
/// Canvas height in pixels (6 inches at 100 dpi)
pub const CHART_HEIGHT: u32 = 600;

const TITLE: &str = "Sentiment Analysis of Comments";
const X_LABEL: &str = "Sentiment";
const Y_LABEL: &str = "Number of Comments";

// Plot area
const PLOT_LEFT: u32 = 90;
const PLOT_RIGHT: u32 = 760;
const PLOT_TOP: u32 = 90;
const PLOT_BOTTOM: u32 = 500;

/// Share of each category slot covered by its bar
const BAR_FILL: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bar {
    polarity: Polarity,
    count: usize,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

/// Renders the three-bar sentiment chart
#[derive(Debug, Clone)]
pub struct SentimentChart {
    positive: Rgb<u8>,
    neutral: Rgb<u8>,
    negative: Rgb<u8>,
}

impl SentimentChart {
    pub fn new() -> Result<Self> {
        Ok(Self {
            positive: parse_hex_color(colors::POSITIVE)?,
            neutral: parse_hex_color(colors::NEUTRAL)?,
            negative: parse_hex_color(colors::NEGATIVE)?,
        })
    }

    /// Bar color for a class
    pub fn color(&self, polarity: Polarity) -> Rgb<u8> {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Neutral => self.neutral,
            Polarity::Negative => self.negative,
        }
    }

    /// Render the chart
    pub fn render(&self, tally: &SentimentTally) -> RgbImage {
        let mut img = RgbImage::from_pixel(CHART_WIDTH, CHART_HEIGHT, colors::WHITE);
        let (axis_max, step) = axis_range(max_count(tally));

        draw_text_centered(&mut img, CHART_WIDTH / 2, 30, TITLE, 3, colors::BLACK);
        draw_text(&mut img, 20, PLOT_TOP - 30, Y_LABEL, 2, colors::DARK_GRAY);

        // Gridlines and tick labels
        let mut tick = 0;
        while tick <= axis_max {
            let y = value_to_y(tick, axis_max);
            if tick > 0 {
                draw_horizontal_line(&mut img, y, PLOT_LEFT + 1, PLOT_RIGHT, colors::LIGHT_GRAY);
            }
            draw_horizontal_line(&mut img, y, PLOT_LEFT - 5, PLOT_LEFT, colors::BLACK);

            let label = tick.to_string();
            let (w, h) = text_size(&label, 1);
            draw_text(&mut img, PLOT_LEFT - 10 - w, y.saturating_sub(h / 2), &label, 1, colors::BLACK);
            tick += step;
        }

        for bar in bars(tally, axis_max) {
            draw_filled_rect(&mut img, bar.x, bar.y, bar.width, bar.height, self.color(bar.polarity));

            let center = bar.x + bar.width / 2;
            draw_text_centered(&mut img, center, bar.y.saturating_sub(24), &bar.count.to_string(), 2, colors::BLACK);
            draw_text_centered(&mut img, center, PLOT_BOTTOM + 12, bar.polarity.label(), 2, colors::BLACK);
        }

        // Axes are drawn last so bars do not cover them
        draw_vertical_line(&mut img, PLOT_LEFT, PLOT_TOP, PLOT_BOTTOM, colors::BLACK);
        draw_horizontal_line(&mut img, PLOT_BOTTOM, PLOT_LEFT, PLOT_RIGHT, colors::BLACK);

        draw_text_centered(&mut img, (PLOT_LEFT + PLOT_RIGHT) / 2, PLOT_BOTTOM + 50, X_LABEL, 2, colors::DARK_GRAY);

        img
    }

    /// Render and save as PNG
    pub fn render_to_file<P: AsRef<Path>>(&self, tally: &SentimentTally, path: P) -> Result<()> {
        self.render(tally).save(path.as_ref())?;
        info!(path = %path.as_ref().display(), "Saved sentiment chart");
        Ok(())
    }
}

fn max_count(tally: &SentimentTally) -> usize {
    Polarity::ALL.iter().map(|p| tally.get(*p)).max().unwrap_or(0)
}

/// Upper bound of the y axis and the tick step, leaving headroom above the
/// tallest bar for its count label
fn axis_range(max: usize) -> (usize, usize) {
    let step = nice_step(max);
    ((max / step + 1) * step, step)
}

/// Smallest 1/2/5 x 10^k step that yields at most eight ticks
fn nice_step(max: usize) -> usize {
    let mut magnitude = 1;
    loop {
        for factor in [1, 2, 5] {
            let step = factor * magnitude;
            if max / step < 8 {
                return step;
            }
        }
        magnitude *= 10;
    }
}

fn value_to_y(value: usize, axis_max: usize) -> u32 {
    let plot_height = (PLOT_BOTTOM - PLOT_TOP) as f64;
    let offset = (value as f64 / axis_max.max(1) as f64 * plot_height).round() as u32;
    PLOT_BOTTOM - offset.min(PLOT_BOTTOM - PLOT_TOP)
}

fn bars(tally: &SentimentTally, axis_max: usize) -> Vec<Bar> {
    let slot = (PLOT_RIGHT - PLOT_LEFT) / Polarity::ALL.len() as u32;
    let width = (slot as f64 * BAR_FILL) as u32;

    Polarity::ALL
        .iter()
        .enumerate()
        .map(|(i, &polarity)| {
            let count = tally.get(polarity);
            let top = value_to_y(count, axis_max);
            Bar {
                polarity,
                count,
                x: PLOT_LEFT + i as u32 * slot + (slot - width) / 2,
                y: top,
                width,
                height: PLOT_BOTTOM - top,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(positive: usize, neutral: usize, negative: usize) -> SentimentTally {
        SentimentTally {
            positive,
            neutral,
            negative,
        }
    }

    #[test]
    fn test_chart_dimensions() {
        let img = SentimentChart::new().unwrap().render(&tally(1, 2, 3));
        assert_eq!(img.dimensions(), (CHART_WIDTH, CHART_HEIGHT));
    }

    #[test]
    fn test_bars_use_fixed_colors() {
        let chart = SentimentChart::new().unwrap();
        let counts = tally(12, 5, 7);
        let img = chart.render(&counts);
        let (axis_max, _) = axis_range(max_count(&counts));

        for bar in bars(&counts, axis_max) {
            let pixel = *img.get_pixel(bar.x + bar.width / 2, PLOT_BOTTOM - 2);
            assert_eq!(pixel, chart.color(bar.polarity), "{}", bar.polarity);
        }
        assert_eq!(chart.color(Polarity::Positive), Rgb([0x66, 0xb3, 0xff]));
        assert_eq!(chart.color(Polarity::Neutral), Rgb([0xff, 0xcc, 0x99]));
        assert_eq!(chart.color(Polarity::Negative), Rgb([0xff, 0x99, 0x99]));
    }

    #[test]
    fn test_bar_heights_are_proportional() {
        let counts = tally(10, 5, 0);
        let (axis_max, _) = axis_range(10);
        let bars = bars(&counts, axis_max);

        assert!(bars[0].height > bars[1].height);
        assert_eq!(bars[2].height, 0);
        assert!(bars[0].y > PLOT_TOP);
        let ratio = bars[0].height as f64 / bars[1].height as f64;
        assert!((ratio - 2.0).abs() < 0.05);
    }

    #[test]
    fn test_empty_tally_draws_no_bars() {
        let chart = SentimentChart::new().unwrap();
        let img = chart.render(&SentimentTally::default());

        for polarity in Polarity::ALL {
            assert!(img.pixels().all(|p| *p != chart.color(polarity)));
        }
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(0), 1);
        assert_eq!(nice_step(7), 1);
        assert_eq!(nice_step(8), 2);
        assert_eq!(nice_step(30), 5);
        assert_eq!(nice_step(95), 20);
        assert_eq!(nice_step(1200), 200);
    }

    #[test]
    fn test_axis_leaves_headroom() {
        assert_eq!(axis_range(0), (1, 1));
        assert_eq!(axis_range(7), (8, 1));
        assert_eq!(axis_range(10), (12, 2));
    }
}
