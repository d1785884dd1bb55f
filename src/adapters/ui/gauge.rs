//! Terminal gauge: coloured band bar over `0..GAUGE_MAX` with a marker at the BMI.

use crate::domain::{BmiCategory, BmiResult, GAUGE_MAX, classify, gauge_fraction};
use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};

/// One cell per BMI unit.
pub const GAUGE_WIDTH: usize = 50;

pub fn band_color(category: BmiCategory) -> Color {
    let (r, g, b) = match category {
        BmiCategory::Underweight => (0x3b, 0x71, 0xca),
        BmiCategory::Normal => (0x19, 0x87, 0x54),
        BmiCategory::Overweight => (0xff, 0xc1, 0x07),
        BmiCategory::Obese => (0xdc, 0x35, 0x45),
    };
    Color::Rgb { r, g, b }
}

/// Category of every cell, judged by the BMI at the cell's left edge.
pub fn cells(width: usize) -> Vec<BmiCategory> {
    let step = GAUGE_MAX / width.max(1) as f64;
    (0..width).map(|i| classify(i as f64 * step)).collect()
}

/// Cell index of the marker for `bmi`. Values past the scale sit on the last cell.
pub fn marker_index(bmi: f64, width: usize) -> usize {
    let width = width.max(1);
    ((gauge_fraction(bmi) * width as f64) as usize).min(width - 1)
}

/// Draw the gauge, the marker line and the scale labels.
pub fn render<W: Write>(out: &mut W, result: &BmiResult) -> io::Result<()> {
    for category in cells(GAUGE_WIDTH) {
        out.queue(SetForegroundColor(band_color(category)))?;
        out.queue(Print('█'))?;
    }
    out.queue(ResetColor)?;
    out.queue(Print("\r\n"))?;

    let marker = marker_index(result.value, GAUGE_WIDTH);
    out.queue(Print(" ".repeat(marker)))?;
    out.queue(SetForegroundColor(band_color(result.category)))?;
    out.queue(Print(format!("▲ {:.2}", result.value)))?;
    out.queue(ResetColor)?;
    out.queue(Print("\r\n"))?;

    out.queue(Print(scale_line(GAUGE_WIDTH)))?;
    out.queue(Print("\r\n"))?;
    out.flush()
}

/// Tick labels at the band boundaries.
fn scale_line(width: usize) -> String {
    let mut line = vec![' '; width + 4];
    for (value, label) in [
        (0.0, "0"),
        (18.5, "18.5"),
        (25.0, "25"),
        (30.0, "30"),
        (GAUGE_MAX, "50"),
    ] {
        let pos = ((value / GAUGE_MAX) * width as f64) as usize;
        for (offset, ch) in label.chars().enumerate() {
            if let Some(slot) = line.get_mut(pos + offset) {
                *slot = ch;
            }
        }
    }
    line.into_iter().collect::<String>().trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_bands() {
        let cells = cells(GAUGE_WIDTH);
        assert_eq!(cells.len(), GAUGE_WIDTH);
        assert_eq!(cells[0], BmiCategory::Underweight);
        assert_eq!(cells[18], BmiCategory::Underweight);
        assert_eq!(cells[19], BmiCategory::Normal);
        assert_eq!(cells[24], BmiCategory::Normal);
        assert_eq!(cells[25], BmiCategory::Overweight);
        assert_eq!(cells[30], BmiCategory::Obese);
        assert_eq!(cells[GAUGE_WIDTH - 1], BmiCategory::Obese);
    }

    #[test]
    fn test_marker_clamped() {
        assert_eq!(marker_index(0.0, GAUGE_WIDTH), 0);
        assert_eq!(marker_index(24.22, GAUGE_WIDTH), 24);
        assert_eq!(marker_index(50.0, GAUGE_WIDTH), GAUGE_WIDTH - 1);
        assert_eq!(marker_index(75.0, GAUGE_WIDTH), GAUGE_WIDTH - 1);
    }

    #[test]
    fn test_render_contains_value() {
        let result = BmiResult {
            value: 30.864,
            category: BmiCategory::Obese,
        };
        let mut buf = Vec::new();
        render(&mut buf, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("▲ 30.86"));
        assert!(text.contains("18.5"));
    }

    #[test]
    fn test_scale_line_labels() {
        let line = scale_line(GAUGE_WIDTH);
        assert!(line.starts_with('0'));
        assert!(line.ends_with("50"));
    }
}
