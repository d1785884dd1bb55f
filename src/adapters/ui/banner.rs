//! Welcome banner: "BMI Calculator" in FIGlet standard font, striped with the gauge bands.

use crate::adapters::ui::gauge::band_color;
use crate::domain::BmiCategory;
use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("BMI Calculator").map(|fig| fig.to_string()))
        .unwrap_or_else(|| "BMI Calculator\n".to_string())
}

/// Band whose colour paints line `line` of a `total`-line banner, top to bottom
/// from Underweight to Obese.
fn stripe(line: usize, total: usize) -> BmiCategory {
    let bands = BmiCategory::ALL.len();
    let idx = line * bands / total.max(1);
    BmiCategory::ALL[idx.min(bands - 1)]
}

/// Prints the banner, then the version and tagline.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art();
    let lines: Vec<&str> = art.lines().filter(|l| !l.trim().is_empty()).collect();

    for (i, line) in lines.iter().enumerate() {
        let _ = out.queue(SetForegroundColor(band_color(stripe(i, lines.len()))));
        let _ = out.queue(Print(format!("{line}\r\n")));
    }
    let _ = out.queue(ResetColor);

    let _ = out.queue(SetForegroundColor(Color::Green));
    let _ = out.queue(Print(format!(
        "v{}  Know Your Numbers, Empower Your Health.\r\n",
        env!("CARGO_PKG_VERSION")
    )));
    let _ = out.queue(ResetColor);
    let _ = out.queue(Print(
        "A single number is the first step on your wellness journey.\r\n\r\n",
    ));
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripes_run_through_every_band() {
        let total = 6;
        let stripes: Vec<_> = (0..total).map(|i| stripe(i, total)).collect();
        assert_eq!(stripes.first(), Some(&BmiCategory::Underweight));
        assert_eq!(stripes.last(), Some(&BmiCategory::Obese));
        for category in BmiCategory::ALL {
            assert!(stripes.contains(&category));
        }
    }

    #[test]
    fn test_stripe_single_line() {
        assert_eq!(stripe(0, 1), BmiCategory::Underweight);
        assert_eq!(stripe(0, 0), BmiCategory::Underweight);
    }

    #[test]
    fn test_banner_art_not_empty() {
        assert!(!banner_art().trim().is_empty());
    }
}
