//! Status line shown while watching the keyboard.

use crate::config::IndicatorMode;

const INDICATOR_TEXT: &str = "DEBUG MODE";

/// Render the progress bar, e.g. `[####-------] 4/11`, followed by the
/// unlock indicator when the mode allows it.
pub fn status_line(progress: usize, len: usize, active: bool, indicator: IndicatorMode) -> String {
    let filled = progress.min(len);
    let mut line = format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(len - filled),
        filled,
        len
    );

    if indicator.is_visible(active) {
        line.push_str("  ");
        line.push_str(INDICATOR_TEXT);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_progress() {
        assert_eq!(
            status_line(4, 11, false, IndicatorMode::OnUnlock),
            "[####-------] 4/11"
        );
        assert_eq!(status_line(0, 3, false, IndicatorMode::Never), "[---] 0/3");
    }

    #[test]
    fn test_status_line_indicator() {
        assert_eq!(
            status_line(0, 2, true, IndicatorMode::OnUnlock),
            "[--] 0/2  DEBUG MODE"
        );
        assert_eq!(
            status_line(1, 2, false, IndicatorMode::Always),
            "[#-] 1/2  DEBUG MODE"
        );
        assert_eq!(status_line(0, 2, true, IndicatorMode::Never), "[--] 0/2");
    }
}
