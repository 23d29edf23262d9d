//! Replay a recorded input script through the recognizer.
//!
//! Script format, one tick per line:
//!
//! ```text
//! # debug mode, with a pause after the d-pad part
//! UP
//! UP
//! -
//! B+A
//! ```
//!
//! An empty line or `-` is a tick without input. `#` starts a comment;
//! lines holding only a comment are not ticks.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use padcode_core::{ButtonMask, GamePad, SequenceRecognizer, Step};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;

/// Result of a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub ticks: usize,
    /// 1-based ticks on which the sequence completed
    pub completions: Vec<usize>,
    pub active: bool,
    pub final_progress: usize,
}

/// Run the replay command
pub fn run(config: &Config, script: &Path, json: bool) -> Result<()> {
    let content = fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let frames = parse_script(&content)
        .with_context(|| format!("Invalid script {}", script.display()))?;

    let report = replay(&config.sequence, &frames)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for tick in &report.completions {
        println!("Sequence completed at tick {}", tick);
    }
    println!(
        "{} ticks, {} completion(s), progress {}/{}{}",
        report.ticks,
        report.completions.len(),
        report.final_progress,
        config.sequence.len(),
        if report.active { ", unlocked" } else { "" }
    );
    Ok(())
}

/// Parse a script into per-tick frame masks
pub fn parse_script(content: &str) -> Result<Vec<Option<ButtonMask>>> {
    let mut frames = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let (code, comment) = match raw.split_once('#') {
            Some((code, _)) => (code.trim(), true),
            None => (raw.trim(), false),
        };

        match code {
            "" if comment => continue,
            "" | "-" => frames.push(None),
            _ => match code.parse::<ButtonMask>() {
                Ok(mask) => frames.push(Some(mask)),
                Err(e) => bail!("line {}: {}", index + 1, e),
            },
        }
    }

    Ok(frames)
}

/// Feed the frames to a recognizer for `sequence`, one frame per tick
pub fn replay(sequence: &[ButtonMask], frames: &[Option<ButtonMask>]) -> Result<ReplayReport> {
    let pad = Rc::new(GamePad::new());
    let mut recognizer = SequenceRecognizer::builder()
        .sequence(sequence.iter().copied())
        .input_source(Rc::clone(&pad))
        .on_complete(|r: &SequenceRecognizer<ButtonMask>| {
            debug!(completions = r.completions(), "Sequence completed");
        })
        .build()?;

    let mut completions = Vec::new();
    for (index, frame) in frames.iter().enumerate() {
        pad.press(frame.unwrap_or(ButtonMask::NONE));
        let step = recognizer.advance()?;
        if let Step::Reset { lost } = step
            && lost > 0
        {
            debug!(tick = index + 1, lost, "Sequence broken");
        }
        if step.is_completed() {
            completions.push(index + 1);
        }
    }

    Ok(ReplayReport {
        ticks: frames.len(),
        completions,
        active: recognizer.is_active(),
        final_progress: recognizer.progress(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use padcode_core::{PadButton, debug_mode_sequence};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DEBUG_SCRIPT: &str = "\
# debug mode
UP
UP
DOWN
DOWN
-

LEFT
RIGHT
LEFT
RIGHT   # halfway
B
A
START
";

    #[test]
    fn test_parse_script() {
        let frames = parse_script("UP\n-\n\n# comment\nB+A # chord\n").unwrap();
        assert_eq!(
            frames,
            vec![
                Some(PadButton::DpadUp.into()),
                None,
                None,
                Some(PadButton::A | PadButton::B),
            ]
        );
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("UP\nUP\nTURBO\n").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_replay_debug_script() {
        let frames = parse_script(DEBUG_SCRIPT).unwrap();
        let report = replay(&debug_mode_sequence(), &frames).unwrap();

        assert_eq!(report.ticks, 13);
        assert_eq!(report.completions, vec![13]);
        assert!(report.active);
        assert_eq!(report.final_progress, 0);
    }

    #[test]
    fn test_replay_wrong_input() {
        let frames = parse_script(&DEBUG_SCRIPT.replace("B\n", "X\n")).unwrap();
        let report = replay(&debug_mode_sequence(), &frames).unwrap();

        assert!(report.completions.is_empty());
        assert!(!report.active);
    }

    #[test]
    fn test_replay_twice() {
        let script = format!("{}{}", DEBUG_SCRIPT, DEBUG_SCRIPT);
        let frames = parse_script(&script).unwrap();
        let report = replay(&debug_mode_sequence(), &frames).unwrap();

        assert_eq!(report.completions, vec![13, 26]);
    }

    #[test]
    fn test_replay_partial() {
        let frames = parse_script("UP\nUP\nDOWN\n").unwrap();
        let report = replay(&debug_mode_sequence(), &frames).unwrap();

        assert!(report.completions.is_empty());
        assert_eq!(report.final_progress, 3);
    }

    #[test]
    fn test_run_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", DEBUG_SCRIPT).unwrap();

        let config = Config::default();
        assert!(run(&config, file.path(), true).is_ok());
        assert!(run(&config, file.path(), false).is_ok());
    }

    #[test]
    fn test_report_json() {
        let report = ReplayReport {
            ticks: 3,
            completions: vec![3],
            active: true,
            final_progress: 0,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["completions"][0], 3);
        assert_eq!(json["active"], true);
    }
}
