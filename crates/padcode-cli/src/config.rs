//! Host configuration loaded from `padcode.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use padcode_core::{ButtonMask, debug_mode_sequence};
use serde::Deserialize;

/// When the unlock indicator is drawn on the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorMode {
    /// Only once the sequence has been entered
    #[default]
    OnUnlock,
    /// From the start, for debugging the host itself
    Always,
    Never,
}

impl IndicatorMode {
    pub fn is_visible(self, active: bool) -> bool {
        match self {
            IndicatorMode::OnUnlock => active,
            IndicatorMode::Always => true,
            IndicatorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sequence to recognize, one frame mask per step
    pub sequence: Vec<ButtonMask>,
    /// Polling interval in milliseconds
    pub tick_ms: u64,
    /// Ring the terminal bell on completion
    pub chime: bool,
    pub indicator: IndicatorMode,
    /// Key name to pad button overrides, e.g. `space = "A"`
    pub keys: BTreeMap<String, ButtonMask>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequence: debug_mode_sequence(),
            tick_ms: 16,
            chime: true,
            indicator: IndicatorMode::default(),
            keys: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sequence.is_empty() {
            bail!("sequence must contain at least one button");
        }
        if self.sequence.iter().any(|mask| mask.is_empty()) {
            bail!("sequence steps must press at least one button");
        }
        if self.tick_ms == 0 {
            bail!("tick_ms must be greater than zero");
        }
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Replace the sequence with a comma-separated list such as `"UP,UP,B+A"`
    pub fn override_sequence(&mut self, list: &str) -> Result<()> {
        let sequence = list
            .split(',')
            .map(|step| {
                step.parse::<ButtonMask>()
                    .with_context(|| format!("Invalid sequence step '{}'", step.trim()))
            })
            .collect::<Result<Vec<_>>>()?;

        self.sequence = sequence;
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padcode_core::{DEBUG_MODE_CODE, PadButton};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sequence.len(), DEBUG_MODE_CODE.len());
        assert_eq!(config.tick(), Duration::from_millis(16));
        assert_eq!(config.indicator, IndicatorMode::OnUnlock);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            sequence = ["up", "DPAD_DOWN", "B+A"]
            tick_ms = 50
            chime = false
            indicator = "always"

            [keys]
            space = "A"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.sequence,
            vec![
                ButtonMask::from(PadButton::DpadUp),
                ButtonMask::from(PadButton::DpadDown),
                PadButton::A | PadButton::B,
            ]
        );
        assert_eq!(config.tick_ms, 50);
        assert!(!config.chime);
        assert_eq!(config.indicator, IndicatorMode::Always);
        assert_eq!(config.keys.get("space"), Some(&ButtonMask::from(PadButton::A)));
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = Config::parse("chime = false").unwrap();
        assert!(!config.chime);
        assert_eq!(config.sequence, debug_mode_sequence());
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(Config::parse("sequence = []").is_err());
        assert!(Config::parse("tick_ms = 0").is_err());
        assert!(Config::parse(r#"sequence = ["TURBO"]"#).is_err());
        assert!(Config::parse("unknown = 1").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"sequence = ["START"]"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.sequence, vec![ButtonMask::from(PadButton::Start)]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("padcode.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_override_sequence() {
        let mut config = Config::default();
        config.override_sequence("UP, b+a ,start").unwrap();
        assert_eq!(config.sequence.len(), 3);
        assert_eq!(config.sequence[1], PadButton::A | PadButton::B);

        assert!(config.override_sequence("UP,,A").is_err());
    }

    #[test]
    fn test_indicator_visibility() {
        assert!(IndicatorMode::OnUnlock.is_visible(true));
        assert!(!IndicatorMode::OnUnlock.is_visible(false));
        assert!(IndicatorMode::Always.is_visible(false));
        assert!(!IndicatorMode::Never.is_visible(true));
    }
}
