//! List pad buttons and their key bindings.

use anyhow::Result;
use padcode_core::PadButton;
use strum::IntoEnumIterator;

use crate::config::Config;
use crate::input::KeyMap;

pub fn run(config: &Config) -> Result<()> {
    let keymap = KeyMap::with_overrides(&config.keys)?;

    println!("{:<12} {:<8} KEYS", "BUTTON", "BIT");
    for button in PadButton::iter() {
        let keys = keymap.keys_for(button);
        println!(
            "{:<12} {:<8} {}",
            button.name(),
            format!("{:#06x}", button.bit()),
            if keys.is_empty() {
                "-".to_string()
            } else {
                keys.join(", ")
            }
        );
    }
    Ok(())
}
