//! Interactive mode: drive the recognizer from the keyboard.

use std::io::{self, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, execute, style, terminal};
use padcode_core::{ButtonMask, GamePad, SequenceRecognizer, Step};
use tracing::{debug, info};

use crate::config::Config;
use crate::input::{KeyMap, is_quit_key};
use crate::shutdown::install_ctrlc_handler;
use crate::status::status_line;

/// Keeps the terminal in raw mode until dropped
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Keys read during one tick
struct TickInput {
    pressed: ButtonMask,
    quit: bool,
}

/// Run the keyboard polling loop until Esc, q or Ctrl+C
pub fn run(config: &Config) -> Result<()> {
    let shutdown = install_ctrlc_handler()?;
    let keymap = KeyMap::with_overrides(&config.keys)?;
    let pad = Rc::new(GamePad::new());

    let chime = config.chime;
    let mut recognizer = SequenceRecognizer::builder()
        .sequence(config.sequence.iter().copied())
        .input_source(Rc::clone(&pad))
        .on_complete(move |r: &SequenceRecognizer<ButtonMask>| {
            info!(completions = r.completions(), "Sequence entered");
            if chime {
                // Terminal bell
                print!("\x07");
            }
        })
        .build()?;

    let sequence: Vec<String> = config.sequence.iter().map(|m| m.to_string()).collect();
    println!("Enter the sequence: {}", sequence.join(", "));
    println!("(Press Esc or q to quit)");

    let mut stdout = io::stdout();
    let raw = RawMode::enable()?;
    draw_status(&mut stdout, &recognizer, config)?;

    while !shutdown.is_shutdown() {
        let input = read_tick(&keymap, config.tick())?;
        if input.quit {
            shutdown.trigger();
            break;
        }

        pad.press(input.pressed);
        let step = recognizer.advance()?;
        if step != Step::Idle {
            debug!(?step, pressed = %input.pressed, "Tick");
            draw_status(&mut stdout, &recognizer, config)?;
        }
    }

    drop(raw);
    println!();
    info!(completions = recognizer.completions(), "Stopped watching");
    Ok(())
}

/// Collect the key presses of one tick, waiting at most `tick`
fn read_tick(keymap: &KeyMap, tick: Duration) -> Result<TickInput> {
    let started = Instant::now();
    let mut input = TickInput {
        pressed: ButtonMask::NONE,
        quit: false,
    };

    while let Some(remaining) = tick.checked_sub(started.elapsed()) {
        if !event::poll(remaining).context("Failed to poll keyboard")? {
            break;
        }
        let Event::Key(key) = event::read().context("Failed to read keyboard")? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }
        if is_quit_key(&key) {
            input.quit = true;
            break;
        }
        if let Some(mask) = keymap.lookup(&key) {
            input.pressed = input.pressed | mask;
        }
    }

    Ok(input)
}

fn draw_status(
    out: &mut impl Write,
    recognizer: &SequenceRecognizer<ButtonMask>,
    config: &Config,
) -> Result<()> {
    let line = status_line(
        recognizer.progress(),
        recognizer.len(),
        recognizer.is_active(),
        config.indicator,
    );
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::Print(line)
    )?;
    out.flush()?;
    Ok(())
}
