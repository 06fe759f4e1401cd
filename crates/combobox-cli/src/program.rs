//! Interactive terminal runner.
//!
//! Draws the combobox on stderr in the alternate screen and feeds it
//! crossterm events until a value is committed or the user gives up.

use std::io::{self, Write};

use anyhow::{Context, Result};
use combobox::message::FocusMsg;
use combobox::{
    ChangeEvent, Cmd, Combobox, KeyMsg, KeyType, Message, Model, from_crossterm_key,
    from_crossterm_mouse,
};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};

/// How an interactive run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A value was committed.
    Committed(ChangeEvent),
    /// The user quit without choosing.
    Aborted,
}

/// Terminal options for a run.
#[derive(Debug, Clone, Copy)]
pub struct ProgramOptions {
    /// Capture mouse events.
    pub mouse: bool,
}

/// Runs the combobox until it commits or is aborted.
pub fn run(combo: Combobox, options: ProgramOptions) -> Result<Outcome> {
    let mut writer = io::stderr();

    enable_raw_mode().context("enabling raw mode")?;
    execute!(writer, EnterAlternateScreen, Hide)?;
    if options.mouse {
        execute!(writer, EnableMouseCapture)?;
    }

    let result = event_loop(combo, &mut writer);

    if options.mouse {
        let _ = execute!(writer, DisableMouseCapture);
    }
    let _ = execute!(writer, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    result
}

fn event_loop<W: Write>(mut combo: Combobox, writer: &mut W) -> Result<Outcome> {
    if let Some(cmd) = combo.init()
        && let Some(outcome) = handle_command(cmd)
    {
        return Ok(outcome);
    }
    combo.update(Message::new(FocusMsg));

    let mut last_view = String::new();
    render(&combo, writer, &mut last_view)?;

    loop {
        let msg = match event::read().context("reading terminal events")? {
            Event::Key(key_event) => {
                // Only handle key press events, not release
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                let key = from_crossterm_key(key_event.code, key_event.modifiers);
                if key.key_type == KeyType::CtrlC {
                    return Ok(Outcome::Aborted);
                }
                if key.key_type == KeyType::Esc && !combo.is_expanded() {
                    return Ok(Outcome::Aborted);
                }
                if !combo.focused() && key.key_type != KeyType::Esc {
                    combo.update(Message::new(FocusMsg));
                }
                Message::new(key)
            }
            Event::Mouse(mouse_event) => Message::new(from_crossterm_mouse(mouse_event)),
            Event::Paste(text) => {
                Message::new(KeyMsg::from_runes(text.chars().collect()).with_paste())
            }
            Event::Resize(..) => {
                last_view.clear();
                render(&combo, writer, &mut last_view)?;
                continue;
            }
            Event::FocusGained | Event::FocusLost => continue,
        };

        if let Some(cmd) = combo.update(msg)
            && let Some(outcome) = handle_command(cmd)
        {
            return Ok(outcome);
        }
        render(&combo, writer, &mut last_view)?;
    }
}

fn handle_command(cmd: Cmd) -> Option<Outcome> {
    let msg = cmd.execute()?;
    msg.downcast::<ChangeEvent>().map(Outcome::Committed)
}

fn render<W: Write>(combo: &Combobox, writer: &mut W, last_view: &mut String) -> Result<()> {
    let view = combo.view();

    // Only redraw when the view changed; the cursor may move without it
    if view != *last_view {
        execute!(writer, MoveTo(0, 0), Clear(ClearType::All))?;
        // Raw mode does not return the carriage on line feed
        write!(writer, "{}", view.replace('\n', "\r\n"))?;
        *last_view = view;
    }

    if combo.focused() {
        let column = u16::try_from(combo.cursor_column()).unwrap_or(u16::MAX);
        execute!(writer, MoveTo(column, 0), Show)?;
    } else {
        execute!(writer, Hide)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_command_detects_commit() {
        let cmd = Cmd::new(|| Message::new(ChangeEvent::new("Apple")));
        assert_eq!(
            handle_command(cmd),
            Some(Outcome::Committed(ChangeEvent::new("Apple")))
        );
        assert_eq!(handle_command(Cmd::new(|| Message::new(1u8))), None);
    }

    #[test]
    fn render_skips_unchanged_view() {
        let mut combo = Combobox::new("fruit");
        combo.set_options(["Apple"]);
        let mut out = Vec::new();
        let mut last_view = String::new();

        render(&combo, &mut out, &mut last_view).unwrap();
        let first = String::from_utf8_lossy(&out).to_string();
        assert!(first.contains("> "));
        assert_eq!(last_view, combo.view());

        out.clear();
        render(&combo, &mut out, &mut last_view).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains("> "));
    }
}
