//! Headless host that drives the overlay from a script of input events.
//!
//! One event per line; blank lines and `#` comments are skipped. A `type`
//! line is never cut at `#`, so queries like `C# guide` survive:
//!
//! ```text
//! press ctrl+k      # global key press (any combo or key name)
//! type nacos        # input text changed (rest of line, verbatim)
//! down / up / enter # keys pressed inside the focused input
//! esc               # Escape
//! hover 2 / click 0 # pointer over / on a result row
//! outside / close   # click outside, close control
//! ```

use crate::overlay::{Host, HostEvent, Key, KeyPress, Modifiers, OverlayView, QuickSearch};
use crate::state::NavState;
use anyhow::{Context, Result, bail};
use std::fmt::Write as _;

/// Parse a replay script into host events.
pub fn parse_script(script: &str) -> Result<Vec<(String, HostEvent)>> {
    let mut events = Vec::new();

    for (number, raw) in script.lines().enumerate() {
        let line = raw.trim_start();

        // Everything after "type " is the new input value, spaces and `#` included
        if let ("type", value) = line.split_once(' ').unwrap_or((line, "")) {
            events.push((line.trim_end().to_string(), HostEvent::InputChanged(value.to_string())));
            continue;
        }

        let trimmed = line.split_once('#').map_or(line, |(code, _)| code).trim();
        if trimmed.is_empty() {
            continue;
        }

        let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
        let event = match command {
            "press" => HostEvent::Key(
                parse_key_press(rest.trim()).with_context(|| format!("line {}", number + 1))?,
            ),
            "down" => HostEvent::Key(KeyPress::new(Key::ArrowDown).in_input()),
            "up" => HostEvent::Key(KeyPress::new(Key::ArrowUp).in_input()),
            "enter" => HostEvent::Key(KeyPress::new(Key::Enter).in_input()),
            "esc" | "escape" => HostEvent::Key(KeyPress::new(Key::Escape).in_input()),
            "hover" => HostEvent::ResultHovered(parse_row(rest, number)?),
            "click" => HostEvent::ResultClicked(parse_row(rest, number)?),
            "outside" => HostEvent::PointerDownOutside,
            "close" => HostEvent::CloseClicked,
            other => bail!("line {}: unknown command '{}'", number + 1, other),
        };
        events.push((trimmed.to_string(), event));
    }

    Ok(events)
}

fn parse_row(rest: &str, number: usize) -> Result<usize> {
    rest.trim()
        .parse::<usize>()
        .with_context(|| format!("line {}: expected a row number, got '{}'", number + 1, rest.trim()))
}

/// Parse `ctrl+shift+k`, `esc`, `enter`, `a` and the like into a key press
/// delivered outside the search input.
pub fn parse_key_press(combo: &str) -> Result<KeyPress> {
    let mut modifiers = Modifiers::NONE;
    let mut parts: Vec<&str> = combo.split('+').map(str::trim).collect();
    let Some(key) = parts.pop().filter(|key| !key.is_empty()) else {
        bail!("missing key in '{}'", combo);
    };

    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.control = true,
            "cmd" | "command" | "meta" | "super" => modifiers.meta = true,
            "alt" | "option" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            "mod" | "primary" => {
                modifiers = Modifiers {
                    control: modifiers.control || !cfg!(target_os = "macos"),
                    meta: modifiers.meta || cfg!(target_os = "macos"),
                    ..modifiers
                }
            }
            other => bail!("unknown modifier '{}'", other),
        }
    }

    let key = match key.to_ascii_lowercase().as_str() {
        "esc" | "escape" => Key::Escape,
        "enter" | "return" => Key::Enter,
        "up" => Key::ArrowUp,
        "down" => Key::ArrowDown,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => Key::Other,
            }
        }
    };

    Ok(KeyPress::new(key).with_modifiers(modifiers))
}

/// Records host calls as transcript lines.
#[derive(Debug, Default)]
struct TranscriptHost {
    calls: Vec<String>,
}

impl Host for TranscriptHost {
    fn navigate(&mut self, path: &str) {
        self.calls.push(format!("navigate {}", path));
    }

    fn close_overlay(&mut self) {
        self.calls.push("close overlay".to_string());
    }

    fn focus_input(&mut self) {
        self.calls.push("focus input".to_string());
    }
}

/// Run a script against a freshly mounted overlay and return a transcript.
pub fn run_replay(state: &NavState, script: &str) -> Result<String> {
    let events = parse_script(script)?;
    let mut overlay = QuickSearch::mount(state.index().clone(), state.shortcut(), TranscriptHost::default());
    let mut out = String::new();
    let mut seen_calls = 0;

    for (source, event) in events {
        overlay.handle(event);
        let _ = writeln!(out, "> {}", source);

        let calls = &overlay.host().calls;
        for call in &calls[seen_calls..] {
            let _ = writeln!(out, "  {}", call);
        }
        seen_calls = calls.len();

        let _ = writeln!(out, "  {}", describe(overlay.state().view()));
    }

    Ok(out)
}

fn describe(view: OverlayView<'_>) -> String {
    match view {
        OverlayView::Hidden => "[closed]".to_string(),
        OverlayView::Empty => format!("[empty] {}", view.guidance().unwrap_or_default()),
        OverlayView::NoResults { query } => {
            format!("[no results for '{}'] {}", query, view.guidance().unwrap_or_default())
        }
        OverlayView::Results { rows, selected } => {
            let mut line = format!("[{} results]", rows.len());
            if let Some(row) = rows.get(selected) {
                let _ = write!(line, " ▸ {} → {}", row.title, row.path);
            }
            line
        }
    }
}
