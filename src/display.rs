//! ANSI terminal rendering of a [`Snapshot`].
//!
//! The layout is
//!
//! ```text
//! You: 3 / CPU: 2
//!
//!       (---)
//! | 1 | 1 | 2 | 0 |
//!   | 0 |CPU| 0 |
//! | 0 | 1 |You| 0 |
//!       (---)
//!
//! あなたのターンです
//! ```
//!
//! with seat A in green and seat B in magenta. The marker above the grid is
//! seat B's reserve, the one below is seat A's; a marker shows the player's
//! name while its token is in reserve. Movable cells are underlined and the
//! selected cell is drawn in reverse video.

use std::fmt::Write;

use crate::core::PlayerId;
use crate::game::{CellView, PlayerView, Snapshot};

const RESET: &str = "\x1b[0m";
const THIN: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const UNDERLINE: &str = "\x1b[4m";
const REVERSE: &str = "\x1b[7m";
const GREEN: &str = "\x1b[32m";
const MAGENTA: &str = "\x1b[35m";

/// Indentation of odd rows and the reserve markers.
const ROW_INDENT: &str = "  ";
const PORTAL_INDENT: &str = "      ";

fn wrap(style: &str, text: &str) -> String {
    format!("{style}{text}{RESET}")
}

fn color_of(player: PlayerId) -> &'static str {
    if player == PlayerId::A {
        GREEN
    } else {
        MAGENTA
    }
}

fn colored(player: PlayerId, text: &str) -> String {
    wrap(color_of(player), text)
}

/// Player name in seat color, bold when it is that player's turn.
fn name_tag(snapshot: &Snapshot, player: &PlayerView) -> String {
    let name = colored(player.id, &player.name);
    if snapshot.current == Some(player.id) {
        wrap(BOLD, &name)
    } else {
        name
    }
}

fn portal(snapshot: &Snapshot, player: Option<&PlayerView>) -> String {
    let inner = match player {
        Some(p) if p.current_cell.is_none() => name_tag(snapshot, p),
        Some(p) => colored(p.id, "---"),
        None => "---".to_string(),
    };
    format!("{PORTAL_INDENT}{}{inner}{}", wrap(THIN, "("), wrap(THIN, ")"))
}

fn cell(snapshot: &Snapshot, view: &CellView) -> String {
    let mut text = match view.token.and_then(|id| snapshot.player(id)) {
        Some(player) => name_tag(snapshot, player),
        None => {
            let num = format!(" {} ", view.strength);
            match view.owner {
                Some(owner) => colored(owner, &num),
                None => num,
            }
        }
    };
    if view.movable {
        text = wrap(UNDERLINE, &text);
    }
    if view.selected {
        text = wrap(REVERSE, &text);
    }
    text
}

/// The status line: whose turn it is, or who won.
#[must_use]
pub fn status_line(snapshot: &Snapshot) -> String {
    let alias = |id: PlayerId| {
        snapshot
            .player(id)
            .map(|p| colored(id, &p.alias))
            .unwrap_or_default()
    };

    match (snapshot.is_game_over, snapshot.winner, snapshot.current) {
        (true, Some(winner), _) => format!("{}の勝ち！", alias(winner)),
        (true, None, _) => "引き分け".to_string(),
        (false, _, Some(current)) => format!("{}のターンです", alias(current)),
        (false, _, None) => String::new(),
    }
}

/// Render the whole screen.
#[must_use]
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let bar = wrap(THIN, "|");

    let score: Vec<String> = snapshot
        .players
        .iter()
        .map(|p| format!("{}: {}", colored(p.id, &p.name), p.point))
        .collect();
    let _ = writeln!(out, "{}", score.join(" / "));
    out.push('\n');

    let _ = writeln!(out, "{}", portal(snapshot, snapshot.player(PlayerId::B)));
    for row in 0..snapshot.rows() {
        if row % 2 == 1 {
            out.push_str(ROW_INDENT);
        }
        out.push_str(&bar);
        for view in snapshot.row(row) {
            out.push_str(&cell(snapshot, view));
            out.push_str(&bar);
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{}", portal(snapshot, snapshot.player(PlayerId::A)));
    out.push('\n');

    out.push_str(&status_line(snapshot));
    out
}

/// Remove ANSI escape sequences, e.g. for logging a frame.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
