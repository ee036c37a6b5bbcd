//! Line mapping from menu input to game actions.

use crate::types::GameAction;

/// What the player picked at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Action(GameAction),
    Exit,
}

/// Map one input line to a menu choice.
///
/// Accepts the menu number (`0` exits) or an action name such as `play`
/// or `swap3`. Surrounding whitespace and case are ignored.
pub fn parse_choice(line: &str) -> Option<MenuChoice> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if should_quit(line) {
        return Some(MenuChoice::Exit);
    }

    if let Ok(n) = line.parse::<u8>() {
        return GameAction::from_menu_number(n).map(MenuChoice::Action);
    }

    GameAction::from_str(line).map(MenuChoice::Action)
}

/// Check if the line asks to leave the game.
pub fn should_quit(line: &str) -> bool {
    matches!(
        line.trim().to_lowercase().as_str(),
        "0" | "q" | "quit" | "exit"
    )
}
