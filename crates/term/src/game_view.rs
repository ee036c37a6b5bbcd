//! GameView: maps a `core::GameSnapshot` and action results into styled lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActionError, GameSnapshot, Outcome};
use crate::style::{self, piece_color, Line, Span, SpanStyle};
use crate::types::{GameAction, Piece, PieceKind};

const RULE: &str = "==========================================";

/// Renders the menu, the piece panel and action messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Print the piece legend under the panel.
    pub show_legend: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_legend: true }
    }
}

impl GameView {
    pub fn new(show_legend: bool) -> Self {
        Self { show_legend }
    }

    pub fn banner(&self) -> Vec<Line> {
        vec![
            Line::from(Span::new(RULE, style::FRAME)),
            Line::from(Span::new("        WELCOME TO TETRIS STACK", style::TITLE)),
            Line::from(Span::new("   Upcoming pieces and reserve control", style::LABEL)),
            Line::from(Span::new(RULE, style::FRAME)),
        ]
    }

    pub fn menu(&self) -> Vec<Line> {
        let mut lines = vec![
            Line::new(),
            Line::from(Span::new("            TETRIS STACK - MENU", style::TITLE)),
            Line::from(Span::new(RULE, style::FRAME)),
        ];
        for action in GameAction::ALL {
            lines.push(
                Line::new()
                    .with(Span::new(format!(" {}. ", action.menu_number()), style::LABEL))
                    .with(Span::plain(action.label())),
            );
        }
        lines.push(
            Line::new()
                .with(Span::new(" 0. ", style::LABEL))
                .with(Span::plain("Exit")),
        );
        lines.push(Line::from(Span::new(RULE, style::FRAME)));
        lines
    }

    pub fn prompt(&self) -> String {
        format!("Choose an option (0-{}): ", GameAction::ALL.len())
    }

    /// The queue and reserve panel.
    pub fn render(&self, snap: &GameSnapshot) -> Vec<Line> {
        let mut lines = vec![
            Line::new(),
            Line::from(Span::new(RULE, style::FRAME)),
            Line::from(Span::new("              UPCOMING PIECES", style::TITLE)),
            Line::from(Span::new(RULE, style::FRAME)),
        ];

        lines.push(slots_line(
            "Queue   (front -> back): ",
            &snap.queue,
            snap.queue_capacity,
        ));
        lines.push(slots_line(
            "Reserve (top -> bottom): ",
            &snap.reserve,
            snap.reserve_capacity,
        ));

        if self.show_legend {
            lines.push(Line::new());
            lines.push(Line::from(Span::new("Legend:", style::LABEL)));
            let mut legend = Line::new();
            for kind in PieceKind::ALL {
                legend
                    .push(Span::plain("  "))
                    .push(Span::new(kind.as_char().to_string(), kind_style(kind)))
                    .push(Span::plain(format!(" = {}", kind.describe())));
            }
            lines.push(legend);
        }

        lines.push(Line::new());
        lines.push(Line::from(Span::new("Statistics:", style::LABEL)));
        lines.push(Line::from(Span::plain(format!(
            "  Pieces in queue:   {}/{}",
            snap.queue.len(),
            snap.queue_capacity
        ))));
        lines.push(Line::from(Span::plain(format!(
            "  Pieces in reserve: {}/{}",
            snap.reserve.len(),
            snap.reserve_capacity
        ))));
        let mut next = Line::from(Span::plain("  Next piece:        "));
        match snap.next_piece() {
            Some(piece) => {
                next.push(piece_span(piece));
            }
            None => {
                next.push(Span::new("none", style::EMPTY_SLOT));
            }
        }
        lines.push(next);
        lines.push(Line::from(Span::new(RULE, style::FRAME)));
        lines
    }

    /// Message for the result of one action.
    pub fn outcome(&self, action: GameAction, result: &Result<Outcome, ActionError>) -> Vec<Line> {
        let mut lines = vec![Line::new().with(Span::new(
            format!("> Action: {}", action.label()),
            style::TITLE,
        ))];

        match result {
            Ok(Outcome::Played(p)) => lines.push(ok_with_piece("Piece played: ", *p)),
            Ok(Outcome::Reserved(p)) => lines.push(ok_with_piece("Piece reserved: ", *p)),
            Ok(Outcome::UsedReserved(p)) => {
                lines.push(ok_with_piece("Reserved piece used: ", *p))
            }
            Ok(Outcome::Inserted(p)) => lines.push(ok_with_piece("Piece added at the back: ", *p)),
            Ok(Outcome::Swapped(report)) => {
                let mut to_queue = Line::from(Span::new("Moved to queue:   ", style::OK));
                for &p in &report.to_queue {
                    to_queue.push(piece_span(p)).push(Span::plain(" "));
                }
                let mut to_reserve = Line::from(Span::new("Moved to reserve: ", style::OK));
                for &p in &report.to_reserve {
                    to_reserve.push(piece_span(p)).push(Span::plain(" "));
                }
                lines.push(to_queue);
                lines.push(to_reserve);
            }
            Ok(Outcome::Viewed) => {}
            Err(err) => lines.push(Line::from(Span::new(format!("ERROR: {err}"), style::ERROR))),
        }
        lines
    }

    pub fn invalid_choice(&self, input: &str) -> Vec<Line> {
        vec![Line::from(Span::new(
            format!(
                "Invalid option '{}'. Please choose an option from 0 to {}.",
                input.trim(),
                GameAction::ALL.len()
            ),
            style::ERROR,
        ))]
    }

    pub fn farewell(&self) -> Vec<Line> {
        vec![
            Line::new(),
            Line::from(Span::new("Closing Tetris Stack...", style::LABEL)),
            Line::from(Span::new("Thanks for playing!", style::OK)),
        ]
    }
}

fn kind_style(kind: PieceKind) -> SpanStyle {
    SpanStyle::fg(piece_color(kind)).bold()
}

fn piece_span(piece: Piece) -> Span {
    Span::new(piece.to_string(), kind_style(piece.kind))
}

fn ok_with_piece(label: &str, piece: Piece) -> Line {
    Line::new()
        .with(Span::new(label, style::OK))
        .with(piece_span(piece))
}

fn slots_line(label: &str, pieces: &[Piece], capacity: usize) -> Line {
    let mut line = Line::from(Span::new(label, style::LABEL));
    for &piece in pieces {
        line.push(piece_span(piece)).push(Span::plain(" "));
    }
    for _ in pieces.len()..capacity {
        line.push(Span::new("[   ]", style::EMPTY_SLOT))
            .push(Span::plain(" "));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameController;
    use crate::style::plain_text;

    #[test]
    fn render_lists_queue_front_to_back() {
        let game = GameController::new(1);
        let text = plain_text(&GameView::default().render(&game.snapshot()));
        let queue_line = text
            .lines()
            .find(|l| l.starts_with("Queue"))
            .unwrap()
            .to_string();
        let positions: Vec<usize> = (0..5)
            .map(|id| queue_line.find(&format!(" {}]", id)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn render_shows_empty_reserve_slots() {
        let game = GameController::new(1);
        let text = plain_text(&GameView::default().render(&game.snapshot()));
        let reserve_line = text.lines().find(|l| l.starts_with("Reserve")).unwrap();
        assert_eq!(reserve_line.matches("[   ]").count(), 3);
        assert!(text.contains("Pieces in reserve: 0/3"));
        assert!(text.contains("Pieces in queue:   5/5"));
    }

    #[test]
    fn legend_can_be_hidden() {
        let game = GameController::new(1);
        let text = plain_text(&GameView::new(false).render(&game.snapshot()));
        assert!(!text.contains("Legend"));
    }

    #[test]
    fn outcome_reports_error_message() {
        let view = GameView::default();
        let lines = view.outcome(GameAction::UseReserved, &Err(ActionError::StackEmpty));
        let text = plain_text(&lines);
        assert!(text.contains("ERROR"));
        assert!(text.contains("reserve stack is empty"));
    }

    #[test]
    fn outcome_reports_played_piece() {
        let view = GameView::default();
        let piece = Piece::new(PieceKind::O, 0);
        let text = plain_text(&view.outcome(GameAction::Play, &Ok(Outcome::Played(piece))));
        assert!(text.contains("Piece played: [O 0]"));
    }

    #[test]
    fn menu_lists_every_action_and_exit() {
        let text = plain_text(&GameView::default().menu());
        for action in GameAction::ALL {
            assert!(text.contains(action.label()));
        }
        assert!(text.contains(" 0. Exit"));
    }
}
