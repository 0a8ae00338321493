use tictactoe_engine::{Board, Outcome, winning_line};

use crate::view;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Nine cells in row-major order: `X`, `O`, and `.` for empty
    board: Board,
}

pub(crate) fn run(arg: &EvaluateArg) {
    println!("{}", arg.board);
    println!();
    println!("{}", report(&arg.board));
}

fn report(board: &Board) -> String {
    let outcome = Outcome::of(board);
    let message = view::outcome_message(outcome).unwrap_or_else(|| "In progress".to_owned());
    match winning_line(board) {
        Some((_, [a, b, c])) => format!("{message} (cells {a}, {b}, {c})"),
        None => message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_of(s: &str) -> String {
        report(&s.parse().unwrap())
    }

    #[test]
    fn test_reports() {
        assert_eq!(report_of("........."), "In progress");
        assert_eq!(report_of("X..X..X.."), "X Wins! (cells 0, 3, 6)");
        assert_eq!(report_of("..O.O.O.."), "O Wins! (cells 2, 4, 6)");
        assert_eq!(report_of("XOXXOOOXX"), "It's a Tie!");
    }

    #[test]
    fn test_full_winning_board_is_not_a_tie() {
        assert_eq!(report_of("XXXOOXXOO"), "X Wins! (cells 0, 1, 2)");
    }
}
