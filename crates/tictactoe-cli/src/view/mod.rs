use tictactoe_engine::Outcome;

pub mod layout;
pub mod widgets;

/// Banner text for a finished board, `None` while the game is still going.
pub fn outcome_message(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won(mark) => Some(format!("{mark} Wins!")),
        Outcome::Tied => Some("It's a Tie!".to_owned()),
    }
}
