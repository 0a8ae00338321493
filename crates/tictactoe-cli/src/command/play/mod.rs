use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use tictactoe_engine::{Coin, Mark, RngCoin, StartChoice};

use crate::tui::Tui;

use self::app::PlayApp;

mod app;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum FirstPlayer {
    X,
    O,
    Random,
}

impl From<FirstPlayer> for StartChoice {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::X => StartChoice::Fixed(Mark::X),
            FirstPlayer::O => StartChoice::Fixed(Mark::O),
            FirstPlayer::Random => StartChoice::Random,
        }
    }
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Skip the start screen and begin with this player
    #[clap(long, value_enum)]
    first: Option<FirstPlayer>,
    /// Seed for picking a random first player (deterministic sessions)
    #[clap(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { first, seed } = arg;

    let coin: Box<dyn Coin> = match seed {
        Some(seed) => Box::new(RngCoin::new(Pcg64Mcg::seed_from_u64(*seed))),
        None => Box::new(RngCoin::from_os_rng()),
    };

    let mut app = PlayApp::new(coin);
    if let Some(first) = first {
        app.start((*first).into());
    }

    Tui::new().run(&mut app)?;

    let tally = app.tally();
    tracing::info!(
        x_wins = tally.wins(Mark::X),
        o_wins = tally.wins(Mark::O),
        ties = tally.ties(),
        "session ended"
    );
    Ok(())
}
