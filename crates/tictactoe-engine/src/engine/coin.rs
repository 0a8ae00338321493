use std::fmt;

use rand::{Rng, SeedableRng as _, rngs::StdRng};

use crate::Mark;

/// Source of the single random draw used to pick a starting player.
pub trait Coin: fmt::Debug {
    /// Returns `true` for heads.
    fn toss(&mut self) -> bool;
}

/// A fair [`Coin`] backed by a random number generator.
#[derive(Debug, Clone)]
pub struct RngCoin<R> {
    rng: R,
}

impl RngCoin<StdRng> {
    /// Creates a coin seeded from the OS's random data source.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R> RngCoin<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Coin for RngCoin<R>
where
    R: Rng + fmt::Debug,
{
    fn toss(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// How the first player of a game is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StartChoice {
    #[display("{_0} Goes First")]
    Fixed(Mark),
    #[display("Random Player Goes First")]
    Random,
}

impl StartChoice {
    /// The choices offered on the start and result screens, in display order.
    pub const ALL: [StartChoice; 3] = [
        StartChoice::Fixed(Mark::X),
        StartChoice::Fixed(Mark::O),
        StartChoice::Random,
    ];

    /// Resolves the choice into a mark, tossing `coin` once for [`StartChoice::Random`].
    ///
    /// Heads means X.
    pub fn resolve<C>(self, coin: &mut C) -> Mark
    where
        C: Coin + ?Sized,
    {
        match self {
            StartChoice::Fixed(mark) => mark,
            StartChoice::Random => {
                if coin.toss() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    /// Coin that always lands the same way.
    #[derive(Debug)]
    pub(crate) struct FixedCoin {
        pub(crate) heads: bool,
        pub(crate) tosses: usize,
    }

    impl FixedCoin {
        pub(crate) fn new(heads: bool) -> Self {
            Self { heads, tosses: 0 }
        }
    }

    impl Coin for FixedCoin {
        fn toss(&mut self) -> bool {
            self.tosses += 1;
            self.heads
        }
    }

    #[test]
    fn test_fixed_choice_does_not_toss() {
        let mut coin = FixedCoin::new(true);
        assert_eq!(StartChoice::Fixed(Mark::O).resolve(&mut coin), Mark::O);
        assert_eq!(StartChoice::Fixed(Mark::X).resolve(&mut coin), Mark::X);
        assert_eq!(coin.tosses, 0);
    }

    #[test]
    fn test_random_choice_tosses_once() {
        let mut coin = FixedCoin::new(true);
        assert_eq!(StartChoice::Random.resolve(&mut coin), Mark::X);
        assert_eq!(coin.tosses, 1);

        let mut coin = FixedCoin::new(false);
        assert_eq!(StartChoice::Random.resolve(&mut coin), Mark::O);
        assert_eq!(coin.tosses, 1);
    }

    #[test]
    fn test_rng_coin_is_roughly_fair() {
        let mut coin = RngCoin::new(Pcg64Mcg::seed_from_u64(42));
        let xs = (0..10_000)
            .filter(|_| StartChoice::Random.resolve(&mut coin) == Mark::X)
            .count();
        assert!(
            (4_700..=5_300).contains(&xs),
            "unbalanced coin: {xs} X out of 10000"
        );
    }

    #[test]
    fn test_seeded_coin_is_deterministic() {
        let mut a = RngCoin::new(Pcg64Mcg::seed_from_u64(3));
        let mut b = RngCoin::new(Pcg64Mcg::seed_from_u64(3));
        for _ in 0..32 {
            assert_eq!(a.toss(), b.toss());
        }
    }

    #[test]
    fn test_choice_labels() {
        let labels = StartChoice::ALL.map(|choice| choice.to_string());
        assert_eq!(
            labels,
            [
                "X Goes First",
                "O Goes First",
                "Random Player Goes First"
            ]
        );
    }
}
