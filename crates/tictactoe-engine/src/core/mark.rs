/// A player symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Mark {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Mark {
    /// Both marks, X first.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// Returns the other player's mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::ALL {
            assert_ne!(mark.opponent(), mark);
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn test_char_conversion() {
        for mark in Mark::ALL {
            assert_eq!(Mark::from_char(mark.as_char()), Some(mark));
            assert_eq!(mark.to_string(), mark.as_char().to_string());
        }
        assert_eq!(Mark::from_char('x'), Some(Mark::X));
        assert_eq!(Mark::from_char('o'), Some(Mark::O));
        assert_eq!(Mark::from_char('.'), None);
        assert_eq!(Mark::from_char('0'), None);
    }
}
