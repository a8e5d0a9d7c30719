/// Grid character for a square holding no piece.
pub const EMPTY_SYMBOL: char = '-';

/// Side owning a piece. The discriminants are the values exposed to Python.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Color {
    Black = 1,
    White = -1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Character used for this color in the board grid and its serialized form.
    pub fn symbol(&self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }

    /// Inverse of [`Color::symbol`]. Only the exact grid characters match.
    pub fn from_symbol(c: char) -> Option<Color> {
        Color::ALL.into_iter().find(|color| color.symbol() == c)
    }

    pub fn from_int(i: i8) -> Option<Color> {
        Color::ALL.into_iter().find(|&color| color as i8 == i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite().opposite(), Color::White);
    }

    #[test]
    fn test_symbols() {
        for color in Color::ALL {
            assert_eq!(Color::from_symbol(color.symbol()), Some(color));
            assert_ne!(color.symbol(), EMPTY_SYMBOL);
        }
        assert_eq!(Color::from_symbol(EMPTY_SYMBOL), None);
        assert_eq!(Color::from_symbol('b'), None);
        assert_eq!(Color::from_symbol('w'), None);
    }

    #[test]
    fn test_from_int() {
        assert_eq!(Color::from_int(1), Some(Color::Black));
        assert_eq!(Color::from_int(-1), Some(Color::White));
        assert_eq!(Color::from_int(0), None);
    }
}
