use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 8;

/// Number of squares (and bits) on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

const LETTERS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// A board position: `x` is the column (A = 0), `y` the row (1 = 0).
///
/// The bitboard stores A1 in bit 63 and H8 in bit 0, so converting between a
/// bit index and a position always goes through the 63-complement
/// (see [`Coordinate::to_bitboard`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Coordinate { x, y }
    }

    /// Linear index to `(x, y)`. No range check.
    #[inline]
    pub fn from_linear(index: usize) -> Self {
        Coordinate {
            x: index % BOARD_SIZE,
            y: index / BOARD_SIZE,
        }
    }

    /// `(x, y)` to linear index `x + 8y`. Only fails when the index does not
    /// fit in a `usize`; the board range is not checked.
    #[inline]
    pub fn to_linear(&self) -> Result<usize, BoardError> {
        let row_start = BOARD_SIZE
            .checked_mul(self.y)
            .ok_or_else(|| BoardError::out_of_range("row", self.y as i128))?;
        row_start
            .checked_add(self.x)
            .ok_or_else(|| BoardError::out_of_range("column", self.x as i128))
    }

    /// Bit index to board position (bit 63 is A1, bit 0 is H8).
    pub fn to_bitboard(index: usize) -> Result<Self, BoardError> {
        if index >= NUM_SQUARES {
            return Err(BoardError::out_of_range("bit index", index as i128));
        }
        Ok(Coordinate::from_linear(NUM_SQUARES - 1 - index))
    }

    /// Board position to bit index, the inverse of [`Coordinate::to_bitboard`].
    pub fn to_bitboard_index(&self) -> Result<usize, BoardError> {
        if self.x >= BOARD_SIZE {
            return Err(BoardError::out_of_range("column", self.x as i128));
        }
        if self.y >= BOARD_SIZE {
            return Err(BoardError::out_of_range("row", self.y as i128));
        }
        Ok(NUM_SQUARES - 1 - self.to_linear()?)
    }

    /// Parse a two character algebraic coordinate such as `"D3"`.
    ///
    /// The letter must be an uppercase `A`-`H`. The digit is only checked to be
    /// a non-zero decimal digit, so `"A9"` parses to `(0, 8)`; callers that
    /// need board bounds must check the row themselves.
    pub fn from_algebric(alg: &str) -> Result<Self, BoardError> {
        let invalid = || BoardError::InvalidCoordinate(alg.to_string());

        let mut chars = alg.chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => (letter, digit),
            _ => return Err(invalid()),
        };

        let x = LETTERS
            .iter()
            .position(|&l| l == letter)
            .ok_or_else(invalid)?;
        let y = match digit.to_digit(10) {
            Some(d) if d != 0 => d as usize - 1,
            _ => return Err(invalid()),
        };

        Ok(Coordinate { x, y })
    }

    /// Render as algebraic notation, `(0, 0)` is `"A1"`.
    pub fn to_algebric(&self) -> Result<String, BoardError> {
        let letter = LETTERS
            .get(self.x)
            .ok_or_else(|| BoardError::out_of_range("column", self.x as i128))?;
        let rank = self
            .y
            .checked_add(1)
            .ok_or_else(|| BoardError::out_of_range("row", self.y as i128))?;
        Ok(format!("{}{}", letter, rank))
    }

    pub fn is_valid(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from(point: (usize, usize)) -> Self {
        Coordinate::new(point.0, point.1)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::from_algebric(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (LETTERS.get(self.x), self.y.checked_add(1)) {
            (Some(letter), Some(rank)) => write!(f, "{}{}", letter, rank),
            _ => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
