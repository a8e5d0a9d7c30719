use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::{Color, EMPTY_SYMBOL};
use crate::coordinate::{Coordinate, BOARD_SIZE, NUM_SQUARES};
use crate::error::BoardError;

/// An Othello position: one occupancy mask per color.
///
/// The board only answers questions about the position; playing moves and
/// keeping track of whose turn it is belongs to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    /// Standard starting position: White on D4 and E5, Black on E4 and D5.
    pub fn new() -> Self {
        Board {
            // D5 and E4
            black: Bitboard::new(0x0000_0008_1000_0000),
            // D4 and E5
            white: Bitboard::new(0x0000_0010_0800_0000),
        }
    }

    pub fn empty() -> Self {
        Board {
            black: Bitboard::zero(),
            white: Bitboard::zero(),
        }
    }

    /// Board from two occupancy masks, which must not overlap.
    pub fn from_bitboards(black: Bitboard, white: Bitboard) -> Result<Self, BoardError> {
        let overlap = black & white;
        if !overlap.is_empty() {
            return Err(BoardError::out_of_range(
                "overlapping squares",
                overlap.value() as i128,
            ));
        }
        Ok(Board { black, white })
    }

    pub fn from_algebraic_lists<B, W, S>(black: B, white: W) -> Result<Self, BoardError>
    where
        B: IntoIterator<Item = S>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Board::from_bitboards(
            Bitboard::from_algebraic_list(black)?,
            Bitboard::from_algebraic_list(white)?,
        )
    }

    #[inline]
    pub fn pieces(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    pub fn count(&self, color: Color) -> u32 {
        self.pieces(color).count()
    }

    /// Number of free squares.
    pub fn nb_empty(&self) -> u32 {
        self.empty_squares().count()
    }

    /// Number of occupied squares.
    pub fn nb_occupied(&self) -> u32 {
        NUM_SQUARES as u32 - self.nb_empty()
    }

    /// Legal placements for `color` against the other color's pieces.
    pub fn possible_moves(&self, color: Color) -> Bitboard {
        self.pieces(color).possible_moves(self.pieces(color.opposite()))
    }

    pub fn get_piece(&self, coord: &Coordinate) -> Result<Option<Color>, BoardError> {
        let idx = coord.to_bitboard_index()?;
        if self.black.get(idx) {
            Ok(Some(Color::Black))
        } else if self.white.get(idx) {
            Ok(Some(Color::White))
        } else {
            Ok(None)
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// 8 lines of `B`, `W` or `-`, row 1 first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bit 63 is A1, so walking bits downwards reads the grid row by row
        for (i, idx) in (0..NUM_SQUARES).rev().enumerate() {
            let c = if self.black.get(idx) {
                Color::Black.symbol()
            } else if self.white.get(idx) {
                Color::White.symbol()
            } else {
                EMPTY_SYMBOL
            };
            write!(f, "{}", c)?;
            if i % BOARD_SIZE == BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let board = Board::new();
        assert_eq!(
            board.pieces(Color::Black),
            Bitboard::from_algebraic_list(["E4", "D5"]).unwrap()
        );
        assert_eq!(
            board.pieces(Color::White),
            Bitboard::from_algebraic_list(["D4", "E5"]).unwrap()
        );
        assert_eq!(board.nb_empty(), 8 * 8 - 4);
        assert_eq!(board.nb_occupied(), 4);
        assert_eq!(board.count(Color::Black), 2);
    }

    #[test]
    fn test_start_moves() {
        let board = Board::new();
        assert_eq!(
            board.possible_moves(Color::Black),
            Bitboard::from_algebraic_list(["D3", "C4", "F5", "E6"]).unwrap()
        );
        assert_eq!(board.possible_moves(Color::White).count(), 4);
    }

    #[test]
    fn test_from_bitboards_overlap() {
        let a = Bitboard::from_algebraic_list(["A1", "B1"]).unwrap();
        let b = Bitboard::from_algebraic_list(["B1"]).unwrap();
        assert!(matches!(
            Board::from_bitboards(a, b),
            Err(BoardError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_get_piece() {
        let board = Board::new();
        let at = |s: &str| board.get_piece(&s.parse().unwrap()).unwrap();
        assert_eq!(at("D4"), Some(Color::White));
        assert_eq!(at("E4"), Some(Color::Black));
        assert_eq!(at("A1"), None);
        assert!(board.get_piece(&Coordinate::new(0, 8)).is_err());
    }

    #[test]
    fn test_example_position() {
        let black = Bitboard::new(
            0b01000000_11011110_01000110_00101110_00011010_00011100_00000000_00000000,
        );
        let white = Bitboard::new(
            0b00111110_00100000_00111000_00010000_00100000_00000000_00000000_00000000,
        );
        let board = Board::from_bitboards(black, white).unwrap();
        let moves = board.possible_moves(Color::White);

        assert_eq!(
            moves.value(),
            0b10000000_00000001_10000001_11000001_01000101_00000011_00011010_00000000
        );
        assert!((moves & board.occupied()).is_empty());
        assert_eq!(moves, white.possible_moves(black));
    }

    #[test]
    fn test_display() {
        let board = Board::new();
        let expected = "--------\n\
                        --------\n\
                        --------\n\
                        ---WB---\n\
                        ---BW---\n\
                        --------\n\
                        --------\n\
                        --------\n";
        assert_eq!(board.to_string(), expected);
        assert_eq!(Board::empty().to_string(), "--------\n".repeat(8));
    }
}
