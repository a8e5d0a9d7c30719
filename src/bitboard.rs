use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::coordinate::{Coordinate, BOARD_SIZE, NUM_SQUARES};
use crate::direction::{Direction, ALL_DIRECTIONS};
use crate::error::BoardError;

/// A 64-square occupancy mask. Bit 63 is A1, bit 0 is H8.
///
/// Values are immutable: every operation returns a new `Bitboard`.
///
/// ```
/// use othello_bitboard::bitboard::Bitboard;
///
/// let own = Bitboard::from_algebraic_list(["D5", "E4"]).unwrap();
/// let opponent = Bitboard::from_algebraic_list(["D4", "E5"]).unwrap();
///
/// let moves = own.possible_moves(opponent);
/// assert_eq!(moves.count(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bitboard(u64);

impl Bitboard {
    /// All bits zero.
    #[inline]
    pub const fn zero() -> Self {
        Bitboard(0)
    }

    /// All bits one.
    #[inline]
    pub const fn full() -> Self {
        Bitboard(u64::MAX)
    }

    #[inline]
    pub const fn new(value: u64) -> Self {
        Bitboard(value)
    }

    /// Construct from a wider signed literal, rejecting anything that does not
    /// fit in 64 unsigned bits.
    pub fn from_literal(value: i128) -> Result<Self, BoardError> {
        u64::try_from(value)
            .map(Bitboard)
            .map_err(|_| BoardError::out_of_range("bitboard value", value))
    }

    /// Single bit set at `index`.
    pub fn single(index: usize) -> Result<Self, BoardError> {
        if index >= NUM_SQUARES {
            return Err(BoardError::out_of_range("bit index", index as i128));
        }
        Ok(Bitboard(1u64 << index))
    }

    /// Union of single bits at every index in `indices`.
    pub fn from_indices<I>(indices: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .try_fold(Bitboard::zero(), |acc, i| Ok(acc | Bitboard::single(i)?))
    }

    /// Build a bitboard from algebraic coordinates such as `["A1", "F8"]`.
    ///
    /// Fails as a whole if any coordinate is malformed or off the board.
    pub fn from_algebraic_list<I, S>(algs: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        algs.into_iter().try_fold(Bitboard::zero(), |acc, alg| {
            let index = Coordinate::from_algebric(alg.as_ref())?.to_bitboard_index()?;
            Ok(acc | Bitboard(1u64 << index))
        })
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Test whether bit `index` is set. Indices past 63 are never set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        index < NUM_SQUARES && (self.0 >> index) & 1 != 0
    }

    /// True if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of set bits.
    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Index of the lowest set bit, or `None` if empty.
    #[inline]
    pub fn lowest_bit_index(&self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    #[inline]
    pub fn invert(&self) -> Self {
        Bitboard(!self.0)
    }

    #[inline]
    pub fn and_with(&self, other: Bitboard) -> Self {
        Bitboard(self.0 & other.0)
    }

    #[inline]
    pub fn or_with(&self, other: Bitboard) -> Self {
        Bitboard(self.0 | other.0)
    }

    #[inline]
    pub fn xor_with(&self, other: Bitboard) -> Self {
        Bitboard(self.0 ^ other.0)
    }

    /// Shift all bits towards higher indices by `n` positions. A negative `n`
    /// shifts right instead, and anything at or past 64 yields zero.
    #[inline]
    pub fn shift_left(&self, n: i32) -> Self {
        if n < 0 {
            return self.shift_right_by(n.unsigned_abs());
        }
        self.shift_left_by(n.unsigned_abs())
    }

    /// Shift all bits towards lower indices by `n` positions. A negative `n`
    /// shifts left instead, and anything at or past 64 yields zero.
    #[inline]
    pub fn shift_right(&self, n: i32) -> Self {
        if n < 0 {
            return self.shift_left_by(n.unsigned_abs());
        }
        self.shift_right_by(n.unsigned_abs())
    }

    #[inline]
    fn shift_left_by(&self, n: u32) -> Self {
        Bitboard(self.0.checked_shl(n).unwrap_or(0))
    }

    #[inline]
    fn shift_right_by(&self, n: u32) -> Self {
        Bitboard(self.0.checked_shr(n).unwrap_or(0))
    }

    /// Move every piece one square in `dir`, dropping pieces that would leave
    /// the board. The edge mask is applied after the shift.
    #[inline]
    pub fn shift_direction(&self, dir: Direction) -> Self {
        self.shift_right(dir.shift()).and_with(Bitboard(dir.mask()))
    }

    /// Neighbours of every set bit, in one direction or in all eight.
    pub fn adjacent(&self, dir: Option<Direction>) -> Self {
        match dir {
            Some(dir) => self.shift_direction(dir),
            None => ALL_DIRECTIONS
                .iter()
                .fold(Bitboard::zero(), |acc, &d| acc | self.shift_direction(d)),
        }
    }

    /// Empty squares that flank a run of `opponent` pieces in direction `dir`
    /// starting next to one of our own pieces.
    ///
    /// The frontier advances one square per step and only survives on
    /// opponent squares, so it empties after at most seven steps.
    #[inline]
    pub fn moves_in_direction(&self, opponent: Bitboard, dir: Direction) -> Self {
        let empty = (*self | opponent).invert();
        let mut moves = Bitboard::zero();
        let mut candidates = opponent & self.shift_direction(dir);

        while !candidates.is_empty() {
            let next = candidates.shift_direction(dir);
            moves = moves | (empty & next);
            candidates = opponent & next;
        }

        moves
    }

    /// Every empty square where a piece of ours would flank at least one run
    /// of `opponent` pieces, in any of the eight directions.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn possible_moves(&self, opponent: Bitboard) -> Self {
        self.possible_moves_in_order(opponent, &ALL_DIRECTIONS)
    }

    /// [`Bitboard::possible_moves`] restricted to, and evaluated in, `order`.
    pub fn possible_moves_in_order(&self, opponent: Bitboard, order: &[Direction]) -> Self {
        order.iter().fold(Bitboard::zero(), |moves, &dir| {
            moves | self.moves_in_direction(opponent, dir)
        })
    }

    /// Ascending bit indices whose value equals `bit`.
    pub fn bit_list(&self, bit: bool) -> Vec<usize> {
        if bit {
            self.iter_ones().collect()
        } else {
            self.invert().iter_ones().collect()
        }
    }

    /// Iterate over indices of set bits, lowest first.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator {
        BitIterator { bits: self.0 }
    }

    /// The eight squares of board row `n`, column A first.
    pub fn row(&self, n: i32) -> Result<[bool; BOARD_SIZE], BoardError> {
        let y = Self::line_index("row", n)?;
        let mut out = [false; BOARD_SIZE];
        for (x, square) in out.iter_mut().enumerate() {
            *square = self.get_square(x, y);
        }
        Ok(out)
    }

    /// The eight squares of board column `n`, row 1 first.
    pub fn col(&self, n: i32) -> Result<[bool; BOARD_SIZE], BoardError> {
        let x = Self::line_index("column", n)?;
        let mut out = [false; BOARD_SIZE];
        for (y, square) in out.iter_mut().enumerate() {
            *square = self.get_square(x, y);
        }
        Ok(out)
    }

    fn line_index(what: &'static str, n: i32) -> Result<usize, BoardError> {
        match usize::try_from(n) {
            Ok(i) if i < BOARD_SIZE => Ok(i),
            _ => Err(BoardError::out_of_range(what, n as i128)),
        }
    }

    #[inline]
    fn get_square(&self, x: usize, y: usize) -> bool {
        self.get(NUM_SQUARES - 1 - (x + BOARD_SIZE * y))
    }

    /// Bits in index order, bit 63 first.
    pub fn to_bit_sequence(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (i, bit) in out.iter_mut().enumerate() {
            *bit = ((self.0 >> (NUM_SQUARES - 1 - i)) & 1) as u8;
        }
        out
    }

    /// 64 characters of `0`/`1`, bit 63 first.
    pub fn to_binary_string(&self) -> String {
        format!("{:064b}", self.0)
    }
}

impl From<u64> for Bitboard {
    fn from(value: u64) -> Self {
        Bitboard(value)
    }
}

impl From<Bitboard> for u64 {
    fn from(bb: Bitboard) -> Self {
        bb.0
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        self.and_with(rhs)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        self.or_with(rhs)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        self.xor_with(rhs)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        self.invert()
    }
}

/// 8 lines of 8 `0`/`1` characters, row 1 (A1..H1) first.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_binary_string();
        for line in s.as_bytes().chunks(BOARD_SIZE) {
            for &c in line {
                write!(f, "{}", c as char)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over set-bit indices in a `Bitboard`.
pub struct BitIterator {
    bits: u64,
}

impl Iterator for BitIterator {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let bit = self.bits.trailing_zeros() as usize;
        // Clear lowest set bit
        self.bits &= self.bits - 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIterator {}

impl IntoIterator for Bitboard {
    type Item = usize;
    type IntoIter = BitIterator;

    fn into_iter(self) -> BitIterator {
        self.iter_ones()
    }
}
