use std::fmt;

/// One of the eight compass directions on the board.
///
/// Rows grow towards the south (row 0 holds A1..H1) and columns grow towards
/// the east (column 0 is A).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

pub const NUM_DIRECTIONS: usize = 8;

pub const ALL_DIRECTIONS: [Direction; NUM_DIRECTIONS] = [
    Direction::N,
    Direction::NE,
    Direction::E,
    Direction::SE,
    Direction::S,
    Direction::SW,
    Direction::W,
    Direction::NW,
];

/// Every column but A.
pub const NOT_COL_A: u64 = 0x7F7F_7F7F_7F7F_7F7F;
/// Every column but H.
pub const NOT_COL_H: u64 = 0xFEFE_FEFE_FEFE_FEFE;

impl Direction {
    /// Signed shift amount. Positive values shift right (towards bit 0),
    /// negative values shift left.
    #[inline]
    pub const fn shift(&self) -> i32 {
        match self {
            Direction::E => 1,
            Direction::SE => 9,
            Direction::S => 8,
            Direction::SW => 7,
            Direction::W => -1,
            Direction::NW => -9,
            Direction::N => -8,
            Direction::NE => -7,
        }
    }

    /// Mask applied after the shift to drop squares that wrapped across the
    /// left or right edge of the board.
    #[inline]
    pub const fn mask(&self) -> u64 {
        match self {
            Direction::E => NOT_COL_A,
            Direction::SE => NOT_COL_A & 0x00FF_FFFF_FFFF_FFFF,
            Direction::S => u64::MAX,
            Direction::SW => NOT_COL_H & 0x00FF_FFFF_FFFF_FFFF,
            Direction::W => NOT_COL_H,
            Direction::NW => NOT_COL_H & 0xFFFF_FFFF_FFFF_FF00,
            Direction::N => u64::MAX,
            Direction::NE => NOT_COL_A & 0xFFFF_FFFF_FFFF_FF00,
        }
    }

    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_match_reference_table() {
        assert_eq!(Direction::E.mask(), 0x7F7F7F7F7F7F7F7F);
        assert_eq!(Direction::SE.mask(), 0x007F7F7F7F7F7F7F);
        assert_eq!(Direction::S.mask(), 0xFFFFFFFFFFFFFFFF);
        assert_eq!(Direction::SW.mask(), 0x00FEFEFEFEFEFEFE);
        assert_eq!(Direction::W.mask(), 0xFEFEFEFEFEFEFEFE);
        assert_eq!(Direction::NW.mask(), 0xFEFEFEFEFEFEFE00);
        assert_eq!(Direction::N.mask(), 0xFFFFFFFFFFFFFFFF);
        assert_eq!(Direction::NE.mask(), 0x7F7F7F7F7F7F7F00);
    }

    #[test]
    fn test_opposite_negates_shift() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(dir.opposite().shift(), -dir.shift());
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_all_directions_distinct() {
        for (i, a) in ALL_DIRECTIONS.iter().enumerate() {
            for b in &ALL_DIRECTIONS[i + 1..] {
                assert_ne!(a.shift(), b.shift());
            }
        }
    }
}
