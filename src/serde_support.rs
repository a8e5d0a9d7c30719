use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::{Color, EMPTY_SYMBOL};
use crate::coordinate::{Coordinate, NUM_SQUARES};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Bitboard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.value())
    }
}

impl<'de> Deserialize<'de> for Bitboard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Bitboard::new)
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let alg = self.to_algebric().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&alg)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Coordinate::from_algebric(&s).map_err(serde::de::Error::custom)
    }
}

/// A board is written as 64 characters of `B`, `W` or `-`, A1 first.
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let squares: String = self.to_string().lines().collect();
        serializer.serialize_str(&squares)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let count = s.chars().count();
        if count != NUM_SQUARES {
            return Err(serde::de::Error::custom(format!(
                "Invalid board length: expected {} squares, got {}",
                NUM_SQUARES, count
            )));
        }

        let mut black = Bitboard::zero();
        let mut white = Bitboard::zero();

        for (linear, c) in s.chars().enumerate() {
            let bit =
                Bitboard::single(NUM_SQUARES - 1 - linear).map_err(serde::de::Error::custom)?;
            match Color::from_symbol(c) {
                Some(Color::Black) => black = black | bit,
                Some(Color::White) => white = white | bit,
                None if c == EMPTY_SYMBOL => {}
                None => {
                    return Err(serde::de::Error::custom(format!(
                        "Invalid square: {}",
                        c
                    )))
                }
            }
        }

        Board::from_bitboards(black, white).map_err(serde::de::Error::custom)
    }
}
