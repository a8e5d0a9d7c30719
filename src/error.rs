/// Errors raised at the boundary of the coordinate and bitboard operations.
///
/// Bitwise composition never fails; only construction from external input
/// and index-based lookups can.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A numeric value or index falls outside the valid domain of an operation.
    #[error("{what} {value} is out of range")]
    OutOfRange { what: &'static str, value: i128 },

    /// An algebraic coordinate did not match `[A-H][1-9]`.
    #[error("{0} is not a valid algebric coordinate")]
    InvalidCoordinate(String),
}

impl BoardError {
    pub(crate) fn out_of_range(what: &'static str, value: i128) -> Self {
        BoardError::OutOfRange { what, value }
    }
}
