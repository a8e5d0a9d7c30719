pub mod bitboard;
pub mod board;
pub mod color;
pub mod coordinate;
pub mod direction;
pub mod error;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use bitboard::Bitboard;
pub use board::Board;
pub use color::Color;
pub use coordinate::Coordinate;
pub use direction::{Direction, ALL_DIRECTIONS};
pub use error::BoardError;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn othello_bitboard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    m.add_class::<PyBitboard>()?;
    m.add_class::<PyBoard>()?;
    m.add_function(wrap_pyfunction!(from_linear, m)?)?;
    m.add_function(wrap_pyfunction!(to_linear, m)?)?;
    m.add_function(wrap_pyfunction!(to_bitboard, m)?)?;
    m.add_function(wrap_pyfunction!(from_algebric, m)?)?;
    m.add_function(wrap_pyfunction!(to_algebric, m)?)?;
    m.add("BLACK", Color::Black as i8)?;
    m.add("WHITE", Color::White as i8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;

    impl From<BoardError> for PyErr {
        fn from(err: BoardError) -> PyErr {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
        }
    }

    fn parse_color(color: i8) -> PyResult<Color> {
        Color::from_int(color).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid color value: {}",
                color
            ))
        })
    }

    fn parse_direction(name: &str) -> PyResult<Direction> {
        ALL_DIRECTIONS
            .iter()
            .copied()
            .find(|d| d.to_string() == name)
            .ok_or_else(|| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Invalid direction: {}",
                    name
                ))
            })
    }

    #[pyfunction]
    pub fn from_linear(index: usize) -> (usize, usize) {
        Coordinate::from_linear(index).into()
    }

    #[pyfunction]
    pub fn to_linear(x: usize, y: usize) -> PyResult<usize> {
        Ok(Coordinate::new(x, y).to_linear()?)
    }

    #[pyfunction]
    pub fn to_bitboard(index: usize) -> PyResult<(usize, usize)> {
        Ok(Coordinate::to_bitboard(index)?.into())
    }

    #[pyfunction]
    pub fn from_algebric(alg: &str) -> PyResult<(usize, usize)> {
        Ok(Coordinate::from_algebric(alg)?.into())
    }

    #[pyfunction]
    pub fn to_algebric(x: usize, y: usize) -> PyResult<String> {
        Ok(Coordinate::new(x, y).to_algebric()?)
    }

    #[pyclass(name = "Bitboard")]
    #[derive(Clone, Copy)]
    pub struct PyBitboard {
        bb: Bitboard,
    }

    #[pymethods]
    impl PyBitboard {
        #[new]
        pub fn new(bits: i128) -> PyResult<Self> {
            Ok(PyBitboard {
                bb: Bitboard::from_literal(bits)?,
            })
        }

        #[staticmethod]
        pub fn zero() -> Self {
            PyBitboard {
                bb: Bitboard::zero(),
            }
        }

        #[staticmethod]
        pub fn full() -> Self {
            PyBitboard {
                bb: Bitboard::full(),
            }
        }

        #[staticmethod]
        pub fn from_algebric_list(algs: Vec<String>) -> PyResult<Self> {
            Ok(PyBitboard {
                bb: Bitboard::from_algebraic_list(algs)?,
            })
        }

        #[getter]
        pub fn bits(&self) -> u64 {
            self.bb.value()
        }

        pub fn count(&self) -> u32 {
            self.bb.count()
        }

        pub fn shift_direction(&self, direction: &str) -> PyResult<Self> {
            Ok(PyBitboard {
                bb: self.bb.shift_direction(parse_direction(direction)?),
            })
        }

        #[pyo3(signature = (direction=None))]
        pub fn adjacent(&self, direction: Option<&str>) -> PyResult<Self> {
            let dir = direction.map(parse_direction).transpose()?;
            Ok(PyBitboard {
                bb: self.bb.adjacent(dir),
            })
        }

        pub fn possible_moves(&self, opponent: &PyBitboard) -> Self {
            PyBitboard {
                bb: self.bb.possible_moves(opponent.bb),
            }
        }

        /// Ascending bit indices equal to `bit` (`'1'` or `'0'`).
        #[pyo3(signature = (bit='1'))]
        pub fn bit_list(&self, bit: char) -> PyResult<Vec<usize>> {
            match bit {
                '1' => Ok(self.bb.bit_list(true)),
                '0' => Ok(self.bb.bit_list(false)),
                _ => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                    "bit must be '0' or '1'",
                )),
            }
        }

        pub fn row(&self, n: i32) -> PyResult<Vec<bool>> {
            Ok(self.bb.row(n)?.to_vec())
        }

        pub fn col(&self, n: i32) -> PyResult<Vec<bool>> {
            Ok(self.bb.col(n)?.to_vec())
        }

        pub fn to_binary_string(&self) -> String {
            self.bb.to_binary_string()
        }

        pub fn __and__(&self, other: &PyBitboard) -> Self {
            PyBitboard {
                bb: self.bb & other.bb,
            }
        }

        pub fn __or__(&self, other: &PyBitboard) -> Self {
            PyBitboard {
                bb: self.bb | other.bb,
            }
        }

        pub fn __xor__(&self, other: &PyBitboard) -> Self {
            PyBitboard {
                bb: self.bb ^ other.bb,
            }
        }

        pub fn __invert__(&self) -> Self {
            PyBitboard { bb: !self.bb }
        }

        pub fn __lshift__(&self, n: i32) -> Self {
            PyBitboard {
                bb: self.bb.shift_left(n),
            }
        }

        pub fn __rshift__(&self, n: i32) -> Self {
            PyBitboard {
                bb: self.bb.shift_right(n),
            }
        }

        pub fn __int__(&self) -> u64 {
            self.bb.value()
        }

        pub fn __eq__(&self, other: &PyBitboard) -> bool {
            self.bb == other.bb
        }

        pub fn __hash__(&self) -> u64 {
            self.bb.value()
        }

        pub fn __str__(&self) -> String {
            self.bb.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Bitboard({:#018x})", self.bb.value())
        }
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: Board,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        pub fn new() -> Self {
            PyBoard {
                board: Board::new(),
            }
        }

        #[staticmethod]
        pub fn from_bitboards(black: &PyBitboard, white: &PyBitboard) -> PyResult<Self> {
            Ok(PyBoard {
                board: Board::from_bitboards(black.bb, white.bb)?,
            })
        }

        pub fn pieces(&self, color: i8) -> PyResult<PyBitboard> {
            Ok(PyBitboard {
                bb: self.board.pieces(parse_color(color)?),
            })
        }

        pub fn possible_moves(&self, color: i8) -> PyResult<PyBitboard> {
            Ok(PyBitboard {
                bb: self.board.possible_moves(parse_color(color)?),
            })
        }

        pub fn get_piece(&self, x: usize, y: usize) -> PyResult<Option<i8>> {
            let piece = self.board.get_piece(&Coordinate::new(x, y))?;
            Ok(piece.map(|c| c as i8))
        }

        pub fn nb_empty(&self) -> u32 {
            self.board.nb_empty()
        }

        pub fn nb_occupied(&self) -> u32 {
            self.board.nb_occupied()
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Board(black={}, white={})",
                self.board.count(Color::Black),
                self.board.count(Color::White)
            )
        }
    }
}
