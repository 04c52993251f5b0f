//! Core domain types for n-by-n tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Non-zero value identifying whose mark occupies a cell.
///
/// By convention the first seat plays `+1` and the second `-1`, but any
/// set of distinct non-zero values works.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(try_from = "i8", into = "i8")]
pub struct Symbol(i8);

impl Symbol {
    /// Symbol conventionally used by the first seat.
    pub const FIRST: Symbol = Symbol(1);

    /// Symbol conventionally used by the second seat.
    pub const SECOND: Symbol = Symbol(-1);

    /// Creates a symbol from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError`] for `0` (reserved for empty cells) and for
    /// `i8::MIN`, which has no negation.
    pub fn new(value: i8) -> Result<Self, SymbolError> {
        if value == 0 || value == i8::MIN {
            return Err(SymbolError { value });
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(self) -> i8 {
        self.0
    }

    /// Returns the negated symbol, the conventional two-player opponent.
    pub fn opponent(self) -> Self {
        Self(-self.0)
    }
}

impl TryFrom<i8> for Symbol {
    type Error = SymbolError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Symbol> for i8 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// A raw value that cannot be used as a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Symbol value {value} is reserved (must be non-zero and not -128)")]
pub struct SymbolError {
    /// The rejected value.
    pub value: i8,
}

/// A `(row, col)` coordinate on the board, zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the occupying symbol, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    /// Returns the raw cell value, `0` for empty.
    pub fn value(self) -> i8 {
        self.symbol().map_or(0, Symbol::value)
    }
}

/// Square n-by-n board stored in row-major order.
///
/// The dimension is fixed at construction. [`Board::place`] and
/// [`Board::clear`] index directly, so out-of-range coordinates panic the
/// way slice indexing does; validate with [`Board::in_bounds`] first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

/// Wire shape of a [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardRepr {
    dimension: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let expected = repr.dimension.checked_mul(repr.dimension);
        if expected != Some(repr.cells.len()) {
            return Err(BoardError {
                dimension: repr.dimension,
                cells: repr.cells.len(),
            });
        }
        Ok(Self {
            dimension: repr.dimension,
            cells: repr.cells,
        })
    }
}

/// Cell count does not match the board dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Board of dimension {dimension} needs {dimension}x{dimension} cells, got {cells}")]
pub struct BoardError {
    /// Declared side length.
    pub dimension: usize,
    /// Number of cells supplied.
    pub cells: usize,
}

impl Board {
    /// Creates an empty `dimension` × `dimension` board.
    #[instrument]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        }
    }

    /// Builds a board from raw rows, `0` meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError`] if a non-zero value is not a valid symbol.
    pub fn from_rows<const N: usize>(rows: [[i8; N]; N]) -> Result<Self, SymbolError> {
        let mut cells = Vec::with_capacity(N * N);
        for value in rows.into_iter().flatten() {
            let cell = match value {
                0 => Cell::Empty,
                v => Cell::Occupied(Symbol::new(v)?),
            };
            cells.push(cell);
        }
        Ok(Self {
            dimension: N,
            cells,
        })
    }

    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns true if the coordinate lies on the board.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.dimension && coord.col < self.dimension
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then_some(coord.row * self.dimension + coord.col)
    }

    /// Gets the cell at the coordinate, `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Checks if a cell is empty. Out-of-range coordinates are never empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Marks a cell with `symbol`.
    ///
    /// The cell must be on the board and empty.
    pub fn place(&mut self, coord: Coord, symbol: Symbol) {
        debug_assert!(self.is_empty(coord), "place on non-empty cell {coord}");
        let i = coord.row * self.dimension + coord.col;
        self.cells[i] = Cell::Occupied(symbol);
    }

    /// Resets a cell to empty. Only the search uses this, to undo a
    /// hypothetical placement.
    pub fn clear(&mut self, coord: Coord) {
        let i = coord.row * self.dimension + coord.col;
        self.cells[i] = Cell::Empty;
    }

    /// Number of empty cells remaining.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Empty).count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dimension.max(1))
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let n = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(move |(i, _)| Coord::new(i / n, i % n))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => format!("{:>3}", "."),
                    Cell::Occupied(symbol) => format!("{:>3}", symbol.value()),
                })
                .collect::<String>();
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Terminal status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A line is filled with this symbol.
    Win(Symbol),
    /// Board is full with no winning line.
    Draw,
    /// Play continues.
    Ongoing,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning symbol if there is one.
    pub fn winner(self) -> Option<Symbol> {
        match self {
            Outcome::Win(symbol) => Some(symbol),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(symbol) => write!(f, "Symbol {} wins", symbol),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Ongoing => write!(f, "Ongoing"),
        }
    }
}
