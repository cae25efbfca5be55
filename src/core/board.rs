#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Mark(char),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Mark(symbol) => Some(symbol),
        }
    }
}

/// The four lines a run can lie on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right, (row + i, col + i)
    Diagonal,
    /// Top-right to bottom-left, (row + i, col - i)
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Row/column step in the forward direction
    fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Square grid of cells, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Cell at (row, col), or `None` when off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.contains(row, col) {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Write a symbol into an empty cell. Returns false if the cell was taken.
    ///
    /// Callers must pass in-bounds coordinates.
    pub(crate) fn place(&mut self, row: usize, col: usize, symbol: char) -> bool {
        let idx = row * self.size + col;
        if !self.cells[idx].is_empty() {
            return false;
        }
        self.cells[idx] = Cell::Mark(symbol);
        true
    }

    /// Length of the run of the symbol at (row, col) along `axis`, counting
    /// the cell itself. Zero for an empty or off-board cell.
    pub fn run_length(&self, row: usize, col: usize, axis: Axis) -> usize {
        let cell = match self.get(row, col) {
            Some(Cell::Mark(symbol)) => Cell::Mark(symbol),
            _ => return 0,
        };

        let (dr, dc) = axis.step();
        1 + self.extend(row, col, dr, dc, cell) + self.extend(row, col, -dr, -dc, cell)
    }

    /// Count contiguous cells equal to `cell`, starting next to (row, col)
    fn extend(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row, col);
        loop {
            match (r.checked_add_signed(dr), c.checked_add_signed(dc)) {
                (Some(nr), Some(nc)) if self.get(nr, nc) == Some(cell) => {
                    count += 1;
                    r = nr;
                    c = nc;
                }
                _ => return count,
            }
        }
    }

    /// Whether any line through (row, col) holds at least `need` of its symbol
    pub fn has_run(&self, row: usize, col: usize, need: usize) -> bool {
        Axis::ALL
            .iter()
            .any(|&axis| self.run_length(row, col, axis) >= need)
    }
}
