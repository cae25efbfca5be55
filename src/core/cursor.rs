/// Navigation step requested by the input provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Highlighted cell, always kept inside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    grid_size: usize,
}

impl Cursor {
    pub fn new(grid_size: usize) -> Self {
        Self { row: 0, col: 0, grid_size }
    }

    /// Move one cell; a step off the edge leaves the cursor where it is
    pub fn step(&mut self, direction: Direction) {
        let last = self.grid_size.saturating_sub(1);
        match direction {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.row = (self.row + 1).min(last),
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => self.col = (self.col + 1).min(last),
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_top_left() {
        assert_eq!(Cursor::new(5).position(), (0, 0));
    }

    #[test]
    fn test_clamps_at_edges() {
        let mut cursor = Cursor::new(5);
        cursor.step(Direction::Up);
        cursor.step(Direction::Left);
        assert_eq!(cursor.position(), (0, 0));

        for _ in 0..10 {
            cursor.step(Direction::Down);
            cursor.step(Direction::Right);
        }
        assert_eq!(cursor.position(), (4, 4));
    }

    #[test]
    fn test_moves_one_cell() {
        let mut cursor = Cursor::new(6);
        cursor.step(Direction::Right);
        cursor.step(Direction::Right);
        cursor.step(Direction::Down);
        cursor.step(Direction::Left);
        assert_eq!(cursor.position(), (1, 1));
    }
}
