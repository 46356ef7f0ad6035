use serde::Serialize;

/// Row-major character grid with a fixed column count.
///
/// Cells past the end of the text are `None`; nothing is padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    columns: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl Grid {
    /// An all-empty grid of `rows` x `columns`.
    pub fn empty(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            cells: vec![vec![None; columns]; rows],
        }
    }

    /// Lays `chars` out row-major: index i lands at row `i / columns`, column `i % columns`.
    pub fn from_chars(chars: &[char], columns: usize) -> Self {
        if columns == 0 {
            return Self::empty(0, 0);
        }
        let mut grid = Self::empty(chars.len().div_ceil(columns), columns);
        for (i, &c) in chars.iter().enumerate() {
            grid.cells[i / columns][i % columns] = Some(c);
        }
        grid
    }

    pub fn from_text(text: &str, columns: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self::from_chars(&chars, columns)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn set(&mut self, row: usize, col: usize, c: char) {
        self.cells[row][col] = Some(c);
    }

    pub fn row_cells(&self) -> &[Vec<Option<char>>] {
        &self.cells
    }

    /// Filled cells of one column, top to bottom.
    pub fn column_chars(&self, col: usize) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().filter_map(move |row| row[col])
    }

    /// Filled cells, row-major.
    pub fn read_rows(&self) -> String {
        self.cells.iter().flatten().flatten().collect()
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// 1 where a cell is filled, 0 where it is empty.
    pub fn occupancy(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| u8::from(c.is_some())).collect())
            .collect()
    }
}

/// Removes every whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
