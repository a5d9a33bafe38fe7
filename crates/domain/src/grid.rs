use std::collections::BTreeMap;

/// Content of a single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Boolean(bool),
    /// Formula text without the leading `=`.
    Formula(String),
    Empty,
}

impl Cell {
    /// Render the cell as text.
    ///
    /// Numbers are truncated to integers. Formulas are rendered as their formula text, not as
    /// their evaluated result.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn text(&self) -> Option<String> {
        match self {
            Cell::Text(text) => Some(text.clone()),
            Cell::Number(number) => Some((number.trunc() as i64).to_string()),
            Cell::Boolean(boolean) => Some(boolean.to_string()),
            Cell::Formula(formula) => Some(formula.clone()),
            Cell::Empty => None,
        }
    }
}

/// Sparse two-dimensional grid of cells with 0-based row and column indices.
///
/// A row only exists if at least one of its cells was set.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Grid {
    rows: BTreeMap<u32, Row>,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, row: u32, column: u32, cell: Cell) {
        self.rows.entry(row).or_default().cells.insert(column, cell);
    }

    #[must_use]
    pub fn with(mut self, row: u32, column: u32, cell: Cell) -> Self {
        self.set(row, column, cell);
        self
    }

    #[must_use]
    pub fn row(&self, row: u32) -> Option<&Row> {
        self.rows.get(&row)
    }

    #[must_use]
    pub fn text(&self, row: u32, column: u32) -> Option<String> {
        self.row(row).and_then(|r| r.text(column))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    cells: BTreeMap<u32, Cell>,
}

impl Row {
    #[must_use]
    pub fn cell(&self, column: u32) -> Option<&Cell> {
        self.cells.get(&column)
    }

    #[must_use]
    pub fn text(&self, column: u32) -> Option<String> {
        self.cell(column).and_then(Cell::text)
    }
}

pub const WORKOUTS_PER_ROUTINE: usize = 5;

/// Location of one workout inside the spreadsheet.
///
/// The name, the sets and reps, and the technique of an exercise are read from three adjacent
/// columns starting at `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDescriptor {
    pub column: u32,
    pub name_row: u32,
    pub first_exercise_row: u32,
    pub last_exercise_row: u32,
    pub rest_row: u32,
}

pub type Template = [BlockDescriptor; WORKOUTS_PER_ROUTINE];

/// Layout of the routine spreadsheet: three workouts side by side at the top (B2, F2, J2),
/// two further workouts below (B18, F18), one shared rest interval row (16).
pub const DEFAULT_TEMPLATE: Template = [
    BlockDescriptor {
        column: 1,
        name_row: 1,
        first_exercise_row: 3,
        last_exercise_row: 7,
        rest_row: 15,
    },
    BlockDescriptor {
        column: 5,
        name_row: 1,
        first_exercise_row: 3,
        last_exercise_row: 9,
        rest_row: 15,
    },
    BlockDescriptor {
        column: 9,
        name_row: 1,
        first_exercise_row: 3,
        last_exercise_row: 9,
        rest_row: 15,
    },
    BlockDescriptor {
        column: 1,
        name_row: 17,
        first_exercise_row: 19,
        last_exercise_row: 24,
        rest_row: 15,
    },
    BlockDescriptor {
        column: 5,
        name_row: 17,
        first_exercise_row: 19,
        last_exercise_row: 26,
        rest_row: 15,
    },
];
