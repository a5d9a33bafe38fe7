use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use kraftlog_import_domain::{Cell, DocumentError, Grid, GridExtractor};
use log::debug;

/// Reads the first worksheet of an XLSX workbook.
///
/// Formula cells are kept as formula text instead of their cached result.
pub struct XlsxGridExtractor;

impl GridExtractor for XlsxGridExtractor {
    fn extract_grid(&self, document: &[u8]) -> Result<Grid, DocumentError> {
        let mut workbook = Xlsx::new(Cursor::new(document))
            .map_err(|err| DocumentError::Spreadsheet(err.to_string()))?;

        let Some(sheet) = workbook.sheet_names().first().cloned() else {
            debug!("workbook contains no worksheet");
            return Ok(Grid::new());
        };

        let values = workbook
            .worksheet_range(&sheet)
            .map_err(|err| DocumentError::Spreadsheet(err.to_string()))?;
        let formulas = workbook
            .worksheet_formula(&sheet)
            .unwrap_or_else(|_| Range::new((0, 0), (0, 0)));

        debug!("reading worksheet {sheet}");

        let mut grid = Grid::new();

        for (row, column, data) in cells(&values) {
            if let Some(cell) = cell(data) {
                grid.set(row, column, cell);
            }
        }

        for (row, column, formula) in cells(&formulas) {
            if !formula.trim().is_empty() {
                grid.set(row, column, Cell::Formula(formula.clone()));
            }
        }

        Ok(grid)
    }
}

/// Iterate over the non-empty cells of a range with absolute 0-based positions.
fn cells<T>(range: &Range<T>) -> impl Iterator<Item = (u32, u32, &T)>
where
    T: calamine::CellType,
{
    let (start_row, start_column) = range.start().unwrap_or_default();
    range.used_cells().filter_map(move |(row, column, value)| {
        let row = start_row.checked_add(u32::try_from(row).ok()?)?;
        let column = start_column.checked_add(u32::try_from(column).ok()?)?;
        Some((row, column, value))
    })
}

fn cell(data: &Data) -> Option<Cell> {
    match data {
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            Some(Cell::Text(text.clone()))
        }
        #[allow(clippy::cast_precision_loss)]
        Data::Int(number) => Some(Cell::Number(*number as f64)),
        Data::Float(number) => Some(Cell::Number(*number)),
        Data::DateTime(date_time) => Some(Cell::Number(date_time.as_f64())),
        Data::Bool(boolean) => Some(Cell::Boolean(*boolean)),
        Data::Error(_) | Data::Empty => None,
    }
}
