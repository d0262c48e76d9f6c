//! Map parsing functionality for converting raw map text into structured data.

use crate::error::ParseError;

/// Separators between cells within a row.
const CELL_SEPARATORS: [char; 3] = [' ', ',', '\t'];

/// Represents the validated, rectangular data parsed from raw map text.
///
/// Cells hold `Some(id)` for tokens that parsed as integers and `None` for
/// malformed tokens, which are skipped during building rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGrid {
    cols: usize,
    cells: Vec<Vec<Option<i32>>>,
}

impl ParsedGrid {
    /// The number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// The number of columns in the grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at the given column and row, in text order (row 0 is the
    /// first line of the input).
    pub fn cell(&self, col: usize, row: usize) -> Option<i32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Iterates over all cells in row-major order as `(col, row, id)`.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Option<i32>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, id)| (col, row, *id)))
    }
}

/// Parser for converting raw map text into a validated rectangular grid.
pub struct MapTextParser;

impl MapTextParser {
    /// Parses a single cell token into an integer ID.
    ///
    /// Non-integer tokens yield `None`; they count toward the row width but
    /// produce no placement.
    pub fn parse_token(token: &str) -> Option<i32> {
        token.parse::<i32>().ok()
    }

    /// Parses raw map text into a validated grid.
    ///
    /// The text is normalized by stripping carriage returns and trimming
    /// surrounding whitespace, then split into newline-separated rows of
    /// space/comma/tab-separated cells.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::EmptyInput`] if no rows remain after
    /// normalization, or [`ParseError::RowLengthMismatch`] on the first row
    /// whose cell count differs from the first row's. No rows past the
    /// offending one are processed.
    pub fn parse(raw: &str) -> Result<ParsedGrid, ParseError> {
        let text = raw.replace('\r', "");
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut cols = None;
        let mut cells = Vec::new();

        for (row, line) in text.split('\n').enumerate() {
            let parsed: Vec<Option<i32>> = line
                .trim()
                .split(CELL_SEPARATORS)
                .filter(|token| !token.is_empty())
                .map(Self::parse_token)
                .collect();

            let expected = *cols.get_or_insert(parsed.len());
            if parsed.len() != expected {
                return Err(ParseError::RowLengthMismatch {
                    row,
                    expected,
                    actual: parsed.len(),
                });
            }

            cells.push(parsed);
        }

        Ok(ParsedGrid {
            cols: cols.unwrap_or(0),
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token() {
        assert_eq!(MapTextParser::parse_token("0"), Some(0));
        assert_eq!(MapTextParser::parse_token("5"), Some(5));
        assert_eq!(MapTextParser::parse_token("-3"), Some(-3));

        // Malformed tokens are tolerated, not rejected
        assert_eq!(MapTextParser::parse_token("x"), None);
        assert_eq!(MapTextParser::parse_token("1.5"), None);
    }

    #[test]
    fn test_parse_rectangular() {
        let grid = MapTextParser::parse("1 0 2\n0 5 0").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell(0, 0), Some(1));
        assert_eq!(grid.cell(1, 1), Some(5));
    }

    #[test]
    fn test_parse_mixed_separators() {
        let grid = MapTextParser::parse("1,0\t2\n0 , 1\t\t0").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell(2, 0), Some(2));
        assert_eq!(grid.cell(1, 1), Some(1));
    }

    #[test]
    fn test_parse_strips_carriage_returns() {
        let grid = MapTextParser::parse("1 0\r\n0 2\r\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(MapTextParser::parse(""), Err(ParseError::EmptyInput));
        assert_eq!(MapTextParser::parse("  \r\n  \n "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_row_length_mismatch() {
        let result = MapTextParser::parse("1 0 2\n0 5\n1 1 1");
        assert_eq!(
            result,
            Err(ParseError::RowLengthMismatch {
                row: 1,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_parse_malformed_tokens_count_toward_width() {
        let grid = MapTextParser::parse("1 x 2\n0 1 2").unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell(1, 0), None);
        assert_eq!(grid.cell(2, 0), Some(2));
    }
}
