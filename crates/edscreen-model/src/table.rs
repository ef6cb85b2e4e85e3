use crate::cell::CellValue;
use crate::column::ColumnRef;

/// One already-loaded sheet of a regulatory list.
///
/// Rows keep the order of the sheet and cells keep their column position, so
/// row-major iteration visits cells top-to-bottom, then left-to-right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    name: String,
    rows: Vec<Vec<CellValue>>,
}

impl SourceTable {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns in the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &[CellValue])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| (index, row.as_slice()))
    }

    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cell at `row`/`column`; `None` outside the populated area.
    pub fn cell(&self, row: usize, column: ColumnRef) -> Option<&CellValue> {
        self.rows.get(row)?.get(column.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(letters: &str) -> ColumnRef {
        letters.parse().unwrap()
    }

    #[test]
    fn ragged_rows_report_widest_width() {
        let table = SourceTable::new(
            "sheet",
            vec![
                vec![CellValue::from("a")],
                vec![CellValue::from("b"), CellValue::from("c"), CellValue::Missing],
            ],
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.width(), 3);
        assert_eq!(table.cell(1, column("B")), Some(&CellValue::from("c")));
        assert_eq!(table.cell(0, column("B")), None);
        assert_eq!(table.cell(5, column("A")), None);
    }
}
