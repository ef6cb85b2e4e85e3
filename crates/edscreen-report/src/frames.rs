//! Records and summary rows as string-typed data frames.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use edscreen_model::{Record, SummaryRow};

fn build_frame(headers: &[String], rows: &[Vec<String>]) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (index, header) in headers.iter().enumerate() {
        let values: Vec<String> = rows.iter().map(|row| row[index].clone()).collect();
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    DataFrame::new(columns).context("build dataframe from records")
}

/// One row per record, columns in output order. Unset fields read `-`.
pub fn records_frame(records: &[Record]) -> Result<DataFrame> {
    let headers = Record::column_headers();
    let rows: Vec<Vec<String>> = records.iter().map(Record::output_values).collect();
    build_frame(&headers, &rows)
}

pub fn summary_frame(summary: &[SummaryRow]) -> Result<DataFrame> {
    let headers: Vec<String> = SummaryRow::HEADERS.iter().map(|h| (*h).to_string()).collect();
    let rows: Vec<Vec<String>> = summary.iter().map(|row| row.values().to_vec()).collect();
    build_frame(&headers, &rows)
}
