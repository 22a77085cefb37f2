//! Rendering of lookup results to stdout and to the JSON export document.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{Map, Value};
use zipscan_core::Tabular;

/// Results of every lookup in this run, keyed by flow name.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub(crate) struct Results(Map<String, Value>);

impl Results {
    pub(crate) fn insert<T: Serialize>(&mut self, flow: &str, rows: &T) -> anyhow::Result<()> {
        self.0.insert(flow.to_owned(), serde_json::to_value(rows)?);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn get(&self, flow: &str) -> Option<&Value> {
        self.0.get(flow)
    }
}

/// Writes `rows` as tab-separated lines, header first. Nothing is written
/// for an empty table.
pub(crate) fn write_table<W: Write, T: Tabular>(out: &mut W, rows: &[T]) -> io::Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    writeln!(out, "{}", first.columns().join("\t"))?;
    for row in rows {
        writeln!(out, "{}", row.values().join("\t"))?;
    }
    Ok(())
}

pub(crate) fn print_table<T: Tabular>(rows: &[T]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_table(&mut out, rows)?;
    out.flush()
}
