use std::io::{self, Write};

use crate::query::QueryResult;

/// Mutations print nothing; reads print one line per key or the value.
pub fn write_result<W: Write>(out: &mut W, result: &QueryResult) -> io::Result<()> {
    match result {
        QueryResult::Keys(keys) => {
            for key in keys {
                writeln!(out, "{}", key)?;
            }
        }
        QueryResult::Value(value) => writeln!(out, "{}", value)?,
        QueryResult::Inserted
        | QueryResult::Overwritten
        | QueryResult::Updated
        | QueryResult::Deleted(_) => {}
    }
    Ok(())
}
