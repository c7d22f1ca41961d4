//! Frequency table export

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::nlp::FrequencyTable;

/// Write the frequency table as CSV to any writer.
///
/// The `Word,Frequency` header is written even when the table is empty.
pub fn write_frequency_table<W: Write>(table: &FrequencyTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(["Word", "Frequency"])?;
    for entry in table.entries() {
        writer.write_record([entry.word.as_str(), &entry.count.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Save the frequency table as CSV, replacing any existing file
pub fn write_frequency_csv<P: AsRef<Path>>(table: &FrequencyTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_frequency_table(table, file)?;

    info!(
        rows = table.len(),
        path = %path.display(),
        "Saved word frequency table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &FrequencyTable) -> String {
        let mut buf = Vec::new();
        write_frequency_table(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_rows_follow_table_order() {
        let table = FrequencyTable::from_tokens(&["slow", "app", "slow", "refund", "app", "slow"]);
        assert_eq!(render(&table), "Word,Frequency\nslow,3\napp,2\nrefund,1\n");
    }

    #[test]
    fn test_empty_table_keeps_header() {
        assert_eq!(render(&FrequencyTable::default()), "Word,Frequency\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("word_frequency.csv");
        std::fs::write(&path, "stale contents that are longer than the table\n").unwrap();

        write_frequency_csv(&FrequencyTable::from_tokens(&["ok"]), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Word,Frequency\nok,1\n");
    }
}
