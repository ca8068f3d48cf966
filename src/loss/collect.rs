use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::parse::RawRecord;

pub fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open loss dataset {}", path.display()))?;

    let records = read_records(file)
        .with_context(|| format!("failed to read loss dataset {}", path.display()))?;

    info!(count = records.len(), path = %path.display(), "loaded loss records");
    Ok(records)
}

pub(super) fn read_records<R: Read>(source: R) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
        let record = row.with_context(|| format!("invalid loss record on data row {}", index + 1))?;
        records.push(record);
    }

    if records.is_empty() {
        warn!("loss dataset contained no records");
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
ID,COUNTRY,DEATHS,DAMAGE_MILLIONS_DOLLARS,CAUSE_CODE,YEAR
1,CHILE,100,50,1,2000
2,INDONESIA,0,200,6,2001
3,JAPAN,,,,2002
";

    #[test]
    fn reads_every_row_with_typed_fields() {
        let records = read_records(SAMPLE.as_bytes()).expect("sample parses");
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].country, "CHILE");
        assert_eq!(records[0].deaths, 100.0);
        assert_eq!(records[0].damage_millions, 50.0);
        assert_eq!(records[0].cause_code, Some(1));
        assert_eq!(records[0].year, "2000");

        assert_eq!(records[1].cause_code, Some(6));
    }

    #[test]
    fn blank_cells_fall_back_to_defaults() {
        let records = read_records(SAMPLE.as_bytes()).expect("sample parses");
        let japan = &records[2];
        assert_eq!(japan.deaths, 0.0);
        assert_eq!(japan.damage_millions, 0.0);
        assert_eq!(japan.cause_code, None);
    }

    #[test]
    fn non_numeric_deaths_fail_with_row_context() {
        let source = "\
ID,COUNTRY,DEATHS,DAMAGE_MILLIONS_DOLLARS,CAUSE_CODE,YEAR
1,CHILE,100,50,1,2000
2,PERU,lots,10,1,2001
";
        let error = read_records(source.as_bytes()).expect_err("row 2 is malformed");
        assert!(format!("{error:#}").contains("data row 2"));
    }

    #[test]
    fn missing_file_reports_path() {
        let error = load_records(Path::new("/definitely/not/here.csv")).expect_err("no file");
        assert!(format!("{error:#}").contains("/definitely/not/here.csv"));
    }
}
