//! Region code table.
//!
//! A static lookup from short city codes to canonical region names,
//! loaded once from a CSV file before the service starts accepting
//! requests and read-only afterwards. Canonical names are built from
//! columns 4-6 of each row (1-indexed), joined with `-` and
//! upper-cased: `CHENNAI-TAMILNADU-INDIA`.
//!
//! Loading is deliberately lenient about bad data rows: the first
//! malformed row stops the load, keeping every row parsed before it.
//! The stop is reported in [`RegionTableLoad`] rather than swallowed,
//! so callers can log how much of the table actually made it in.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use crate::error::{DomainError, DomainResult};

/// Read-only mapping from short city code to canonical region name.
#[derive(Debug, Default, Clone)]
pub struct RegionTable {
    codes: HashMap<String, String>,
}

/// Result of loading a region table, including how far the load got.
#[derive(Debug)]
pub struct RegionTableLoad {
    pub table: RegionTable,
    /// Number of data rows successfully loaded.
    pub rows_loaded: usize,
    /// Set when loading stopped at a malformed row. Rows before the
    /// bad one are kept; the table is still usable.
    pub stopped: Option<String>,
}

impl RegionTable {
    /// Loads the table from a CSV file with a header row.
    ///
    /// A missing or unreadable file, or an unreadable/empty header
    /// row, is an error — the caller is expected to treat it as fatal
    /// to startup. Malformed data rows are not errors; they terminate
    /// the load early (see [`RegionTableLoad::stopped`]).
    pub fn load(path: impl AsRef<Path>) -> DomainResult<RegionTableLoad> {
        let file = File::open(path.as_ref()).map_err(|e| DomainError::RegionTable {
            message: format!("cannot open {}: {}", path.as_ref().display(), e),
        })?;

        // flexible: rows are allowed to differ in width from the
        // header; width is validated per-row below so that a short row
        // stops the load instead of failing it.
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

        let headers = reader.headers().map_err(|e| DomainError::RegionTable {
            message: format!("cannot read header row: {}", e),
        })?;
        if headers.is_empty() {
            return Err(DomainError::RegionTable {
                message: "missing header row".to_string(),
            });
        }

        let mut codes = HashMap::new();
        let mut rows_loaded = 0;
        let mut stopped = None;

        for (row, result) in reader.records().enumerate() {
            match result {
                Ok(record) if record.len() >= 6 => {
                    let code = record[0].to_string();
                    let canonical =
                        format!("{}-{}-{}", &record[3], &record[4], &record[5]).to_uppercase();
                    codes.insert(code, canonical);
                    rows_loaded += 1;
                }
                Ok(record) => {
                    stopped = Some(format!(
                        "row {} has {} fields, expected at least 6",
                        row + 1,
                        record.len()
                    ));
                    break;
                }
                Err(e) => {
                    stopped = Some(e.to_string());
                    break;
                }
            }
        }

        Ok(RegionTableLoad {
            table: RegionTable { codes },
            rows_loaded,
            stopped,
        })
    }

    /// Looks up the canonical region name for a short city code.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.codes.get(code).map(String::as_str)
    }

    /// Number of codes in the table.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if no codes were loaded.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const HEADER: &str = "code,province,tz,city,state,country\n";

    #[test]
    fn test_loads_codes_with_canonical_names() {
        let file = write_csv(&format!(
            "{HEADER}\
             MAA,x,y,Chennai,TamilNadu,India\n\
             BLR,x,y,Bangalore,Karnataka,India\n"
        ));

        let load = RegionTable::load(file.path()).unwrap();
        assert_eq!(load.rows_loaded, 2);
        assert!(load.stopped.is_none());
        assert_eq!(
            load.table.resolve("MAA"),
            Some("CHENNAI-TAMILNADU-INDIA")
        );
        assert_eq!(
            load.table.resolve("BLR"),
            Some("BANGALORE-KARNATAKA-INDIA")
        );
        assert_eq!(load.table.resolve("XXX"), None);
    }

    #[test]
    fn test_stops_at_first_short_row_keeping_prior_rows() {
        let file = write_csv(&format!(
            "{HEADER}\
             MAA,x,y,Chennai,TamilNadu,India\n\
             BAD,row\n\
             BLR,x,y,Bangalore,Karnataka,India\n"
        ));

        let load = RegionTable::load(file.path()).unwrap();
        assert_eq!(load.rows_loaded, 1);
        assert!(load.stopped.is_some(), "stop must be observable");
        assert_eq!(load.table.resolve("MAA"), Some("CHENNAI-TAMILNADU-INDIA"));
        // Rows after the bad one are never reached.
        assert_eq!(load.table.resolve("BLR"), None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = RegionTable::load("no/such/regions.csv");
        assert!(matches!(result, Err(DomainError::RegionTable { .. })));
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = write_csv("");
        let result = RegionTable::load(file.path());
        assert!(matches!(result, Err(DomainError::RegionTable { .. })));
    }

    #[test]
    fn test_header_only_file_loads_empty_table() {
        let file = write_csv(HEADER);
        let load = RegionTable::load(file.path()).unwrap();
        assert_eq!(load.rows_loaded, 0);
        assert!(load.table.is_empty());
        assert!(load.stopped.is_none());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let file = write_csv(&format!(
            "{HEADER}\
             MAA,x,y,Chennai,TamilNadu,India,extra,columns\n"
        ));
        let load = RegionTable::load(file.path()).unwrap();
        assert_eq!(load.table.resolve("MAA"), Some("CHENNAI-TAMILNADU-INDIA"));
    }
}
