pub mod csv;

pub use csv::{CodeSource, CsvPlusCodeConfig, CsvToPlusCode, csv_to_plus_code_csv};
