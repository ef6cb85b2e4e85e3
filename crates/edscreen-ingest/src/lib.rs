pub mod discovery;
pub mod error;
pub mod hash;
pub mod input;
pub mod normalize;
pub mod sheet;

pub use discovery::{classify_source_file, discover_source_files, list_source_files};
pub use error::{IngestError, Result};
pub use hash::{file_sha256, sha256_hex};
pub use input::{CAS_COLUMN, EC_COLUMN, read_substances, substances_from_table};
pub use normalize::{normalize_cell, normalize_identifier};
pub use sheet::{SUPPORTED_EXTENSIONS, SheetSelector, is_supported_file, read_csv_sheet, read_sheet};
