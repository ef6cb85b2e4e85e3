//! Data model for screening substances against regulatory lists.

pub mod cell;
pub mod column;
pub mod error;
pub mod field;
pub mod record;
pub mod source_kind;
pub mod substance;
pub mod summary;
pub mod table;

pub use cell::{CellValue, format_numeric};
pub use column::ColumnRef;
pub use error::{ModelError, Result};
pub use field::{FieldValue, PLACEHOLDER, Presence};
pub use record::{
    Bpr, ClpIdentity, Corap, EdAssessment, EdPpp, FoodAdditive, FoodFlavourings,
    HARMONIZED_HEADER, Pact, PactProcess, Record, SELF_CLASSIFIED_HEADER, SourceNamespace, Svhc,
    SvhcIntent,
};
pub use source_kind::SourceKind;
pub use substance::Substance;
pub use summary::SummaryRow;
pub use table::SourceTable;
