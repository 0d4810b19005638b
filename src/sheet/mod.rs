//! Decoding of workbook dumps (`rows` listings of each table) into typed records.

pub mod decode;
pub mod row_index;

pub use decode::{DecodedWorkbook, decode_workbook};
pub use row_index::RowIndex;
