//! Row models for the `sessions` table.

mod session_record;

pub use session_record::SessionRecord;
