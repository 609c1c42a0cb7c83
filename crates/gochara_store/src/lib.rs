//! Append-only natal chart persistence.
//!
//! Charts are stored as a JSON array of records in one file, each
//! record carrying birth metadata and positions as `D°M'S''` tokens.
//! Conversion to the in-memory model is lenient about malformed degree
//! tokens (they degrade to 0 with a warning); file-level corruption is
//! a typed error.

pub mod error;
pub mod record;
pub mod store;

pub use error::StoreError;
pub use record::{BodyRecord, ChartRecord};
pub use store::ChartStore;
