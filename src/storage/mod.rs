//! Local recovery storage for in-progress scoring sessions
//!
//! - `schema`: Database connection and schema management
//! - `snapshot`: Save, load and clear of the single session snapshot

pub mod schema;
pub mod snapshot;


pub use schema::RecoveryStore;
pub use snapshot::SNAPSHOT_KEY;
