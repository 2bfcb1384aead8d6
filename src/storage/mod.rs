pub mod record;
pub mod codec;
pub mod file;
pub mod error;

pub use record::{NodeRecord, Snapshot};
pub use codec::{encode, decode};
pub use file::TreeFile;
pub use error::StorageError;
