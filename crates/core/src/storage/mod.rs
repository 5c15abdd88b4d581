mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::InventoryRepository;
pub use types::ScanFilter;
