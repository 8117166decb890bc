pub mod file;
pub mod season_store;

pub use file::FileStore;
pub use season_store::{MergeOutcome, SeasonStore};
