//! File-based storage implementations

pub mod brain;
pub mod quotes;

pub use brain::FileBrain;
pub use quotes::QuoteStore;
