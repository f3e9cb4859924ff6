mod loader;

pub use loader::{load_history, load_weight_entries};
