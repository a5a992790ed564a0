mod app_state;
mod reducer;
mod store;

pub use app_state::AppState;
pub use reducer::reduce;
pub use store::{LatestSnapshot, Snapshot, Store};
