//! Persistence coordination: snapshot slots, debounced auto-save, and the
//! explicit save path.

pub mod autosave;
pub mod save;
pub mod store;

pub use autosave::AutoSave;
pub use save::{build_student_update, save_resume};
pub use store::{MemorySnapshotStore, RedisSnapshotStore, SnapshotStore};
