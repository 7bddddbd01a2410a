pub mod config;
pub mod filter;
pub mod storage;
pub mod store;
pub mod task;
pub mod view;

pub use config::AppConfig;
pub use filter::FilterMode;
pub use storage::{
  MemorySlot,
  StorageSlot
};
pub use store::TaskStore;
pub use task::Task;
pub use view::{
  EditOutcome,
  EditSession,
  ListView,
  RowView
};
