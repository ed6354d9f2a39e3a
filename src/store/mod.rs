pub mod interface;
pub mod local;

pub use interface::{StoreEntry, TemplateStore};
pub use local::LocalTemplateStore;
