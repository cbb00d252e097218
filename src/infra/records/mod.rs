pub mod json_store;
pub mod upload_store;

pub use json_store::JsonRecordStore;
pub use upload_store::LocalUploadStore;
