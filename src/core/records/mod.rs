// Persisted records: citizen reports, commodity prices and the daily to-do
// list. All three share the same write-through collection.

pub mod price_service;
pub mod record_collection;
pub mod records_models;
pub mod records_store;
pub mod report_service;
pub mod todo_service;

pub use price_service::PriceService;
pub use records_models::{
    ImageUpload, NewReport, PriceEntry, Record, Report, ReportCategory, TodoItem,
};
pub use records_store::{ImageStore, LoadError, RecordError, RecordFile, StoreError};
pub use report_service::ReportService;
pub use todo_service::TodoService;
