// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "faq/mod.rs"]
pub mod faq;

#[path = "records/mod.rs"]
pub mod records;

#[path = "fertilizer/mod.rs"]
pub mod fertilizer;
