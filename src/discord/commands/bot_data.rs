// Shared state handed to every command by poise.

use crate::core::faq::ChatService;
use crate::core::records::{PriceEntry, PriceService, Report, ReportService, TodoItem, TodoService};
use crate::infra::records::{JsonRecordStore, LocalUploadStore};
use std::sync::Arc;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub type Reports = ReportService<JsonRecordStore<Report>, LocalUploadStore>;
pub type Prices = PriceService<JsonRecordStore<PriceEntry>>;
pub type Todos = TodoService<JsonRecordStore<TodoItem>>;

pub struct Data {
    pub chat: Arc<ChatService>,
    pub reports: Arc<Reports>,
    pub prices: Arc<Prices>,
    pub todos: Arc<Todos>,
}
