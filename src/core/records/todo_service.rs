use super::record_collection::RecordCollection;
use super::records_models::TodoItem;
use super::records_store::{RecordError, RecordFile};

/// Daily reminder list.
pub struct TodoService<S: RecordFile<TodoItem>> {
    todos: RecordCollection<TodoItem, S>,
}

impl<S: RecordFile<TodoItem>> TodoService<S> {
    pub async fn open(store: S) -> Self {
        Self {
            todos: RecordCollection::open(store).await,
        }
    }

    pub async fn list(&self) -> Vec<TodoItem> {
        self.todos.snapshot().await
    }

    /// Add a task. Blank tasks are rejected without touching the file.
    pub async fn add(&self, task: &str) -> Result<TodoItem, RecordError> {
        let task = task.trim();
        if task.is_empty() {
            return Err(RecordError::MissingField("task"));
        }

        let item = TodoItem {
            task: task.to_string(),
        };
        self.todos.append(item.clone()).await?;
        Ok(item)
    }

    /// Remove the task at `index`; `None` if there is no such task.
    pub async fn remove(&self, index: usize) -> Result<Option<TodoItem>, RecordError> {
        Ok(self.todos.remove(index).await?)
    }
}
