mod ids;

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::models::*;

pub use ids::{IdPolicy, UnknownIdPolicy};
use ids::IdAllocator;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo {0} not found")]
    NotFound(TodoId),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    ids: IdAllocator,
}

/// Process-local todo list.
///
/// Cloning the store hands out another handle to the same list. The list and
/// the id counter sit behind one mutex, held for the whole of each operation.
#[derive(Debug, Clone)]
pub struct TodoStore {
    inner: Arc<Mutex<Inner>>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

impl TodoStore {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                todos: Vec::new(),
                ids: IdAllocator::new(policy),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("todo store lock poisoned")
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.lock().ids.policy()
    }

    pub fn len(&self) -> usize {
        self.lock().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().todos.is_empty()
    }

    // ============================================================
    // Todo operations
    // ============================================================

    /// All todos in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.lock().todos.clone()
    }

    /// The first todo carrying `id`.
    pub fn get(&self, id: TodoId) -> Result<Todo> {
        self.lock()
            .todos
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new todo and return the id it was given.
    pub fn create(&self, input: CreateTodoInput) -> TodoId {
        let mut inner = self.lock();
        let id = inner.ids.allocate();
        inner.todos.push(input.into_todo(id));
        tracing::debug!(%id, total = inner.todos.len(), "created todo");
        id
    }

    /// Merge `input` over the first todo carrying `id`.
    pub fn update(&self, id: TodoId, input: UpdateTodoInput) -> Result<Todo> {
        let mut inner = self.lock();
        let todo = inner
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        todo.apply(input);
        tracing::debug!(%id, "updated todo");
        Ok(todo.clone())
    }

    /// Remove every todo carrying `id`.
    ///
    /// More than one can only match once the rewind policy has handed out a
    /// duplicate id.
    pub fn delete(&self, id: TodoId) -> Result<()> {
        let mut inner = self.lock();
        let before = inner.todos.len();
        inner.todos.retain(|todo| todo.id != id);
        let removed = before - inner.todos.len();
        if removed == 0 {
            return Err(StoreError::NotFound(id));
        }

        let Inner { todos, ids } = &mut *inner;
        ids.after_delete(todos);
        tracing::debug!(%id, removed, total = todos.len(), "deleted todo");
        Ok(())
    }
}
