//! Domain models for the todo service.
//!
//! - [`Todo`]: a stored record, identified by a store-assigned [`TodoId`].
//! - [`CreateTodoInput`] / [`UpdateTodoInput`]: request bodies for creating
//!   and partially updating a todo.

mod todo;

pub use todo::*;
