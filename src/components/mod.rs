//! UI Components
//!
//! Leptos components for the todo board.

mod drop_zone;
mod new_todo_form;
mod status_bar;
mod todo_list;
mod todo_row;

pub use drop_zone::DropZone;
pub use new_todo_form::NewTodoForm;
pub use status_bar::StatusBar;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
