//! Storage for the todo collection

pub mod in_memory;

pub use in_memory::InMemoryTodoStore;
