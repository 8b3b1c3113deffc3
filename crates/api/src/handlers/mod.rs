//! Request handlers, one module per resource.

pub mod diary;
pub mod habits;
pub mod lists;
pub mod next_items;
pub mod tasks;
pub mod vlogs;
