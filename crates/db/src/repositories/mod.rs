//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Batch mutations run inside
//! a single transaction so they commit all-or-nothing.

pub mod diary_repo;
pub mod habit_entry_repo;
pub mod habit_repo;
pub mod list_repo;
pub mod next_item_repo;
pub mod question_repo;
pub mod task_repo;
pub mod vlog_repo;

pub use diary_repo::DiaryRepo;
pub use habit_entry_repo::HabitEntryRepo;
pub use habit_repo::HabitRepo;
pub use list_repo::ListRepo;
pub use next_item_repo::NextItemRepo;
pub use question_repo::QuestionRepo;
pub use task_repo::TaskRepo;
pub use vlog_repo::VlogRepo;
