//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row,
//!   serialized in camelCase for the wire
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (`Option` / `Patch` fields) for patches

pub mod diary;
pub mod habit;
pub mod list;
pub mod next_item;
pub mod question;
pub mod task;
pub mod vlog;
