//! Task models and DTOs.
//!
//! A task's `completed` flag and `state` must agree; the reconciliation
//! helpers here normalize the pair and reject contradictory input before
//! anything reaches the database.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dayroom_core::error::CoreError;
use dayroom_core::patch::Patch;
use dayroom_core::types::{Category, TaskState, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `tasks` table.
///
/// `category` and `state` are stored as text and kept raw here; junk values
/// in storage surface as [`CoreError::UnrecognizedState`] during bucketing
/// rather than being silently dropped.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub date: NaiveDate,
    pub created_at: Timestamp,
    pub category: String,
    pub state: String,
    pub order: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a task. The caller supplies the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub state: Option<TaskState>,
    #[serde(default)]
    pub order: Option<String>,
}

impl CreateTask {
    /// Resolve the (`completed`, `state`) pair, defaulting to an active task.
    pub fn reconcile_state(&self) -> Result<(bool, TaskState), CoreError> {
        reconcile(self.completed, self.state)
            .map(|(completed, state)| (completed.unwrap_or(false), state.unwrap_or(TaskState::Active)))
    }
}

/// DTO for a partial task update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub state: Option<TaskState>,
    /// Nullable: explicit `null` clears the order key.
    #[serde(default)]
    pub order: Patch<String>,
}

impl UpdateTask {
    /// Normalize `completed`/`state` so a patch can never leave the pair
    /// inconsistent: setting one side implies the other.
    pub fn reconcile_state(&self) -> Result<(Option<bool>, Option<TaskState>), CoreError> {
        reconcile(self.completed, self.state)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.completed.is_none()
            && self.date.is_none()
            && self.category.is_none()
            && self.state.is_none()
            && self.order.is_unset()
    }
}

fn reconcile(
    completed: Option<bool>,
    state: Option<TaskState>,
) -> Result<(Option<bool>, Option<TaskState>), CoreError> {
    match (completed, state) {
        (Some(true), Some(s)) if s != TaskState::Completed => Err(CoreError::Validation(
            format!("completed=true conflicts with state={s}"),
        )),
        (Some(false), Some(TaskState::Completed)) => Err(CoreError::Validation(
            "completed=false conflicts with state=completed".into(),
        )),
        (Some(true), _) => Ok((Some(true), Some(TaskState::Completed))),
        (Some(false), s) => Ok((Some(false), Some(s.unwrap_or(TaskState::Active)))),
        (None, Some(s)) => Ok((Some(s == TaskState::Completed), Some(s))),
        (None, None) => Ok((None, None)),
    }
}

/// One entry of a batch reorder: the new key plus any bucket change that
/// rides along with the move.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskMove {
    pub id: String,
    pub order: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub state: Option<TaskState>,
}

/// Body of `POST /tasks/batch/punt`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPuntRequest {
    pub task_ids: Vec<String>,
    pub source_date: NaiveDate,
    pub target_date: NaiveDate,
}

/// Body of `POST /tasks/batch/fail`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailRequest {
    pub task_ids: Vec<String>,
}

/// Body of `POST /tasks/batch/reorder`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReorderRequest {
    pub moves: Vec<TaskMove>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_true_implies_completed_state() {
        let dto = UpdateTask {
            completed: Some(true),
            ..Default::default()
        };
        let (completed, state) = dto.reconcile_state().unwrap();
        assert_eq!(completed, Some(true));
        assert_eq!(state, Some(TaskState::Completed));
    }

    #[test]
    fn completed_state_implies_completed_flag() {
        let dto = UpdateTask {
            state: Some(TaskState::Completed),
            ..Default::default()
        };
        let (completed, state) = dto.reconcile_state().unwrap();
        assert_eq!(completed, Some(true));
        assert_eq!(state, Some(TaskState::Completed));
    }

    #[test]
    fn uncompleting_reverts_to_active() {
        let dto = UpdateTask {
            completed: Some(false),
            ..Default::default()
        };
        let (completed, state) = dto.reconcile_state().unwrap();
        assert_eq!(completed, Some(false));
        assert_eq!(state, Some(TaskState::Active));
    }

    #[test]
    fn contradictory_pair_is_rejected() {
        let dto = UpdateTask {
            completed: Some(true),
            state: Some(TaskState::Failed),
            ..Default::default()
        };
        assert!(dto.reconcile_state().is_err());

        let dto = UpdateTask {
            completed: Some(false),
            state: Some(TaskState::Completed),
            ..Default::default()
        };
        assert!(dto.reconcile_state().is_err());
    }

    #[test]
    fn failed_state_clears_completed() {
        let dto = UpdateTask {
            state: Some(TaskState::Failed),
            ..Default::default()
        };
        let (completed, state) = dto.reconcile_state().unwrap();
        assert_eq!(completed, Some(false));
        assert_eq!(state, Some(TaskState::Failed));
    }
}
