//! Shared type aliases and the closed enumerations used at system boundaries.
//!
//! Free-form strings for `category`, `state`, `size` and friends are rejected
//! when requests are deserialized; values read back from storage go through
//! `FromStr`, which surfaces junk instead of passing it along.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Life,
    Work,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Life => "life",
            Category::Work => "work",
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "life" => Ok(Category::Life),
            "work" => Ok(Category::Work),
            other => Err(CoreError::Validation(format!(
                "Unknown category: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task lifecycle state.
///
/// `completed` on a task must agree with this: `completed == true` exactly
/// when the state is [`TaskState::Completed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Active,
    Completed,
    Failed,
}

impl TaskState {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskState::Active => "active",
            TaskState::Completed => "completed",
            TaskState::Failed => "failed",
        }
    }
}

impl FromStr for TaskState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TaskState::Active),
            "completed" => Ok(TaskState::Completed),
            "failed" => Ok(TaskState::Failed),
            other => Err(CoreError::UnrecognizedState(other.to_string())),
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display size of a next-item card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NextItemSize {
    Small,
    Medium,
    Large,
}

impl NextItemSize {
    pub fn as_str(self) -> &'static str {
        match self {
            NextItemSize::Small => "small",
            NextItemSize::Medium => "medium",
            NextItemSize::Large => "large",
        }
    }
}

/// Default time-of-day slot for a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitTime {
    Morning,
    Afternoon,
    Evening,
    Night,
    Routine,
}

impl HabitTime {
    pub fn as_str(self) -> &'static str {
        match self {
            HabitTime::Morning => "morning",
            HabitTime::Afternoon => "afternoon",
            HabitTime::Evening => "evening",
            HabitTime::Night => "night",
            HabitTime::Routine => "routine",
        }
    }
}

/// Ambient audio theme for the nook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherMode {
    Normal,
    Rain,
}

impl WeatherMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherMode::Normal => "normal",
            WeatherMode::Rain => "rain",
        }
    }
}

impl FromStr for WeatherMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(WeatherMode::Normal),
            "rain" => Ok(WeatherMode::Rain),
            other => Err(CoreError::Validation(format!(
                "Unknown weather mode: {other:?}"
            ))),
        }
    }
}
