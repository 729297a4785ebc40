//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TaskStatus;

/// A unit of work inside a project, optionally assigned to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Short title.
    pub title: String,
    /// Owning project identifier.
    pub project_id: String,
    /// Assigned user, if any.
    pub assignee_id: Option<Uuid>,
    /// Workflow status.
    #[serde(default)]
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create an unassigned task in the default status.
    pub fn new(title: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            project_id: project_id.into(),
            assignee_id: None,
            status: TaskStatus::default(),
            created_at: Utc::now(),
        }
    }
}
