//! Task aggregate and the commands that reshape it.

use super::{Progress, TaskDomainError, TaskId, TaskStatus, TaskTitle};
use crate::account::domain::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Task aggregate.
///
/// Serialized in the backend collaborator's wire shape: camelCase keys,
/// status as `TODO`/`IN_PROGRESS`/`DONE`, dates as `YYYY-MM-DD`.
/// Deserialization goes through [`Task::from_fields`], so reversed dates are
/// rejected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskWire")]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    status: TaskStatus,
    progress: Progress,
    assigned_to: BTreeSet<UserId>,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct TaskWire {
    id: TaskId,
    #[serde(flatten)]
    fields: TaskFields,
}

impl TryFrom<TaskWire> for Task {
    type Error = TaskDomainError;

    fn try_from(wire: TaskWire) -> Result<Self, Self::Error> {
        Self::from_fields(wire.id, wire.fields)
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Title, validated on creation.
    pub title: String,
    /// Free text description.
    #[serde(default)]
    pub description: String,
    /// Column the task is created in.
    #[serde(default = "default_status")]
    pub status: TaskStatus,
    /// Optional start date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

const fn default_status() -> TaskStatus {
    TaskStatus::Todo
}

impl NewTask {
    /// Creates input for a `Todo` task with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            start_date: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the column the task starts in.
    #[must_use]
    pub const fn in_column(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the start and due dates.
    #[must_use]
    pub const fn scheduled(mut self, start: Option<NaiveDate>, due: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.due_date = due;
        self
    }
}

/// Field-level edits applied by the detail editor. Status is deliberately
/// absent: status changes go through [`Task::transition_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    /// Replacement title.
    pub title: TaskTitle,
    /// Replacement description.
    pub description: String,
    /// Replacement progress.
    pub progress: Progress,
    /// Replacement assignee set.
    pub assigned_to: BTreeSet<UserId>,
    /// Replacement start date.
    pub start_date: Option<NaiveDate>,
    /// Replacement due date.
    pub due_date: Option<NaiveDate>,
}

/// Every task field except the identifier, as posted to a store that
/// assigns identifiers itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFields {
    /// Title.
    pub title: TaskTitle,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Status.
    pub status: TaskStatus,
    /// Progress.
    #[serde(default)]
    pub progress: Progress,
    /// Assignees.
    #[serde(default)]
    pub assigned_to: BTreeSet<UserId>,
    /// Start date.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Creates a task from creation input with a fresh identifier.
    ///
    /// New tasks always start with zero progress and no assignees, whatever
    /// column they are created in.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] for a blank title or
    /// [`TaskDomainError::DueBeforeStart`] when the dates are reversed.
    pub fn create(input: NewTask) -> Result<Self, TaskDomainError> {
        Self::create_with_id(TaskId::generate(), input)
    }

    /// Creates a task from creation input using the given identifier.
    ///
    /// # Errors
    ///
    /// See [`Task::create`].
    pub fn create_with_id(id: TaskId, input: NewTask) -> Result<Self, TaskDomainError> {
        let NewTask {
            title,
            description,
            status,
            start_date,
            due_date,
        } = input;
        check_schedule(start_date, due_date)?;
        Ok(Self {
            id,
            title: TaskTitle::new(title)?,
            description,
            status,
            progress: Progress::NONE,
            assigned_to: BTreeSet::new(),
            start_date,
            due_date,
        })
    }

    /// Builds a task from identifier-less fields under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueBeforeStart`] when the dates are
    /// reversed.
    pub fn from_fields(id: TaskId, fields: TaskFields) -> Result<Self, TaskDomainError> {
        check_schedule(fields.start_date, fields.due_date)?;
        Ok(Self {
            id,
            title: fields.title,
            description: fields.description,
            status: fields.status,
            progress: fields.progress,
            assigned_to: fields.assigned_to,
            start_date: fields.start_date,
            due_date: fields.due_date,
        })
    }

    /// Returns a copy of every field except the identifier.
    #[must_use]
    pub fn fields(&self) -> TaskFields {
        TaskFields {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            progress: self.progress,
            assigned_to: self.assigned_to.clone(),
            start_date: self.start_date,
            due_date: self.due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the progress.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the assigned users.
    #[must_use]
    pub const fn assigned_to(&self) -> &BTreeSet<UserId> {
        &self.assigned_to
    }

    /// Returns `true` when the user is assigned to this task.
    #[must_use]
    pub fn is_assigned_to(&self, user: &UserId) -> bool {
        self.assigned_to.contains(user)
    }

    /// Returns the start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns both dates when the task is fully scheduled.
    #[must_use]
    pub const fn schedule(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.due_date) {
            (Some(start), Some(due)) => Some((start, due)),
            _ => None,
        }
    }

    /// Moves the task into `target`, settling progress for the new status.
    pub const fn transition_to(&mut self, target: TaskStatus) {
        self.progress = target.settle_progress(self.progress);
        self.status = target;
    }

    /// Replaces every editable field except status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueBeforeStart`] when the edited dates are
    /// reversed; the task is left unchanged.
    pub fn apply_edit(&mut self, edit: TaskEdit) -> Result<(), TaskDomainError> {
        check_schedule(edit.start_date, edit.due_date)?;
        self.title = edit.title;
        self.description = edit.description;
        self.progress = edit.progress;
        self.assigned_to = edit.assigned_to;
        self.start_date = edit.start_date;
        self.due_date = edit.due_date;
        Ok(())
    }

    /// Splits an edited task into its field edits and requested status.
    #[must_use]
    pub fn into_edit(self) -> (TaskEdit, TaskStatus) {
        let edit = TaskEdit {
            title: self.title,
            description: self.description,
            progress: self.progress,
            assigned_to: self.assigned_to,
            start_date: self.start_date,
            due_date: self.due_date,
        };
        (edit, self.status)
    }

    /// Assigns a user. Returns `false` when already assigned.
    pub fn assign(&mut self, user: UserId) -> bool {
        self.assigned_to.insert(user)
    }

    /// Removes a user assignment. Returns `false` when not assigned.
    pub fn unassign(&mut self, user: &UserId) -> bool {
        self.assigned_to.remove(user)
    }

    /// Sets progress directly, leaving status untouched.
    pub const fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
    }
}

fn check_schedule(
    start: Option<NaiveDate>,
    due: Option<NaiveDate>,
) -> Result<(), TaskDomainError> {
    match (start, due) {
        (Some(start), Some(due)) if due < start => {
            Err(TaskDomainError::DueBeforeStart { start, due })
        }
        _ => Ok(()),
    }
}
