//! Role-based authorization for tracker operations.
//!
//! Every mutation goes through [`authorize`] with a typed [`Action`]; roles
//! are never compared as strings outside [`Role::from_str`].

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Role assigned to the acting user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including deleting projects
    #[default]
    Admin,
    /// Manages projects and tasks but cannot delete projects
    Manager,
    /// Works on tasks inside existing projects
    Member,
    /// Read-only access
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Member => "member",
            Role::Viewer => "viewer",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "member" => Ok(Role::Member),
            "viewer" => Ok(Role::Viewer),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations subject to an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewProjects,
    CreateProject,
    EditProject,
    DeleteProject,
    CreateTask,
    EditTask,
    DeleteTask,
    ViewTimeline,
}

impl Action {
    /// Whether the action only reads records.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Action::ViewProjects | Action::ViewTimeline)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::ViewProjects => "view projects",
            Action::CreateProject => "create projects",
            Action::EditProject => "edit projects",
            Action::DeleteProject => "delete projects",
            Action::CreateTask => "create tasks",
            Action::EditTask => "edit tasks",
            Action::DeleteTask => "delete tasks",
            Action::ViewTimeline => "view timelines",
        };
        f.write_str(text)
    }
}

/// The user on whose behalf tracker operations run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: "local".to_string(),
            role: Role::Admin,
        }
    }
}

/// Decide whether `user` may perform `action`.
pub fn authorize(user: &User, action: Action) -> bool {
    if action.is_read_only() {
        return true;
    }
    match user.role {
        Role::Admin => true,
        Role::Manager => action != Action::DeleteProject,
        Role::Member => matches!(action, Action::CreateTask | Action::EditTask),
        Role::Viewer => false,
    }
}
