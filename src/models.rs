//! Frontend Models
//!
//! Data structures matching the backend wire format.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Family member a task can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignee {
    Dad,
    Mom,
    Kid,
    Everyone,
}

impl Assignee {
    pub fn as_str(&self) -> &'static str {
        match self {
            Assignee::Dad => "Dad",
            Assignee::Mom => "Mom",
            Assignee::Kid => "Kid",
            Assignee::Everyone => "Everyone",
        }
    }

    /// CSS class that colors a card for this family member
    pub fn color_class(&self) -> &'static str {
        match self {
            Assignee::Dad => "assignee-dad",
            Assignee::Mom => "assignee-mom",
            Assignee::Kid => "assignee-kid",
            Assignee::Everyone => "assignee-everyone",
        }
    }
}

/// Optional label grouping tasks by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Chore,
    Event,
    School,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chore => "Chore",
            Category::Event => "Event",
            Category::School => "School",
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub is_completed: bool,
    pub assignee: Assignee,
    /// 24-hour "HH:MM", absent for untimed tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}
