//! Task Entity
//!
//! A task lives inside a family partition: the family code is the partition
//! key, the task id the row key. Title, date and assignee are mandatory;
//! start time, duration and category are optional extras used by the weekly
//! grid on the client.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

/// Family member a task is assigned to
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

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Dad" => Some(Assignee::Dad),
            "Mom" => Some(Assignee::Mom),
            "Kid" => Some(Assignee::Kid),
            "Everyone" => Some(Assignee::Everyone),
            _ => None,
        }
    }
}

/// Task category shown as a label on the card
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

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Chore" => Some(Category::Chore),
            "Event" => Some(Category::Event),
            "School" => Some(Category::School),
            _ => None,
        }
    }
}

/// A persisted task row
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Partition key: the shared family code
    pub family_code: String,
    /// Row key: unique within the family partition
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub is_completed: bool,
    pub assignee: Assignee,
    /// 24-hour "HH:MM", absent for untimed tasks
    pub start_time: Option<String>,
    pub duration_minutes: Option<u32>,
    pub category: Option<Category>,
}

impl Task {
    /// Checks the field invariants every persisted task must satisfy.
    pub fn validate(&self) -> DomainResult<()> {
        if self.family_code.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "family code must not be empty".to_string(),
            ));
        }
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "task id must not be empty".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "title must not be empty".to_string(),
            ));
        }
        if let Some(start) = &self.start_time {
            if parse_hour_minute(start).is_none() {
                return Err(DomainError::InvalidInput(format!(
                    "start time '{}' is not a valid HH:MM pair",
                    start
                )));
            }
        }
        if self.duration_minutes == Some(0) {
            return Err(DomainError::InvalidInput(
                "duration must be a positive number of minutes".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parses a 24-hour "HH:MM" string into an (hour, minute) pair.
pub fn parse_hour_minute(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.split_once(':')?;
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task {
            family_code: "ABC123".to_string(),
            id: "t1".to_string(),
            title: "Buy milk".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            is_completed: false,
            assignee: Assignee::Mom,
            start_time: None,
            duration_minutes: None,
            category: None,
        }
    }

    #[test]
    fn test_valid_task_passes() {
        assert!(sample_task().validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut task = sample_task();
        task.title = "   ".to_string();
        assert!(task.validate().is_err());
    }

    #[test]
    fn test_malformed_start_time_rejected() {
        let mut task = sample_task();
        task.start_time = Some("25:00".to_string());
        assert!(task.validate().is_err());
        task.start_time = Some("9am".to_string());
        assert!(task.validate().is_err());
        task.start_time = Some("09:30".to_string());
        assert!(task.validate().is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut task = sample_task();
        task.duration_minutes = Some(0);
        assert!(task.validate().is_err());
        task.duration_minutes = Some(90);
        assert!(task.validate().is_ok());
    }

    #[test]
    fn test_hour_minute_parsing() {
        assert_eq!(parse_hour_minute("09:00"), Some((9, 0)));
        assert_eq!(parse_hour_minute("23:59"), Some((23, 59)));
        assert_eq!(parse_hour_minute("7:5"), Some((7, 5)));
        assert_eq!(parse_hour_minute("24:00"), None);
        assert_eq!(parse_hour_minute("12:60"), None);
        assert_eq!(parse_hour_minute("noon"), None);
        assert_eq!(parse_hour_minute(""), None);
    }

    #[test]
    fn test_assignee_round_trip() {
        for name in ["Dad", "Mom", "Kid", "Everyone"] {
            let assignee = Assignee::from_str(name).unwrap();
            assert_eq!(assignee.as_str(), name);
        }
        assert_eq!(Assignee::from_str("Uncle"), None);
    }
}
