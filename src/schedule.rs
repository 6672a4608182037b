//! Week Grid Layout
//!
//! Pure layout math for the weekly planner: which days the visible week
//! spans, which vertical band each task lands in, and the pixel geometry
//! of timed cards. Kept free of DOM types so it can be tested natively.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::Task;

/// First hour shown on the timeline
pub const DAY_START_HOUR: u32 = 9;
/// Hour the timeline ends; starts at or past it drop into the late strip
pub const DAY_END_HOUR: u32 = 21;
/// Height of one hour slot
pub const PIXELS_PER_HOUR: f64 = 60.0;

/// Hours that get a mark in the time column, top to bottom.
pub fn hour_marks() -> impl Iterator<Item = u32> {
    DAY_START_HOUR..DAY_END_HOUR
}

/// Total height of the timeline in pixels.
pub fn timeline_height() -> f64 {
    f64::from(DAY_END_HOUR - DAY_START_HOUR) * PIXELS_PER_HOUR
}

/// Parses a 24-hour "HH:MM" start time.
pub fn parse_start_time(s: &str) -> Option<(u32, u32)> {
    let (h, m) = s.split_once(':')?;
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// A timed task with its pixel placement on the day column
#[derive(Debug, Clone, PartialEq)]
pub struct TimedPlacement {
    pub task: Task,
    pub top_px: f64,
    pub height_px: f64,
}

/// One day's tasks split into the bands the grid renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySchedule {
    /// Starts before the visible window; shown as chips above the grid
    pub earlier: Vec<Task>,
    /// Falls inside the window; absolutely positioned on the timeline
    pub timed: Vec<TimedPlacement>,
    /// Starts at or after the window ends; chips below the grid
    pub later: Vec<Task>,
    /// No parseable start time; surfaces in the early strip when it is free
    pub untimed: Vec<Task>,
}

fn offset_px(hour: u32, minute: u32) -> f64 {
    let minutes_from_start = (i64::from(hour) - i64::from(DAY_START_HOUR)) * 60 + i64::from(minute);
    minutes_from_start.max(0) as f64 / 60.0 * PIXELS_PER_HOUR
}

fn height_px(task: &Task) -> f64 {
    f64::from(task.duration_minutes.unwrap_or(60)) / 60.0 * PIXELS_PER_HOUR
}

/// Splits the tasks falling on `day` into the four vertical bands.
pub fn day_schedule(tasks: &[Task], day: NaiveDate) -> DaySchedule {
    let mut schedule = DaySchedule::default();
    for task in tasks.iter().filter(|t| t.date == day) {
        match task.start_time.as_deref().and_then(parse_start_time) {
            Some((hour, minute)) if (DAY_START_HOUR..DAY_END_HOUR).contains(&hour) => {
                schedule.timed.push(TimedPlacement {
                    top_px: offset_px(hour, minute),
                    height_px: height_px(task),
                    task: task.clone(),
                });
            }
            Some((hour, _)) if hour < DAY_START_HOUR => schedule.earlier.push(task.clone()),
            Some(_) => schedule.later.push(task.clone()),
            None => schedule.untimed.push(task.clone()),
        }
    }
    schedule
}

/// Monday that starts the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The seven days of the week containing `date`, Monday first.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(date);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

pub fn previous_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(7)
}

pub fn next_week(date: NaiveDate) -> NaiveDate {
    date + Duration::days(7)
}

/// "9 AM" style label for an hour mark.
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display} {suffix}")
}

/// "March 2024" heading for the week containing `date`.
pub fn month_label(date: NaiveDate) -> String {
    week_start(date).format("%B %Y").to_string()
}
