//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::NaiveDate;
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch tasks from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch tasks from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Day the add-task modal targets (None = closed) - read
    pub adding_for: ReadSignal<Option<NaiveDate>>,
    /// Day the add-task modal targets - write
    set_adding_for: WriteSignal<Option<NaiveDate>>,
    /// Anchor day of the visible week - read
    pub view_date: ReadSignal<NaiveDate>,
    /// Anchor day of the visible week - write
    set_view_date: WriteSignal<NaiveDate>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        adding_for: (ReadSignal<Option<NaiveDate>>, WriteSignal<Option<NaiveDate>>),
        view_date: (ReadSignal<NaiveDate>, WriteSignal<NaiveDate>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            adding_for: adding_for.0,
            set_adding_for: adding_for.1,
            view_date: view_date.0,
            set_view_date: view_date.1,
        }
    }

    /// Trigger a refetch of tasks
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Open the add-task modal for a day, or close it with None
    pub fn set_adding_for(&self, date: Option<NaiveDate>) {
        self.set_adding_for.set(date);
    }

    /// Jump the visible week to the one containing `date`
    pub fn set_view_date(&self, date: NaiveDate) {
        self.set_view_date.set(date);
    }
}
