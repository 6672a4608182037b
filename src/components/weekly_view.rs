//! Weekly View Component
//!
//! Seven day columns around a fixed hour timeline. Tasks starting outside
//! the visible window land in compact strips above and below the grid.

use chrono::{Datelike, Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::TaskCard;
use crate::context::AppContext;
use crate::models::Task;
use crate::schedule;
use crate::store::{self, use_app_store, AppStateStoreFields, AppStore};

/// Untimed chips shown in the early strip before collapsing into "+N"
const UNTIMED_PREVIEW: usize = 2;

#[component]
pub fn WeeklyView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="weekly-view">
            <div class="week-nav">
                <button
                    class="week-nav-btn"
                    on:click=move |_| {
                        ctx.set_view_date(schedule::previous_week(ctx.view_date.get_untracked()))
                    }
                >
                    "‹"
                </button>
                <h2>{move || schedule::month_label(ctx.view_date.get())}</h2>
                <button
                    class="week-nav-btn"
                    on:click=move |_| {
                        ctx.set_view_date(schedule::next_week(ctx.view_date.get_untracked()))
                    }
                >
                    "›"
                </button>
            </div>

            <div class="week-grid">
                <TimeColumn />
                <div class="day-columns">
                    {move || {
                        schedule::week_days(ctx.view_date.get())
                            .into_iter()
                            .map(|day| view! { <DayColumn day=day /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

/// Fixed column of hour labels between the two strip markers
#[component]
fn TimeColumn() -> impl IntoView {
    view! {
        <div class="time-column">
            <div class="day-header-spacer"></div>
            <div class="strip-label">"Earlier"</div>
            <div class="time-labels" style=format!("height: {}px;", schedule::timeline_height())>
                {schedule::hour_marks()
                    .enumerate()
                    .map(|(i, hour)| view! {
                        <div
                            class="time-label"
                            style=format!("top: {}px;", i as f64 * schedule::PIXELS_PER_HOUR)
                        >
                            {schedule::hour_label(hour)}
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="strip-label">"Later"</div>
        </div>
    }
}

/// One day: header, early strip, timeline, late strip
#[component]
fn DayColumn(day: NaiveDate) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let day_schedule = Memo::new(move |_| schedule::day_schedule(&store.tasks().get(), day));
    let is_today = day == Local::now().date_naive();

    view! {
        <div class=if is_today { "day-column today" } else { "day-column" }>
            <div class="day-header" on:click=move |_| ctx.set_adding_for(Some(day))>
                <span class="day-name">{day.format("%a").to_string()}</span>
                <span class=if is_today { "day-number today" } else { "day-number" }>
                    {day.day()}
                </span>
            </div>

            <div class="day-strip">
                {move || {
                    let sched = day_schedule.get();
                    if !sched.earlier.is_empty() {
                        sched
                            .earlier
                            .iter()
                            .map(|task| chip(store, task, true))
                            .collect_view()
                            .into_any()
                    } else if !sched.untimed.is_empty() {
                        let shown = sched
                            .untimed
                            .iter()
                            .take(UNTIMED_PREVIEW)
                            .map(|task| chip(store, task, false))
                            .collect_view();
                        let hidden = sched.untimed.len().saturating_sub(UNTIMED_PREVIEW);
                        view! {
                            {shown}
                            {(hidden > 0)
                                .then(|| view! { <span class="chip-overflow">{format!("+{hidden}")}</span> })}
                        }
                        .into_any()
                    } else {
                        ().into_any()
                    }
                }}
            </div>

            <div class="day-timeline" style=format!("height: {}px;", schedule::timeline_height())>
                {schedule::hour_marks()
                    .enumerate()
                    .map(|(i, _)| view! {
                        <div
                            class="hour-line"
                            style=format!("top: {}px;", i as f64 * schedule::PIXELS_PER_HOUR)
                        ></div>
                    })
                    .collect_view()}
                {move || {
                    day_schedule
                        .get()
                        .timed
                        .into_iter()
                        .map(|placement| view! {
                            <div
                                class="timed-slot"
                                style=format!(
                                    "top: {}px; height: {}px;",
                                    placement.top_px,
                                    placement.height_px,
                                )
                            >
                                <TaskCard task=placement.task />
                            </div>
                        })
                        .collect_view()
                }}
            </div>

            <div class="day-strip">
                {move || {
                    day_schedule
                        .get()
                        .later
                        .iter()
                        .map(|task| chip(store, task, true))
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Compact chip for a task outside the timeline window; click toggles
fn chip(store: AppStore, task: &Task, show_time: bool) -> impl IntoView {
    let label = match (&task.start_time, show_time) {
        (Some(time), true) => format!("{time} {}", task.title),
        _ => task.title.clone(),
    };
    let class = format!(
        "task-chip {}{}",
        task.assignee.color_class(),
        if task.is_completed { " completed" } else { "" }
    );
    let id = task.id.clone();
    view! {
        <span
            class=class
            on:click=move |_| spawn_local(store::toggle_task(store, id.clone()))
        >
            {label}
        </span>
    }
}
