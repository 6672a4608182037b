//! UI Components
//!
//! Reusable Leptos components.

mod add_task_modal;
mod error_banner;
mod family_code_modal;
mod task_card;
mod weekly_view;

pub use add_task_modal::AddTaskModal;
pub use error_banner::ErrorBanner;
pub use family_code_modal::FamilyCodeModal;
pub use task_card::TaskCard;
pub use weekly_view::WeeklyView;
