//! Pages
//!
//! Top-level page components for each view.

pub mod analytics;
pub mod dashboard;
pub mod login;
pub mod personnel;
pub mod plan;
pub mod schedule;
pub mod vacations;

pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use login::Login;
pub use personnel::Personnel;
pub use plan::Plan;
pub use schedule::Schedule;
pub use vacations::Vacations;
