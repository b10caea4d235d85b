//! Display formatting wrappers.
//!
//! Domain models stay free of presentation concerns; these wrappers format
//! them as markdown for the terminal renderer. Times are shown as clock times,
//! which needs the grid configuration, so most wrappers borrow a
//! [`GridConfig`](crate::grid::GridConfig) alongside the data.
//!
//! ## Module Organization
//!
//! - [`agenda`]: task lines, day and week agendas
//! - [`layout`]: pixel geometry table for a week layout
//! - [`results`]: outcome of a task operation
//! - [`status`]: status and confirmation messages
//! - [`datetime`]: clock time and hour label formatting

pub mod agenda;
pub mod datetime;
pub mod layout;
pub mod results;
pub mod status;

pub use agenda::{DayAgenda, TaskLine, WeekAgenda};
pub use datetime::{ClockTime, HourLabel};
pub use layout::LayoutTable;
pub use results::TaskResult;
pub use status::OperationStatus;
