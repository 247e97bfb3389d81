// File: ./src/model/mod.rs
pub mod calendar;
pub mod item;
pub mod matcher;
pub mod navigation;
pub mod parser;

pub use calendar::CalendarMonth;
pub use item::{Celebration, CelebrationKind, FixedEvent, OccasionalEvent};
pub use matcher::events_for_day;
pub use navigation::ViewState;
pub use parser::DateOrder;
