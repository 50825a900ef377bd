pub mod grid_wrapper;
pub mod weekday_picker;

pub use grid_wrapper::GridWrapper;
pub use weekday_picker::WeekdayPicker;
