use shared::WeekdayTag;
use crate::services::logging::Logger;

/// Weekday of the host's current local date
pub fn today_weekday() -> WeekdayTag {
    use js_sys::Date;
    let now = Date::new_0();
    let day = now.get_day(); // 0 = Sunday, 6 = Saturday

    WeekdayTag::from_day_index(day).unwrap_or_else(|| {
        Logger::warn_with_component("date-utils", &format!("Unexpected day index {}, falling back to Mon", day));
        WeekdayTag::Mon
    })
}
