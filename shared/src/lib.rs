use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use chrono::Datelike;

/// Symbolic identifier for one of the seven days shown by the weekday picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekdayTag {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// One row of the static weekday option table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayOption {
    pub value: WeekdayTag,
    /// Full label, used as the button tooltip
    pub label: &'static str,
    /// Label rendered inside the button
    pub short_label: &'static str,
}

/// Weekday options in display order (Monday first)
pub const WEEKDAYS: [WeekdayOption; 7] = [
    WeekdayOption { value: WeekdayTag::Mon, label: "周一", short_label: "周一" },
    WeekdayOption { value: WeekdayTag::Tue, label: "周二", short_label: "周二" },
    WeekdayOption { value: WeekdayTag::Wed, label: "周三", short_label: "周三" },
    WeekdayOption { value: WeekdayTag::Thu, label: "周四", short_label: "周四" },
    WeekdayOption { value: WeekdayTag::Fri, label: "周五", short_label: "周五" },
    WeekdayOption { value: WeekdayTag::Sat, label: "周六", short_label: "周六" },
    WeekdayOption { value: WeekdayTag::Sun, label: "周日", short_label: "周日" },
];

impl WeekdayTag {
    /// All tags in the same order as `WEEKDAYS`
    pub const ALL: [WeekdayTag; 7] = [
        WeekdayTag::Mon,
        WeekdayTag::Tue,
        WeekdayTag::Wed,
        WeekdayTag::Thu,
        WeekdayTag::Fri,
        WeekdayTag::Sat,
        WeekdayTag::Sun,
    ];

    /// Position of this tag in `WEEKDAYS` (Mon = 0, Sun = 6)
    pub fn index(self) -> usize {
        match self {
            WeekdayTag::Mon => 0,
            WeekdayTag::Tue => 1,
            WeekdayTag::Wed => 2,
            WeekdayTag::Thu => 3,
            WeekdayTag::Fri => 4,
            WeekdayTag::Sat => 5,
            WeekdayTag::Sun => 6,
        }
    }

    /// Map a host day-of-week index (0 = Sunday, 1 = Monday, ... 6 = Saturday)
    pub fn from_day_index(day: u32) -> Option<WeekdayTag> {
        match day {
            0 => Some(WeekdayTag::Sun),
            1 => Some(WeekdayTag::Mon),
            2 => Some(WeekdayTag::Tue),
            3 => Some(WeekdayTag::Wed),
            4 => Some(WeekdayTag::Thu),
            5 => Some(WeekdayTag::Fri),
            6 => Some(WeekdayTag::Sat),
            _ => None,
        }
    }

    /// Weekday of a calendar date
    pub fn from_date<D: Datelike>(date: &D) -> WeekdayTag {
        date.weekday().into()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeekdayTag::Mon => "Mon",
            WeekdayTag::Tue => "Tue",
            WeekdayTag::Wed => "Wed",
            WeekdayTag::Thu => "Thu",
            WeekdayTag::Fri => "Fri",
            WeekdayTag::Sat => "Sat",
            WeekdayTag::Sun => "Sun",
        }
    }

    /// The option table row for this tag
    pub fn option(self) -> &'static WeekdayOption {
        &WEEKDAYS[self.index()]
    }
}

impl From<chrono::Weekday> for WeekdayTag {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => WeekdayTag::Mon,
            chrono::Weekday::Tue => WeekdayTag::Tue,
            chrono::Weekday::Wed => WeekdayTag::Wed,
            chrono::Weekday::Thu => WeekdayTag::Thu,
            chrono::Weekday::Fri => WeekdayTag::Fri,
            chrono::Weekday::Sat => WeekdayTag::Sat,
            chrono::Weekday::Sun => WeekdayTag::Sun,
        }
    }
}

impl fmt::Display for WeekdayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekdayTag {
    type Err = ParseWeekdayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeekdayTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseWeekdayError::UnknownTag(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseWeekdayError {
    UnknownTag(String),
}

impl fmt::Display for ParseWeekdayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWeekdayError::UnknownTag(tag) => write!(f, "Unknown weekday tag: {:?}", tag),
        }
    }
}

impl std::error::Error for ParseWeekdayError {}

/// Currently selected weekday. Exactly one tag is always selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    selected: WeekdayTag,
}

impl SelectionState {
    pub fn new(initial: WeekdayTag) -> Self {
        Self { selected: initial }
    }

    pub fn selected(&self) -> WeekdayTag {
        self.selected
    }

    pub fn is_active(&self, tag: WeekdayTag) -> bool {
        self.selected == tag
    }

    /// Transition to `tag`. Returns `None` when `tag` is already selected,
    /// in which case nothing changes and no notification should be sent.
    pub fn select(&self, tag: WeekdayTag) -> Option<SelectionState> {
        if self.selected == tag {
            None
        } else {
            Some(SelectionState { selected: tag })
        }
    }
}

/// Horizontal extent of a rendered element, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementRect {
    pub left: f64,
    pub width: f64,
}

/// Position of the sliding highlight relative to its container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorGeometry {
    pub offset: f64,
    pub width: f64,
}

impl IndicatorGeometry {
    pub fn from_rects(button: ElementRect, container: ElementRect) -> Self {
        Self {
            offset: button.left - container.left,
            width: button.width,
        }
    }

    /// A zero-width indicator has never been measured and must not be drawn
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }

    /// Inline style for the highlight element
    pub fn style(&self) -> String {
        format!("left: {}px; width: {}px;", self.offset, self.width)
    }
}

/// Handle to a scheduled task that can be cancelled before it runs
pub trait Cancel {
    fn cancel(self);
}

/// Slot holding at most one pending deferred task.
///
/// Storing a new handle cancels the previous one first, so a superseded
/// task never runs. Dropping the slot cancels whatever is still pending.
pub struct PendingTask<H: Cancel> {
    handle: Option<H>,
}

impl<H: Cancel> PendingTask<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Cancel any pending task and keep `handle` as the new one
    pub fn replace(&mut self, handle: H) {
        self.cancel();
        self.handle = Some(handle);
    }

    /// Cancel the pending task, if any. Returns whether something was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H: Cancel> Default for PendingTask<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Cancel> Drop for PendingTask<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_day_index_mapping() {
        // Host convention: 0 is Sunday
        assert_eq!(WeekdayTag::from_day_index(0), Some(WeekdayTag::Sun));
        assert_eq!(WeekdayTag::from_day_index(1), Some(WeekdayTag::Mon));
        assert_eq!(WeekdayTag::from_day_index(3), Some(WeekdayTag::Wed));
        assert_eq!(WeekdayTag::from_day_index(6), Some(WeekdayTag::Sat));
        assert_eq!(WeekdayTag::from_day_index(7), None);
    }

    #[test]
    fn test_from_date() {
        // 2025-06-18 was a Wednesday
        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
        assert_eq!(WeekdayTag::from_date(&wednesday), WeekdayTag::Wed);

        let sunday = NaiveDate::from_ymd_opt(2025, 6, 22).unwrap();
        assert_eq!(WeekdayTag::from_date(&sunday), WeekdayTag::Sun);
    }

    #[test]
    fn test_table_order_matches_index() {
        for (position, option) in WEEKDAYS.iter().enumerate() {
            assert_eq!(option.value.index(), position);
            assert_eq!(WeekdayTag::ALL[position], option.value);
            assert_eq!(option.value.option(), option);
        }
        assert_eq!(WEEKDAYS[0].short_label, "周一");
        assert_eq!(WEEKDAYS[6].label, "周日");
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Fri".parse::<WeekdayTag>().unwrap(), WeekdayTag::Fri);
        assert_eq!(WeekdayTag::Thu.to_string(), "Thu");

        assert!("fri".parse::<WeekdayTag>().is_err());
        assert!("Friday".parse::<WeekdayTag>().is_err());
        assert_eq!(
            "".parse::<WeekdayTag>(),
            Err(ParseWeekdayError::UnknownTag(String::new()))
        );
    }

    #[test]
    fn test_serde_uses_bare_tag() {
        assert_eq!(serde_json::to_string(&WeekdayTag::Sat).unwrap(), "\"Sat\"");
        let tag: WeekdayTag = serde_json::from_str("\"Tue\"").unwrap();
        assert_eq!(tag, WeekdayTag::Tue);
    }

    #[test]
    fn test_select_other_day_transitions() {
        for from in WeekdayTag::ALL {
            for to in WeekdayTag::ALL.into_iter().filter(|tag| *tag != from) {
                let state = SelectionState::new(from);
                let next = state.select(to).expect("selecting another day must transition");
                assert_eq!(next.selected(), to);
                assert!(next.is_active(to));
                assert!(!next.is_active(from));
            }
        }
    }

    #[test]
    fn test_select_active_day_is_silent() {
        for tag in WeekdayTag::ALL {
            let state = SelectionState::new(tag);
            assert_eq!(state.select(tag), None);
            assert_eq!(state.selected(), tag);
        }
    }

    #[test]
    fn test_geometry_from_rects() {
        let container = ElementRect { left: 100.0, width: 420.0 };
        let button = ElementRect { left: 164.5, width: 58.0 };

        let geometry = IndicatorGeometry::from_rects(button, container);
        assert_eq!(geometry.offset, 64.5);
        assert_eq!(geometry.width, 58.0);
        assert!(geometry.is_visible());
        assert_eq!(geometry.style(), "left: 64.5px; width: 58px;");
    }

    #[test]
    fn test_unmeasured_geometry_is_hidden() {
        assert!(!IndicatorGeometry::default().is_visible());

        let collapsed = IndicatorGeometry::from_rects(
            ElementRect { left: 10.0, width: 0.0 },
            ElementRect { left: 0.0, width: 300.0 },
        );
        assert!(!collapsed.is_visible());
    }

    /// Same-thread task queue standing in for the browser's timer queue
    #[derive(Default)]
    struct FakeQueue {
        tasks: RefCell<Vec<(Rc<Cell<bool>>, Box<dyn FnOnce()>)>>,
    }

    struct FakeHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Cancel for FakeHandle {
        fn cancel(self) {
            self.cancelled.set(true);
        }
    }

    impl FakeQueue {
        fn schedule(&self, task: impl FnOnce() + 'static) -> FakeHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.tasks.borrow_mut().push((cancelled.clone(), Box::new(task)));
            FakeHandle { cancelled }
        }

        fn run_all(&self) {
            let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
            for (cancelled, task) in tasks {
                if !cancelled.get() {
                    task();
                }
            }
        }
    }

    #[test]
    fn test_superseded_measurement_never_lands() {
        let queue = FakeQueue::default();
        let writes = Rc::new(RefCell::new(Vec::new()));
        let mut slot: PendingTask<FakeHandle> = PendingTask::new();

        let tue = IndicatorGeometry { offset: 60.0, width: 56.0 };
        let fri = IndicatorGeometry { offset: 240.0, width: 56.0 };

        let sink = writes.clone();
        slot.replace(queue.schedule(move || sink.borrow_mut().push(tue)));
        let sink = writes.clone();
        slot.replace(queue.schedule(move || sink.borrow_mut().push(fri)));

        queue.run_all();
        assert_eq!(*writes.borrow(), vec![fri]);
    }

    #[test]
    fn test_cancel_empties_slot() {
        let queue = FakeQueue::default();
        let ran = Rc::new(Cell::new(false));
        let mut slot: PendingTask<FakeHandle> = PendingTask::new();

        assert!(!slot.cancel());

        let flag = ran.clone();
        slot.replace(queue.schedule(move || flag.set(true)));
        assert!(slot.is_pending());
        assert!(slot.cancel());
        assert!(!slot.is_pending());

        queue.run_all();
        assert!(!ran.get());
    }

    #[test]
    fn test_dropping_slot_cancels_pending_task() {
        let queue = FakeQueue::default();
        let ran = Rc::new(Cell::new(false));

        {
            let mut slot: PendingTask<FakeHandle> = PendingTask::new();
            let flag = ran.clone();
            slot.replace(queue.schedule(move || flag.set(true)));
        }

        queue.run_all();
        assert!(!ran.get());
    }
}
