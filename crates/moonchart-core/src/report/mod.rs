pub mod calendar;
pub mod chart;
pub mod moon;

pub use calendar::{calendar_report, CalendarDay, CalendarQuery, CalendarReport};
pub use chart::{chart_report, Chart, ChartReport, ChartRequest};
pub use moon::{moon_report, MoonReport, ZoneHints};
