pub mod config;
pub mod document;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod logging;
pub mod period;
pub mod persistence;
pub mod section;
pub mod store;
pub mod weekday;

pub use config::{EditorConfig, clamp_grade};
pub use document::{ScheduleDocument, WeekSlots, trim_trailing_blanks};
pub use logging::init_logging;
pub use period::PeriodCount;
pub use persistence::{
    PersistenceError, PersistenceResult, export_to_csv, export_to_json, save_document_to_csv,
    save_document_to_json,
};
pub use section::{InvalidSectionId, SectionId, normalize_sections};
pub use store::{Cursor, Direction, EditorView, ExportError, ScheduleEntry, ScheduleStore};
pub use weekday::{UnknownWeekday, Weekday};
