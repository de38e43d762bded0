use crate::period::PeriodCount;
use crate::persistence::DEFAULT_EXPORT_FILE;
use std::path::PathBuf;

pub const ENV_HTTP_ADDR: &str = "TIMETABLE_HTTP_ADDR";
pub const ENV_LOG_LEVEL: &str = "TIMETABLE_LOG";
pub const ENV_EXPORT_PATH: &str = "TIMETABLE_EXPORT_PATH";
pub const ENV_GRADE: &str = "TIMETABLE_GRADE";
pub const ENV_PERIODS: &str = "TIMETABLE_PERIODS";

/// Grades the grade selector offers.
pub const GRADES: [u32; 3] = [1, 2, 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub http_addr: String,
    pub log_level: String,
    pub export_path: PathBuf,
    pub default_grade: u32,
    pub default_periods: PeriodCount,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            http_addr: "127.0.0.1:3000".to_string(),
            log_level: "info".to_string(),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            default_grade: GRADES[0],
            default_periods: PeriodCount::DEFAULT,
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves each setting through `lookup`, keeping the default for
    /// missing or blank values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();
        if let Some(addr) = read(ENV_HTTP_ADDR) {
            config.http_addr = addr;
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(path) = read(ENV_EXPORT_PATH) {
            config.export_path = PathBuf::from(path);
        }
        if let Some(grade) = read(ENV_GRADE) {
            config.default_grade = clamp_grade(grade.parse().unwrap_or(GRADES[0] as i64));
        }
        if let Some(periods) = read(ENV_PERIODS) {
            config.default_periods = PeriodCount::parse(&periods);
        }
        config
    }
}

pub fn clamp_grade(grade: i64) -> u32 {
    grade.clamp(GRADES[0] as i64, GRADES[GRADES.len() - 1] as i64) as u32
}
