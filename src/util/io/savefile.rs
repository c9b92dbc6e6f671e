use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

pub fn time_format(date: &DateTime<Local>) -> String {
    date.format("%Y%m%d_%H%M").to_string()
}

/// Output: `<database>_<name>.sql`, the name defaults to the formatted time
pub fn format_filename(time: &DateTime<Local>, database: &str, name_opt: Option<&str>) -> String {
    let name = match name_opt {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => time_format(time)
    };

    format!("{}_{}.sql", database, name)
}

pub fn dump_path(backup_path: &Path, time: &DateTime<Local>, database: &str, name_opt: Option<&str>) -> PathBuf {
    backup_path.join(format_filename(time, database, name_opt))
}
