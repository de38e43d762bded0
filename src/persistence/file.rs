use super::PersistenceResult;
use crate::{ScheduleDocument, ScheduleStore};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn save_document_to_json<P: AsRef<Path>>(
    document: &ScheduleDocument,
    path: P,
) -> PersistenceResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!("wrote timetable json to {}", path.display());
    Ok(())
}

/// Exports `store` and writes it as JSON. An empty section list is refused
/// before any file is created.
pub fn export_to_json<P: AsRef<Path>>(
    store: &ScheduleStore,
    path: P,
) -> PersistenceResult<ScheduleDocument> {
    let document = store.export_document()?;
    save_document_to_json(&document, path)?;
    Ok(document)
}

#[derive(Serialize)]
struct SlotCsvRecord<'a> {
    section: String,
    day: &'static str,
    period: usize,
    subject: &'a str,
}

/// Flat rendition: one row per exported slot, periods numbered from 1.
/// Interior blanks are written as empty subjects so rows line up with the
/// JSON arrays.
pub fn save_document_to_csv<P: AsRef<Path>>(
    document: &ScheduleDocument,
    path: P,
) -> PersistenceResult<()> {
    let path = path.as_ref();
    // Header is written by hand so it is present even when every day
    // trimmed to nothing.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create(path)?);
    writer.write_record(["section", "day", "period", "subject"])?;
    for (id, week) in document.iter() {
        for day in crate::Weekday::ALL {
            for (idx, subject) in week.day(day).iter().enumerate() {
                writer.serialize(SlotCsvRecord {
                    section: id.to_string(),
                    day: day.code(),
                    period: idx + 1,
                    subject,
                })?;
            }
        }
    }
    writer.flush()?;
    info!("wrote timetable csv to {}", path.display());
    Ok(())
}

pub fn export_to_csv<P: AsRef<Path>>(
    store: &ScheduleStore,
    path: P,
) -> PersistenceResult<ScheduleDocument> {
    let document = store.export_document()?;
    save_document_to_csv(&document, path)?;
    Ok(document)
}
