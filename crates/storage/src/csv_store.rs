use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracker_core::model::Lesson;

use crate::repository::{LESSON_HEADER, LessonRepository, LessonRow, RowError, StorageError};

/// Lesson log stored as a UTF-8 CSV file with a `id,date,teacher,color,note` header.
///
/// Every save rewrites the whole file in place. There is no temp-file
/// rename and no locking, so a single writer process is assumed.
#[derive(Debug, Clone)]
pub struct CsvLessonStore {
    path: PathBuf,
}

impl CsvLessonStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Lesson>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no lessons file yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(file);
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        check_header(&headers)?;

        let mut lessons = Vec::new();
        let mut record = StringRecord::new();
        while reader.read_record(&mut record).map_err(row_error)? {
            let line = record.position().map_or(0, csv::Position::line);
            let row: LessonRow = record.deserialize(Some(&headers)).map_err(row_error)?;
            let lesson = row.into_lesson().map_err(|source| StorageError::Parse {
                line,
                source: source.into(),
            })?;
            lessons.push(lesson);
        }
        lessons.sort_by_key(Lesson::id);

        tracing::debug!(
            path = %self.path.display(),
            count = lessons.len(),
            "loaded lessons"
        );
        Ok(lessons)
    }

    fn write_all(&self, lessons: &[Lesson]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        // Header is written by hand so an empty log still gets one.
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(LESSON_HEADER)?;
        for lesson in lessons {
            writer.serialize(LessonRow::from_lesson(lesson))?;
        }
        writer.flush()?;

        tracing::debug!(
            path = %self.path.display(),
            count = lessons.len(),
            "saved lessons"
        );
        Ok(())
    }
}

fn check_header(headers: &StringRecord) -> Result<(), StorageError> {
    if headers.iter().eq(LESSON_HEADER) {
        return Ok(());
    }
    Err(StorageError::Header {
        found: headers.iter().collect::<Vec<_>>().join(","),
    })
}

/// Attach the offending line to record-level csv errors.
fn row_error(err: csv::Error) -> StorageError {
    match err.kind() {
        csv::ErrorKind::UnequalLengths { .. } | csv::ErrorKind::Deserialize { .. } => {
            let line = err.position().map_or(0, csv::Position::line);
            StorageError::Parse {
                line,
                source: RowError::Shape(err),
            }
        }
        _ => StorageError::Csv(err),
    }
}

#[async_trait]
impl LessonRepository for CsvLessonStore {
    async fn load_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        self.read_all()
    }

    async fn save_lessons(&self, lessons: &[Lesson]) -> Result<(), StorageError> {
        self.write_all(lessons)
    }
}
