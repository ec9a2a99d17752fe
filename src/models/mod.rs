pub mod area;
pub mod coverage;
pub mod loaders;
pub mod question;
pub mod report;

pub use area::{AreaMap, KeywordMap, Syllabus, SyllabusArea};
pub use coverage::{CoverageRow, ExtractionStats, KeywordRow};
pub use loaders::{load_all_text_files, load_text_document};
pub use question::{ExamDocument, QuestionRecord, QuestionRow, GENERAL_UNKNOWN, SYLLABUS_NOT_LOADED};
pub use report::{ExtractionReport, KeywordSourceKind};
