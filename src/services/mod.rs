pub mod area_classifier;
pub mod coverage_service;
pub mod keyword_service;
pub mod question_parser;
pub mod report_writer;
pub mod syllabus_extractor;

pub use area_classifier::{assign_area, best_match, classify, AreaMatch};
pub use coverage_service::{aggregate, extraction_stats, keyword_rows};
pub use keyword_service::{
    build_syllabus, generate_keywords, static_keywords, DynamicKeywords, KeywordSource, StaticKeywords,
};
pub use question_parser::{parse_exam, QuestionParser};
pub use report_writer::{build_report, ReportWriter};
pub use syllabus_extractor::{extract_syllabus, SyllabusExtractor};
