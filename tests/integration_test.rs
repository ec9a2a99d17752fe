use exam_mapper::models::{GENERAL_UNKNOWN, SYLLABUS_NOT_LOADED};
use exam_mapper::services::assign_area;
use exam_mapper::{
    aggregate, build_syllabus, classify, extract_syllabus, parse_exam, static_keywords, App, Config, ExtractionLimits,
    KeywordMap, KeywordSourceKind,
};
use std::fs;
use std::path::Path;

const SYLLABUS: &str = "A) Revenue Recognition\nCovers IFRS 15 rules for customer contracts.\nB) Leases\nCovers IFRS 16 lease accounting for lessees.\n";

const MAY_PAPER: &str = "MAY 2023 FINANCIAL REPORTING\nQUESTION ONE\nExplain how a lessee accounts for a lease under IFRS 16. (Total: 20 marks)\nSOLUTION\nRight of use asset.\nQUESTION TWO\nExplain when revenue from customer contracts is recognised. (Total: 10 marks)\nQUESTION THREE\nDiscuss the weather.\n";

/// 输出文件都放在临时目录下
fn config_in(dir: &Path) -> Config {
    let path = |name: &str| dir.join(name).to_string_lossy().into_owned();
    Config {
        exam_folder: path("exam_text"),
        output_report_file: path("report.json"),
        output_warn_file: path("warn.txt"),
        output_log_file: path("output.txt"),
        ..Config::default()
    }
}

#[test]
fn test_syllabus_example_yields_two_areas() {
    let areas = extract_syllabus("A) Revenue Recognition\nCovers IFRS 15 rules.\nB) Leases\nCovers IFRS 16.");
    let names: Vec<&str> = areas.names().collect();
    assert_eq!(names, vec!["Revenue Recognition", "Leases"]);
}

#[test]
fn test_exam_example_yields_one_record() {
    let records = parse_exam(
        "QUESTION ONE\nExplain provisions. (Total: 20 marks)\nSOLUTION\nA provision is...",
        "provisions.txt",
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].marks, Some(20));
    assert!(!records[0].question_text.is_empty());
    assert!(!records[0].solution_text.is_empty());
}

#[test]
fn test_classify_example() {
    let keyword_map: KeywordMap = [("Leases".to_string(), vec!["lease".to_string(), "ifrs 16".to_string()])]
        .into_iter()
        .collect();
    assert_eq!(classify("Discuss lease accounting", &keyword_map), "Leases");
    assert_eq!(classify("Discuss the weather", &keyword_map), GENERAL_UNKNOWN);
}

#[test]
fn test_full_pipeline_with_dynamic_keywords() {
    let syllabus = build_syllabus(SYLLABUS, ExtractionLimits::default());
    let keyword_map = syllabus.keyword_map();
    assert_eq!(keyword_map.len(), 2);

    let records: Vec<_> = parse_exam(MAY_PAPER, "may.txt")
        .into_iter()
        .map(|record| assign_area(record, Some(&keyword_map)))
        .collect();

    let areas: Vec<&str> = records.iter().map(|r| r.area_or_unknown()).collect();
    assert_eq!(areas, vec!["Leases", "Revenue Recognition", GENERAL_UNKNOWN]);
    assert!(records.iter().all(|r| r.exam_label == "MAY FINANCIAL REPORTING"));

    let rows = aggregate(&records);
    let summary: Vec<(&str, u64, f64)> = rows
        .iter()
        .map(|r| (r.area.as_str(), r.total_marks, r.percentage_of_total))
        .collect();
    assert_eq!(
        summary,
        vec![
            (GENERAL_UNKNOWN, 0, 0.0),
            ("Leases", 20, 66.67),
            ("Revenue Recognition", 10, 33.33),
        ]
    );

    let sum: f64 = rows.iter().map(|r| r.percentage_of_total).sum();
    assert!((sum - 100.0).abs() <= 0.1);
}

#[test]
fn test_pipeline_is_idempotent() {
    let first = parse_exam(MAY_PAPER, "may.txt");
    let second = parse_exam(MAY_PAPER, "may.txt");
    assert_eq!(first, second);

    let keyword_map = static_keywords();
    let classified_first: Vec<String> = first.iter().map(|r| classify(&r.question_text, &keyword_map)).collect();
    let classified_second: Vec<String> = second.iter().map(|r| classify(&r.question_text, &keyword_map)).collect();
    assert_eq!(classified_first, classified_second);
    assert_eq!(aggregate(&first), aggregate(&second));
}

#[test]
fn test_without_syllabus_every_record_is_marked() {
    let records: Vec<_> = parse_exam(MAY_PAPER, "may.txt")
        .into_iter()
        .map(|record| assign_area(record, None))
        .collect();
    let rows = aggregate(&records);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].area, SYLLABUS_NOT_LOADED);
    assert_eq!(rows[0].question_count, 3);
    assert_eq!(rows[0].percentage_of_total, 100.0);
}

#[tokio::test]
async fn test_app_run_writes_report_and_warnings() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    let exam_folder = dir.join("exam_text");
    fs::create_dir_all(&exam_folder).unwrap();
    fs::write(dir.join("syllabus.txt"), SYLLABUS).unwrap();
    fs::write(exam_folder.join("may.txt"), MAY_PAPER).unwrap();
    fs::write(exam_folder.join("cover.txt"), "Cover page only").unwrap();

    let config = Config {
        syllabus_path: Some(dir.join("syllabus.txt").to_string_lossy().into_owned()),
        max_concurrent_documents: 1,
        ..config_in(dir)
    };

    let app = App::initialize(config).await.expect("初始化失败");
    assert_eq!(app.keyword_source(), KeywordSourceKind::Dynamic);

    let report = app.run().await.expect("运行失败");
    assert_eq!(report.stats.total_documents, 2);
    assert_eq!(report.stats.total_questions, 3);
    assert_eq!(report.stats.questions_with_marks, 2);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.keywords.len(), 2);
    assert_eq!(report.questions[0].question_number, "Q1");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("report.json")).unwrap()).unwrap();
    assert_eq!(json["keyword_source"], "dynamic");
    assert_eq!(json["questions"][0]["Syllabus Area"], "Leases");

    let warn = fs::read_to_string(dir.join("warn.txt")).unwrap();
    assert!(warn.contains("cover.txt"));
}

#[tokio::test]
async fn test_app_falls_back_to_static_keywords() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    fs::create_dir_all(dir.join("exam_text")).unwrap();
    fs::write(dir.join("syllabus.txt"), "no headings in this file").unwrap();

    let config = Config {
        syllabus_path: Some(dir.join("syllabus.txt").to_string_lossy().into_owned()),
        use_static_keywords: true,
        ..config_in(dir)
    };

    let app = App::initialize(config).await.expect("初始化失败");
    assert_eq!(app.keyword_source(), KeywordSourceKind::Static);

    let report = app.run().await.expect("运行失败");
    assert_eq!(report.stats.total_documents, 0);
    assert!(report.questions.is_empty());
    assert_eq!(report.keywords.len(), 5);
    // 大纲无法识别的警告
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn test_missing_exam_folder_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    // exam_text 目录没有创建
    let config = config_in(tmp.path());

    let result = tokio_test::block_on(async {
        let app = App::initialize(config).await?;
        app.run().await
    });
    assert!(result.is_err());
}
