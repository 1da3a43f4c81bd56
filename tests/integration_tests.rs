use housing_stats::{
    CliConfig, DuplicatePolicy, HousingError, HousingPipeline, LocalStorage, OutputFormat,
    ReportEngine,
};
use tempfile::TempDir;

const HEADER: &str = "house_address,floor_count,population,heating_value,area_residential";

fn write_csv(dir: &TempDir, name: &str, rows: &str) {
    let contents = format!("{}\n{}", HEADER, rows);
    std::fs::write(dir.path().join(name), contents).unwrap();
}

fn config(input: &str, format: OutputFormat, duplicates: DuplicatePolicy) -> CliConfig {
    CliConfig {
        input: input.to_string(),
        format,
        duplicates,
        verbose: false,
    }
}

fn run(dir: &TempDir, config: CliConfig) -> housing_stats::Result<String> {
    let storage = LocalStorage::new(dir.path());
    let pipeline = HousingPipeline::new(storage, config);
    ReportEngine::new(pipeline).run()
}

#[test]
fn test_end_to_end_text_report() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(
        &temp_dir,
        "housing_data.csv",
        "A,3,10,110.5,50.0\nB,20,4,95.0,40.0\n",
    );

    let output = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap();

    assert_eq!(
        output,
        "Результат категоризации домов:\n\
         {'Малоэтажный': 1, 'Среднеэтажный': 0, 'Многоэтажный': 1}\n\
         Дом с наименьшей средней жилой площадью на одного жильца:\n\
         A\n"
    );
}

#[test]
fn test_end_to_end_json_report() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(
        &temp_dir,
        "houses.csv",
        "ул. Садовая 5,9,30,150.0,900.0\nул. Лесная 2,2,3,40.0,120.0\nпр. Победы 10,12,50,300.0,1000.0\n",
    );

    let output = run(
        &temp_dir,
        config("houses.csv", OutputFormat::Json, DuplicatePolicy::LastWins),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["categories"]["Малоэтажный"], 1);
    assert_eq!(value["categories"]["Среднеэтажный"], 2);
    assert_eq!(value["categories"]["Многоэтажный"], 0);
    assert_eq!(value["min_area_address"], "пр. Победы 10");
}

#[test]
fn test_tie_returns_first_row() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(
        &temp_dir,
        "housing_data.csv",
        "First,5,10,1.0,50.0\nSecond,6,4,1.0,20.0\nThird,7,1,1.0,30.0\n",
    );

    let output = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap();

    assert!(output.ends_with("\nFirst\n"));
}

#[test]
fn test_empty_file_reports_zero_counts_and_no_minimum() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(&temp_dir, "housing_data.csv", "");

    let output = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap();

    assert!(output.contains("{'Малоэтажный': 0, 'Среднеэтажный': 0, 'Многоэтажный': 0}"));
    assert!(output.ends_with("\nNone\n"));
}

#[test]
fn test_duplicate_policies() {
    let temp_dir = TempDir::new().unwrap();
    // A: 5.0 then 9.0, B: 6.0
    write_csv(
        &temp_dir,
        "housing_data.csv",
        "A,3,10,1.0,50.0\nB,3,10,1.0,60.0\nA,3,10,1.0,90.0\n",
    );

    let last = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap();
    assert!(last.ends_with("\nB\n"));
    // duplicates still count toward categories
    assert!(last.contains("'Малоэтажный': 3"));

    let first = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::FirstWins),
    )
    .unwrap();
    assert!(first.ends_with("\nA\n"));

    let err = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::Reject),
    )
    .unwrap_err();
    assert!(matches!(err, HousingError::DuplicateAddress { .. }));
}

#[test]
fn test_padded_address_is_a_distinct_house() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(
        &temp_dir,
        "housing_data.csv",
        "A,3,10,1.0,50.0\nB,3,10,1.0,60.0\nA ,3,10,1.0,90.0\n",
    );

    let output = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap();

    assert!(output.ends_with("\nA\n"));
}

#[test]
fn test_rounding_tie_keeps_first_row() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(
        &temp_dir,
        "housing_data.csv",
        "A,3,40,1.0,1003.0\nB,3,100,1.0,2507.0\n",
    );

    let output = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap();

    assert!(output.ends_with("\nA\n"));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap_err();

    match &err {
        HousingError::Io { path, .. } => assert!(path.ends_with("housing_data.csv")),
        other => panic!("expected io error, got {:?}", other),
    }
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_malformed_row_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(
        &temp_dir,
        "housing_data.csv",
        "A,3,10,1.0,50.0\nB,3,ten,1.0,40.0\n",
    );

    let err = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap_err();

    match err {
        HousingError::Parse { line, column, .. } => {
            assert_eq!(line, 3);
            assert_eq!(column, "population");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_zero_population_fails_whole_run() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(
        &temp_dir,
        "housing_data.csv",
        "A,3,10,1.0,50.0\nB,4,0,1.0,40.0\n",
    );

    let err = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap_err();

    assert!(matches!(err, HousingError::DivisionByZero { ref address } if address == "B"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_negative_floor_count_is_range_violation() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(&temp_dir, "housing_data.csv", "A,-3,10,1.0,50.0\n");

    let err = run(
        &temp_dir,
        config("housing_data.csv", OutputFormat::Text, DuplicatePolicy::LastWins),
    )
    .unwrap_err();

    assert!(err.is_range_violation());
}
