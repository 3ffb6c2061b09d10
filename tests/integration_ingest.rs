//! End-to-end integration tests for the ingest pipeline
//!
//! Builds a data directory with both category folders, runs the full
//! pipeline, and checks the bulk output against the published schema.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use athletics_normalizer::cli::commands::ingest::ingest_data;
use athletics_normalizer::config::Config;

fn write_sheet(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        input_path: temp_dir.path().join("data"),
        output_path: temp_dir.path().join("output"),
        index_name: "sport-results".to_string(),
        workers: 2,
        dry_run: false,
    }
}

fn setup_data_dir(temp_dir: &TempDir) {
    let men = temp_dir.path().join("data").join("men");
    let women = temp_dir.path().join("data").join("women");
    fs::create_dir_all(&men).unwrap();
    fs::create_dir_all(&women).unwrap();

    write_sheet(
        &men,
        "100m.csv",
        "Mark,Competitor,DOB,Nat,Pos,Venue,Date,WIND\n\
         9.58,Usain Bolt,21 AUG 1986,JAM,1,\"Olympiastadion, Berlin (GER)\",16 AUG 2009,+0.9\n\
         9.69,Tyson Gay,09 AUG 1982,USA,2sf1,Shanghai (CHN),20 SEP 2009,-0.3\n",
    );
    write_sheet(
        &women,
        "longjump.csv",
        "Mark,Competitor,DOB,Nat,Pos,Venue,Date\n\
         7.52,Galina Chistyakova,26 JUL 1962,URS,1,Leningrad (URS),11 JUN 1988\n",
    );
}

fn read_bulk_lines(config: &Config) -> Vec<serde_json::Value> {
    let content = fs::read_to_string(config.bulk_output_path()).unwrap();
    content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_ingest_writes_normalized_bulk_output() {
    let temp_dir = TempDir::new().unwrap();
    setup_data_dir(&temp_dir);
    let config = test_config(&temp_dir);

    let stats = ingest_data(&config, false).await.unwrap();
    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.documents_indexed, 3);
    assert_eq!(stats.rows_failed, 0);

    let lines = read_bulk_lines(&config);
    assert_eq!(lines.len(), 6);

    // Action lines carry the index name and monotonically increasing ids
    let mut ids = Vec::new();
    for action in lines.iter().step_by(2) {
        assert_eq!(action["index"]["_index"], "sport-results");
        ids.push(action["index"]["_id"].as_u64().unwrap());
    }
    assert_eq!(ids, vec![1, 2, 3]);

    // Every document carries the full published schema
    for document in lines.iter().skip(1).step_by(2) {
        assert!(document.get("world_rank").is_some());
        assert!(document.get("mark").is_some());
        assert!(document.get("pos").is_some());
        assert!(document.get("venue").is_some());
        assert!(document.get("wind").is_some());
    }

    // Spot-check one men's sprint document
    let bolt = lines
        .iter()
        .skip(1)
        .step_by(2)
        .find(|d| d["competitor"] == "Usain Bolt")
        .expect("document for row 1 of 100m.csv");
    assert_eq!(bolt["discipline"], "100m");
    assert_eq!(bolt["gender"], "Men");
    assert_eq!(bolt["world_rank"], 1);
    assert_eq!(bolt["mark"]["format_type"], "Seconds");
    assert_eq!(bolt["mark"]["numeric_value"], 9.58);
    assert_eq!(bolt["pos"]["numeric_pos"], 1);
    assert_eq!(bolt["venue"]["stadium"], "Olympiastadion");
    assert_eq!(bolt["venue"]["country"], "GER");
    assert_eq!(bolt["age_at_competition"], 22);
    assert_eq!(bolt["dob"], "1986-08-21");
    assert_eq!(bolt["date"], "2009-08-16");
    assert_eq!(bolt["wind"], 0.9);

    // And one women's field-event document without a wind column
    let chistyakova = lines
        .iter()
        .skip(1)
        .step_by(2)
        .find(|d| d["competitor"] == "Galina Chistyakova")
        .expect("document for longjump.csv");
    assert_eq!(chistyakova["gender"], "Women");
    assert_eq!(chistyakova["mark"]["format_type"], "Meters");
    assert_eq!(chistyakova["mark"]["unit"], "m");
    assert_eq!(chistyakova["wind"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_ingest_surfaces_row_failures_without_aborting_file() {
    let temp_dir = TempDir::new().unwrap();
    let men = temp_dir.path().join("data").join("men");
    fs::create_dir_all(&men).unwrap();
    fs::create_dir_all(temp_dir.path().join("data").join("women")).unwrap();

    write_sheet(
        &men,
        "800m.csv",
        "Mark,Competitor,DOB,Nat,Pos,Venue,Date\n\
         1:40.91,David Rudisha,17 DEC 1988,KEN,1,London (GBR),09 AUG 2012\n\
         bad-mark,Nobody,17 DEC 1988,KEN,2,London (GBR),09 AUG 2012\n\
         1:41.73,Nijel Amos,15 MAR 1994,BOT,2,London (GBR),09 AUG 2012\n",
    );

    let config = test_config(&temp_dir);
    let stats = ingest_data(&config, false).await.unwrap();

    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.documents_indexed, 2);
    assert_eq!(stats.rows_failed, 1);
    assert_eq!(stats.rows_total(), 3);

    // The failed row is reported in the per-file diagnostics
    let file_stats = &stats.file_stats[0];
    assert_eq!(file_stats.file, "800m.csv");
    assert_eq!(file_stats.rows_failed, 1);
    assert!(file_stats.errors.iter().any(|e| e.contains("row 2")));

    // Surviving rows keep their original ordinals
    let lines = read_bulk_lines(&config);
    let ranks: Vec<u64> = lines
        .iter()
        .skip(1)
        .step_by(2)
        .map(|d| d["world_rank"].as_u64().unwrap())
        .collect();
    assert_eq!(ranks, vec![1, 3]);
}

#[tokio::test]
async fn test_ingest_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    setup_data_dir(&temp_dir);
    let mut config = test_config(&temp_dir);
    config.dry_run = true;

    let stats = ingest_data(&config, false).await.unwrap();
    assert_eq!(stats.documents_indexed, 0);
    assert!(!config.bulk_output_path().exists());
}
