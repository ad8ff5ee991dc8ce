use anyhow::Result;
use httpmock::prelude::*;
use remotive_extract::config::toml_config::{LoadConfig, SourceConfig};
use remotive_extract::{EtlEngine, EtlError, LocalStorage, RemotivePipeline, TomlConfig};
use std::path::Path;
use tempfile::TempDir;

fn config_for(endpoint: String, output_path: &Path, create_dirs: bool) -> TomlConfig {
    TomlConfig {
        source: SourceConfig {
            endpoint,
            search: "data".to_string(),
        },
        load: LoadConfig {
            output_path: output_path.to_str().unwrap().to_string(),
            create_dirs,
        },
    }
}

fn engine_for(config: TomlConfig) -> EtlEngine<RemotivePipeline<LocalStorage, TomlConfig>> {
    let storage = LocalStorage::new(config.load.create_dirs);
    EtlEngine::new(RemotivePipeline::new(storage, config))
}

#[tokio::test]
async fn test_end_to_end_writes_expected_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("remotive_jobs.csv");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/remote-jobs")
            .query_param("search", "data");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "0-legal-notice": "Remotive API Legal Notice",
                "job-count": 2,
                "jobs": [
                    {"id": 1, "title": "Data Engineer"},
                    {"id": 2, "title": "Analyst", "remote": true}
                ]
            }));
    });

    let engine = engine_for(config_for(server.url("/api/remote-jobs"), &output, false));
    let summary = engine.run().await?;

    api_mock.assert();
    assert_eq!(summary.records, 2);
    assert_eq!(summary.columns, 3);
    assert_eq!(
        std::fs::read_to_string(&output)?,
        "id,title,remote\n1,Data Engineer,\n2,Analyst,True\n"
    );
    Ok(())
}

#[tokio::test]
async fn test_shared_keys_give_one_row_per_job() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("remotive_jobs.csv");

    let jobs: Vec<serde_json::Value> = (1..=5)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "title": format!("Data Role {}", i),
                "company_name": "Acme",
                "publication_date": "2024-01-15T10:00:00"
            })
        })
        .collect();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/remote-jobs");
        then.status(200).json_body(serde_json::json!({ "jobs": jobs }));
    });

    engine_for(config_for(server.url("/api/remote-jobs"), &output, false))
        .run()
        .await?;

    let mut reader = csv::Reader::from_path(&output)?;
    assert_eq!(reader.headers()?.len(), 4);
    assert_eq!(reader.records().count(), 5);
    Ok(())
}

#[tokio::test]
async fn test_empty_jobs_writes_header_only_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("remotive_jobs.csv");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/remote-jobs");
        then.status(200).json_body(serde_json::json!({"job-count": 0, "jobs": []}));
    });

    let summary = engine_for(config_for(server.url("/api/remote-jobs"), &output, false))
        .run()
        .await?;

    assert_eq!(summary.records, 0);
    assert!(output.exists());
    let mut reader = csv::Reader::from_path(&output)?;
    assert_eq!(reader.records().count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_missing_jobs_key_leaves_previous_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("remotive_jobs.csv");
    std::fs::write(&output, "id,title\n1,Previous Run\n")?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/remote-jobs");
        then.status(200).json_body(serde_json::json!({"job-count": 0}));
    });

    let err = engine_for(config_for(server.url("/api/remote-jobs"), &output, false))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, EtlError::MissingFieldError { .. }));
    assert_eq!(std::fs::read_to_string(&output)?, "id,title\n1,Previous Run\n");
    Ok(())
}

#[tokio::test]
async fn test_http_error_writes_no_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("remotive_jobs.csv");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/remote-jobs");
        then.status(429).body("Too Many Requests");
    });

    let err = engine_for(config_for(server.url("/api/remote-jobs"), &output, false))
        .run()
        .await
        .unwrap_err();

    api_mock.assert_hits(1);
    assert!(matches!(err, EtlError::HttpStatusError { status: 429, .. }));
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_output_directory_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("data/processed/remotive_jobs.csv");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/remote-jobs");
        then.status(200).json_body(serde_json::json!({"jobs": [{"id": 1}]}));
    });

    let err = engine_for(config_for(server.url("/api/remote-jobs"), &output, false))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, EtlError::WriteError { .. }));
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn test_create_dirs_option_creates_output_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("data/processed/remotive_jobs.csv");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/remote-jobs");
        then.status(200).json_body(serde_json::json!({"jobs": [{"id": 1}]}));
    });

    engine_for(config_for(server.url("/api/remote-jobs"), &output, true))
        .run()
        .await?;

    assert_eq!(std::fs::read_to_string(&output)?, "id\n1\n");
    Ok(())
}

#[tokio::test]
async fn test_dry_run_does_not_write() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("remotive_jobs.csv");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/remote-jobs");
        then.status(200).json_body(serde_json::json!({"jobs": [{"id": 1, "title": "Analyst"}]}));
    });

    let summary = engine_for(config_for(server.url("/api/remote-jobs"), &output, false))
        .dry_run()
        .await?;

    assert_eq!(summary.records, 1);
    assert_eq!(summary.columns, 2);
    assert!(summary.output_path.is_none());
    assert!(!output.exists());
    Ok(())
}
