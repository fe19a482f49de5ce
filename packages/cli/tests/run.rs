use std::fs;
use std::path::Path;

use clap::Parser;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use avusync_cli::{run_with_password, Args, Error};

const API: &str = "/irods-http-api/0.3.0";

fn write_environment(dir: &Path, api_url: &str) -> String {
    let env_path = dir.join("irods_environment.json");
    fs::write(
        &env_path,
        serde_json::to_string(&json!({
            "irods_host": "localhost",
            "irods_port": 1247,
            "irods_zone_name": "zone",
            "irods_user_name": "alice",
            "irods_http_api_url": api_url,
        }))
        .unwrap(),
    )
    .unwrap();
    env_path.to_str().unwrap().to_string()
}

fn args(local_root: &str, env_path: &str, extra: &[&str]) -> Args {
    let mut argv = vec![
        "avusync",
        "--local-root",
        local_root,
        "--remote-root",
        "/zone/data",
        "--irods-env",
        env_path,
    ];
    argv.extend_from_slice(extra);
    Args::try_parse_from(argv).unwrap()
}

async fn mount_login_and_stats(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("{}/authenticate", API)))
        .respond_with(ResponseTemplate::new(200).set_body_string("tok"))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/data-objects", API)))
        .and(query_param("op", "stat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "irods_response": {"status_code": -358000}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/collections", API)))
        .and(query_param("op", "stat"))
        .and(query_param("lpath", "/zone/data/exp1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "irods_response": {"status_code": 0},
            "type": "collection"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_run_adds_statepoint_to_collection() {
    let server = MockServer::start().await;
    mount_login_and_stats(&server).await;

    for operations in [
        "%5B%7B%22operation%22%3A%22add%22%2C%22attribute%22%3A%22a%22%2C%22value%22%3A%221%22%7D%5D",
        "%5B%7B%22operation%22%3A%22add%22%2C%22attribute%22%3A%22b%22%2C%22value%22%3A%22x%22%7D%5D",
    ] {
        Mock::given(method("POST"))
            .and(path(format!("{}/collections", API)))
            .and(body_string_contains("op=modify_metadata"))
            .and(body_string_contains("lpath=%2Fzone%2Fdata%2Fexp1"))
            .and(body_string_contains(format!("operations={}", operations)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "irods_response": {"status_code": 0}
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let dir = tempfile::tempdir().unwrap();
    let local_root = dir.path().join("data");
    fs::create_dir_all(local_root.join("exp1")).unwrap();
    fs::write(
        local_root.join("exp1/signac_statepoint.json"),
        r#"{"a": 1, "b": "x"}"#,
    )
    .unwrap();
    let env_path = write_environment(dir.path(), &format!("{}{}", server.uri(), API));
    let args = args(local_root.to_str().unwrap(), &env_path, &[]);

    let report = tokio::task::spawn_blocking(move || run_with_password(&args, "secret").unwrap())
        .await
        .unwrap();

    assert_eq!(report.files_seen(), 1);
    assert_eq!(report.objects_updated(), 1);
    assert_eq!(report.attributes_added(), 2);
}

#[tokio::test]
async fn test_dry_run_writes_nothing() {
    let server = MockServer::start().await;
    mount_login_and_stats(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("{}/collections", API)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let local_root = dir.path().join("data");
    fs::create_dir_all(local_root.join("exp1")).unwrap();
    fs::write(local_root.join("exp1/signac_statepoint.json"), r#"{"a": 1}"#).unwrap();
    let env_path = write_environment(dir.path(), &format!("{}{}", server.uri(), API));
    let args = args(local_root.to_str().unwrap(), &env_path, &["--dry-run"]);

    let report = tokio::task::spawn_blocking(move || run_with_password(&args, "secret").unwrap())
        .await
        .unwrap();

    assert_eq!(report.objects_updated(), 1);
}

#[tokio::test]
async fn test_rejected_login_is_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/authenticate", API)))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let env_path = write_environment(dir.path(), &format!("{}{}", server.uri(), API));
    let args = args(dir.path().to_str().unwrap(), &env_path, &[]);

    let result = tokio::task::spawn_blocking(move || run_with_password(&args, "wrong"))
        .await
        .unwrap();

    assert!(matches!(
        result,
        Err(Error::Session(avusync_http::Error::Authentication { status: 401, .. }))
    ));
}

#[test]
fn missing_environment_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let env_path = dir.path().join("nope.json");
    let args = args(
        dir.path().to_str().unwrap(),
        env_path.to_str().unwrap(),
        &[],
    );

    assert!(matches!(
        run_with_password(&args, "secret"),
        Err(Error::Session(avusync_http::Error::EnvironmentRead { .. }))
    ));
}
