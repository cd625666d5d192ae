//! Headless subcommands against an in-process fake backend

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use docdesk::backend::BackendClient;
use docdesk::cli::Command;
use docdesk::commands::{execute, DELETE_ALL_PROMPT};
use docdesk::config::Config;
use docdesk::DocdeskError;

#[derive(Default)]
struct Backend {
    files: Vec<String>,
    deleted: Vec<String>,
    deleted_all: usize,
}

type Shared = Arc<Mutex<Backend>>;

async fn list(State(backend): State<Shared>) -> Json<Value> {
    Json(json!({"files": backend.lock().unwrap().files}))
}

async fn delete_one(State(backend): State<Shared>, Path(filename): Path<String>) -> StatusCode {
    backend.lock().unwrap().deleted.push(filename);
    StatusCode::OK
}

async fn delete_all(State(backend): State<Shared>) -> StatusCode {
    let mut backend = backend.lock().unwrap();
    backend.deleted_all += 1;
    backend.files.clear();
    StatusCode::OK
}

async fn search() -> Json<Value> {
    Json(json!({
        "results": [
            {"content": "Revenue grew", "filename": "q3.pdf", "page_number": 4.0, "chunk_index": null}
        ]
    }))
}

async fn start(files: &[&str]) -> (BackendClient, Shared) {
    let backend = Shared::new(Mutex::new(Backend {
        files: files.iter().map(|f| f.to_string()).collect(),
        ..Default::default()
    }));
    let app = Router::new()
        .route("/list-files", get(list))
        .route("/delete/{filename}", delete(delete_one))
        .route("/delete-all", delete(delete_all))
        .route("/search", post(search))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (BackendClient::new(&url, &url), backend)
}

/// Run `command` and return what it printed plus the prompts it showed.
async fn run(client: &BackendClient, command: Command, answer: bool) -> (String, Vec<String>) {
    let mut out = Vec::new();
    let mut prompts = Vec::new();
    execute(&command, client, &Config::default(), &mut out, |prompt| {
        prompts.push(prompt.to_string());
        Ok(answer)
    })
    .await
    .unwrap();
    (String::from_utf8(out).unwrap(), prompts)
}

#[tokio::test]
async fn test_delete_all_on_empty_list_sends_nothing() {
    let (client, backend) = start(&[]).await;

    let (out, prompts) = run(&client, Command::DeleteAll { yes: false }, true).await;

    assert_eq!(out.trim(), "No files to delete");
    assert!(prompts.is_empty());
    assert_eq!(backend.lock().unwrap().deleted_all, 0);
}

#[tokio::test]
async fn test_delete_all_asks_with_fixed_prompt() {
    let (client, backend) = start(&["a.pdf", "b.pdf"]).await;

    let (out, prompts) = run(&client, Command::DeleteAll { yes: false }, true).await;

    assert_eq!(prompts, vec![DELETE_ALL_PROMPT.to_string()]);
    assert_eq!(
        DELETE_ALL_PROMPT,
        "Are you sure you want to delete ALL files? This action cannot be undone."
    );
    assert_eq!(out.trim(), "Deleted all files");
    assert_eq!(backend.lock().unwrap().deleted_all, 1);
}

#[tokio::test]
async fn test_delete_all_declined() {
    let (client, backend) = start(&["a.pdf"]).await;

    let (out, _) = run(&client, Command::DeleteAll { yes: false }, false).await;

    assert_eq!(out.trim(), "Cancelled");
    assert_eq!(backend.lock().unwrap().deleted_all, 0);
}

#[tokio::test]
async fn test_delete_yes_skips_prompt() {
    let (client, backend) = start(&["a.pdf"]).await;

    let command = Command::Delete { filename: "a.pdf".into(), yes: true };
    let (out, prompts) = run(&client, command, false).await;

    assert!(prompts.is_empty());
    assert_eq!(out.trim(), "Deleted a.pdf");
    assert_eq!(backend.lock().unwrap().deleted, vec!["a.pdf".to_string()]);
}

#[tokio::test]
async fn test_list_and_search_output() {
    let (client, _) = start(&["a.pdf (12 KB)"]).await;

    let (out, _) = run(&client, Command::List, true).await;
    assert_eq!(out.trim(), "a.pdf (12 KB)");

    let command = Command::Search { query: vec!["revenue".into()] };
    let (out, _) = run(&client, command, true).await;
    assert_eq!(out, "1. Revenue grew\n   File: q3.pdf  Page: 4  Chunk: 0\n");
}

#[tokio::test]
async fn test_prompt_failure_propagates() {
    let (client, backend) = start(&["a.pdf"]).await;

    let mut out = Vec::new();
    let command = Command::DeleteAll { yes: false };
    let err = execute(&command, &client, &Config::default(), &mut out, |_| {
        Err(DocdeskError::Prompt(dialoguer::Error::IO(std::io::Error::other("not a terminal"))))
    })
    .await
    .unwrap_err();

    assert!(matches!(err, DocdeskError::Prompt(_)));
    assert_eq!(backend.lock().unwrap().deleted_all, 0);
}
