use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};

pub const TOKEN: &str = "test-token";
pub const OWNER: &str = "octo";
pub const REPO: &str = "widgets";

/// Canned GitHub data served by [`spawn_fake_github`].
#[derive(Default)]
pub struct Fixture {
    pub pulls: HashMap<u64, Vec<Value>>,
    pub commits: HashMap<String, Vec<Value>>,
}

impl Fixture {
    #[allow(dead_code)]
    pub fn with_pull(mut self, number: u64, files: Vec<Value>) -> Self {
        self.pulls.insert(number, files);
        self
    }

    #[allow(dead_code)]
    pub fn with_commit(mut self, sha: &str, files: Vec<Value>) -> Self {
        self.commits.insert(sha.to_string(), files);
        self
    }
}

struct FakeState {
    fixture: Fixture,
    requests: Mutex<Vec<String>>,
}

pub struct FakeGitHub {
    pub base_url: String,
    state: Arc<FakeState>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    _server: thread::JoinHandle<()>,
}

impl FakeGitHub {
    /// Paths (with query) of every request received, in arrival order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for FakeGitHub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub fn spawn_fake_github(fixture: Fixture) -> Result<FakeGitHub> {
    let state = Arc::new(FakeState {
        fixture,
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/repos/:owner/:repo/pulls/:number", get(get_pull))
        .route("/repos/:owner/:repo/pulls/:number/files", get(list_pull_files))
        .route("/repos/:owner/:repo/commits/:sha", get(get_commit))
        .with_state(state.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    let listener = runtime
        .block_on(tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))))
        .context("bind fake github")?;
    let addr = listener.local_addr().context("read fake github addr")?;

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let handle = thread::spawn(move || {
        runtime.block_on(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await;
        });
    });

    Ok(FakeGitHub {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(tx),
        _server: handle,
    })
}

#[derive(serde::Deserialize)]
struct PageQuery {
    #[serde(default = "default_per_page")]
    per_page: usize,
    #[serde(default = "default_page")]
    page: usize,
}

fn default_per_page() -> usize {
    30
}

fn default_page() -> usize {
    1
}

fn check(
    state: &FakeState,
    headers: &HeaderMap,
    owner: &str,
    repo: &str,
    request: String,
) -> Option<Response> {
    state.requests.lock().expect("requests lock").push(request);

    let expected = format!("Bearer {}", TOKEN);
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if auth != Some(expected.as_str()) {
        return Some(
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Bad credentials" })),
            )
                .into_response(),
        );
    }
    if owner != OWNER || repo != REPO {
        return Some(not_found());
    }
    None
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" }))).into_response()
}

async fn get_pull(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Path((owner, repo, number)): Path<(String, String, u64)>,
) -> Response {
    let request = format!("/repos/{}/{}/pulls/{}", owner, repo, number);
    if let Some(resp) = check(&state, &headers, &owner, &repo, request) {
        return resp;
    }
    match state.fixture.pulls.get(&number) {
        Some(files) => Json(json!({
            "number": number,
            "state": "open",
            "changed_files": files.len(),
        }))
        .into_response(),
        None => not_found(),
    }
}

async fn list_pull_files(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Path((owner, repo, number)): Path<(String, String, u64)>,
    Query(q): Query<PageQuery>,
) -> Response {
    let request = format!(
        "/repos/{}/{}/pulls/{}/files?per_page={}&page={}",
        owner, repo, number, q.per_page, q.page
    );
    if let Some(resp) = check(&state, &headers, &owner, &repo, request) {
        return resp;
    }
    let Some(files) = state.fixture.pulls.get(&number) else {
        return not_found();
    };
    let start = q.page.saturating_sub(1) * q.per_page;
    let page: Vec<Value> = files.iter().skip(start).take(q.per_page).cloned().collect();
    Json(page).into_response()
}

async fn get_commit(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Path((owner, repo, sha)): Path<(String, String, String)>,
) -> Response {
    let request = format!("/repos/{}/{}/commits/{}", owner, repo, sha);
    if let Some(resp) = check(&state, &headers, &owner, &repo, request) {
        return resp;
    }
    match state.fixture.commits.get(&sha) {
        Some(files) => Json(json!({
            "sha": sha,
            "commit": { "message": "change" },
            "files": files,
        }))
        .into_response(),
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "message": format!("No commit found for SHA: {}", sha) })),
        )
            .into_response(),
    }
}

#[allow(dead_code)]
pub fn file(status: &str, filename: &str) -> Value {
    json!({
        "sha": "0000000000000000000000000000000000000000",
        "filename": filename,
        "status": status,
        "additions": 1,
        "deletions": 0,
        "changes": 1,
    })
}

#[allow(dead_code)]
pub fn renamed(filename: &str, previous: &str) -> Value {
    json!({
        "filename": filename,
        "previous_filename": previous,
        "status": "renamed",
    })
}

#[allow(dead_code)]
pub fn many_files(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| file("modified", &format!("src/file_{:04}.rs", i)))
        .collect()
}
