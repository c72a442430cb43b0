//! In-process fake of the journal API for integration tests

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{post, put};
use axum::{Json, Router};
use chrono::{Days, NaiveDate};
use moodecho::app::{App, Session};
use moodecho::services::api::ApiClient;
use parking_lot::Mutex;
use shared::{EntryRequest, HabitLog, JournalEntry, LoginRequest, RegisterRequest, TokenResponse};
use std::collections::HashMap;
use std::sync::Arc;

/// Mood the fake "AI" assigns when no score is queued
pub const DEFAULT_MOOD: i32 = 9;

#[derive(Default)]
pub struct Journal {
    users: HashMap<String, String>,
    tokens: HashMap<String, String>,
    /// Owner and entry, in insertion order
    entries: Vec<(String, JournalEntry)>,
    next_id: i64,
    queued_moods: Vec<i32>,
    requests: Vec<String>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<Journal>>,
}

impl FakeApi {
    pub fn with_user(self, username: &str, password: &str) -> Self {
        self.inner.lock().users.insert(username.to_string(), password.to_string());
        self
    }

    /// Mood scores handed out to the next created entries, in order
    pub fn queue_moods(&self, moods: &[i32]) {
        self.inner.lock().queued_moods.extend_from_slice(moods);
    }

    /// Insert an entry directly, bypassing the HTTP surface
    pub fn seed_entry(&self, owner: &str, date: NaiveDate, mood: i32, habits: &[&str]) -> i64 {
        let mut journal = self.inner.lock();
        journal.next_id += 1;
        let id = journal.next_id;
        let entry = JournalEntry {
            id,
            entry_date: date,
            journal_content: format!("seeded {}", id),
            mood_score: mood,
            ai_summary: String::new(),
            habit_logs: habit_logs(id, habits.iter().map(|h| h.to_string())),
        };
        journal.entries.push((owner.to_string(), entry));
        id
    }

    /// Every request seen, as `"METHOD /path"`
    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().requests.clone()
    }

    pub fn entry_count(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Serve on an ephemeral port and return the API base URL
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/register", post(register))
            .route("/api/entries", post(create_entry).get(list_entries))
            .route("/api/entries/:id", put(update_entry).delete(delete_entry))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    fn record(&self, request: String) {
        self.inner.lock().requests.push(request);
    }

    fn owner(&self, headers: &HeaderMap) -> Option<String> {
        let token = headers
            .get("authorization")?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")?;
        self.inner.lock().tokens.get(token).cloned()
    }
}

/// App wired to the fake over real HTTP
pub async fn app_for(api: &FakeApi) -> App {
    let base_url = api.spawn().await;
    let session = Session::in_memory();
    let client = ApiClient::new(base_url, session.clone());
    App::new(Arc::new(client), session)
}

fn habit_logs(id: i64, names: impl Iterator<Item = String>) -> Vec<HabitLog> {
    names
        .enumerate()
        .map(|(i, habit_name)| HabitLog {
            id: format!("{}", id * 10 + i as i64),
            habit_name,
            completed: true,
        })
        .collect()
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn entry_date(id: i64) -> NaiveDate {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    start.checked_add_days(Days::new(id as u64)).unwrap()
}

async fn login(State(api): State<FakeApi>, Json(req): Json<LoginRequest>) -> Response {
    api.record("POST /auth/login".to_string());
    let mut journal = api.inner.lock();
    if journal.users.get(&req.username) != Some(&req.password) {
        return error(StatusCode::BAD_REQUEST, "Invalid credentials");
    }
    let token = format!("token-{}-{}", req.username, journal.tokens.len());
    journal.tokens.insert(token.clone(), req.username);
    Json(TokenResponse { token }).into_response()
}

async fn register(State(api): State<FakeApi>, Json(req): Json<RegisterRequest>) -> Response {
    api.record("POST /auth/register".to_string());
    let mut journal = api.inner.lock();
    if journal.users.contains_key(&req.username) {
        return error(StatusCode::BAD_REQUEST, "Username already exists");
    }
    journal.users.insert(req.username, req.password);
    StatusCode::OK.into_response()
}

async fn list_entries(State(api): State<FakeApi>, headers: HeaderMap) -> Response {
    api.record("GET /entries".to_string());
    let Some(owner) = api.owner(&headers) else {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    // Newest first, so the client has to sort
    let entries: Vec<JournalEntry> = api
        .inner
        .lock()
        .entries
        .iter()
        .rev()
        .filter(|(o, _)| *o == owner)
        .map(|(_, e)| e.clone())
        .collect();
    Json(entries).into_response()
}

async fn create_entry(State(api): State<FakeApi>, headers: HeaderMap, Json(req): Json<EntryRequest>) -> Response {
    api.record("POST /entries".to_string());
    let Some(owner) = api.owner(&headers) else {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let mut journal = api.inner.lock();
    journal.next_id += 1;
    let id = journal.next_id;
    let mood = if journal.queued_moods.is_empty() {
        DEFAULT_MOOD
    } else {
        journal.queued_moods.remove(0)
    };
    let entry = JournalEntry {
        id,
        entry_date: entry_date(id),
        journal_content: req.journal,
        mood_score: mood,
        ai_summary: "Sounds like a good day.".to_string(),
        habit_logs: habit_logs(id, req.habits.into_iter()),
    };
    journal.entries.push((owner, entry.clone()));
    Json(entry).into_response()
}

async fn update_entry(
    State(api): State<FakeApi>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<EntryRequest>,
) -> Response {
    api.record(format!("PUT /entries/{}", id));
    let Some(owner) = api.owner(&headers) else {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let mut journal = api.inner.lock();
    let Some((_, entry)) = journal.entries.iter_mut().find(|(o, e)| *o == owner && e.id == id) else {
        return error(StatusCode::NOT_FOUND, "Entry not found");
    };
    entry.journal_content = req.journal;
    entry.habit_logs = habit_logs(id, req.habits.into_iter());
    Json(entry.clone()).into_response()
}

async fn delete_entry(State(api): State<FakeApi>, Path(id): Path<i64>, headers: HeaderMap) -> Response {
    api.record(format!("DELETE /entries/{}", id));
    let Some(owner) = api.owner(&headers) else {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    };
    let mut journal = api.inner.lock();
    let before = journal.entries.len();
    journal.entries.retain(|(o, e)| !(*o == owner && e.id == id));
    if journal.entries.len() == before {
        return error(StatusCode::NOT_FOUND, "Entry not found");
    }
    StatusCode::OK.into_response()
}
