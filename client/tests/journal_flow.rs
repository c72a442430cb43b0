//! End-to-end dashboard flows over HTTP against the fake journal API

mod common;

use chrono::NaiveDate;
use common::{app_for, FakeApi};
use moodecho::app::derive::CHART_WINDOW;
use moodecho::app::{
    Access, DashboardTab, Screen, MSG_EMPTY_JOURNAL, MSG_FETCH_FAILED, MSG_LOGIN_FAILED, MSG_REGISTER_FAILED,
    MSG_REGISTER_OK,
};
use moodecho::core::AppError;

async fn signed_in(api: &FakeApi) -> moodecho::app::App {
    let mut app = app_for(api).await;
    app.handle_login_click("alice".to_string(), "pw".to_string());
    app.settle().await;
    assert_eq!(app.visible_screen(), Screen::Dashboard);
    app
}

#[tokio::test]
async fn test_create_edit_delete_round_trip() {
    let api = FakeApi::default().with_user("alice", "pw");
    let mut app = signed_in(&api).await;
    assert!(app.state.read().entries.is_empty());

    app.handle_text_change("Ran 5k, felt great");
    app.handle_habit_toggle("🏃 Run");
    app.handle_submit().unwrap();
    app.settle().await;
    let id = {
        let state = app.state.read();
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.dashboard.view.average_mood, 9.0);
        assert_eq!(state.dashboard.view.streak_for("🏃 Run"), 1);
        assert_eq!(state.dashboard.active_tab, DashboardTab::History);
        state.entries.entries()[0].id
    };

    app.handle_start_edit(id).unwrap();
    app.handle_text_change("Ran 5k, felt tired after");
    app.handle_submit().unwrap();
    app.settle().await;
    {
        let state = app.state.read();
        assert_eq!(state.entries.len(), 1);
        assert_eq!(state.entries.entries()[0].id, id);
        assert_eq!(state.entries.entries()[0].journal_content, "Ran 5k, felt tired after");
        assert_eq!(state.dashboard.view.average_mood, 9.0);
    }

    app.handle_request_delete(id);
    app.handle_confirm_delete();
    app.settle().await;
    {
        let state = app.state.read();
        assert!(state.entries.is_empty());
        assert_eq!(state.dashboard.view.average_mood, 0.0);
    }

    assert_eq!(
        api.requests(),
        vec![
            "POST /auth/login".to_string(),
            "GET /entries".to_string(),
            "POST /entries".to_string(),
            "GET /entries".to_string(),
            format!("PUT /entries/{}", id),
            "GET /entries".to_string(),
            format!("DELETE /entries/{}", id),
        ]
    );
}

#[tokio::test]
async fn test_delete_removes_only_that_entry_without_refetch() {
    let api = FakeApi::default().with_user("alice", "pw");
    let first = api.seed_entry("alice", NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(), 4, &["📚 Read"]);
    let second = api.seed_entry("alice", NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(), 6, &["📚 Read"]);
    let third = api.seed_entry("alice", NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(), 8, &["📚 Read"]);
    let mut app = signed_in(&api).await;
    assert_eq!(app.state.read().dashboard.view.streak_for("📚 Read"), 3);

    app.handle_request_delete(second);
    app.handle_confirm_delete();
    app.settle().await;

    let state = app.state.read();
    let ids: Vec<i64> = state.entries.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![first, third]);
    assert_eq!(state.dashboard.view.average_mood, 6.0);
    assert_eq!(state.dashboard.view.streak_for("📚 Read"), 2);
    assert_eq!(api.requests().last().cloned(), Some(format!("DELETE /entries/{}", second)));
    assert_eq!(api.requests().iter().filter(|r| *r == "GET /entries").count(), 1);
}

#[tokio::test]
async fn test_blank_submit_never_reaches_network() {
    let api = FakeApi::default().with_user("alice", "pw");
    let mut app = signed_in(&api).await;
    let before = api.requests().len();

    app.handle_text_change("  \t ");
    let result = app.handle_submit();
    app.settle().await;

    assert_eq!(result, Err(AppError::Validation(MSG_EMPTY_JOURNAL.to_string())));
    assert_eq!(api.requests().len(), before);
    assert_eq!(api.entry_count(), 0);
}

#[tokio::test]
async fn test_entries_sorted_and_chart_windowed() {
    let api = FakeApi::default().with_user("alice", "pw");
    for day in (1..=10).rev() {
        api.seed_entry("alice", NaiveDate::from_ymd_opt(2026, 6, day).unwrap(), day as i32, &[]);
    }
    let app = signed_in(&api).await;

    let state = app.state.read();
    let dates: Vec<NaiveDate> = state.entries.entries().iter().map(|e| e.entry_date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);

    let chart = &state.dashboard.view.chart;
    assert_eq!(chart.len(), CHART_WINDOW);
    assert_eq!(chart.first().map(|p| p.label.as_str()), Some("06-04"));
    assert_eq!(chart.last().map(|p| p.score), Some(10));
    assert!(state.dashboard.view.chart_unlocked);
}

#[tokio::test]
async fn test_login_failure_message() {
    let api = FakeApi::default().with_user("alice", "pw");
    let mut app = app_for(&api).await;
    app.handle_login_click("alice".to_string(), "nope".to_string());
    app.settle().await;

    assert_eq!(app.state.read().auth.error(), Some(MSG_LOGIN_FAILED));
    assert!(!app.session().is_authenticated());
    assert_eq!(app.visible_screen(), Screen::Login);
}

#[tokio::test]
async fn test_register_then_conflict() {
    let api = FakeApi::default();
    let mut app = app_for(&api).await;

    app.handle_register_click("bob".to_string(), "pw".to_string());
    app.settle().await;
    assert_eq!(app.state.read().current_screen, Screen::Login);
    let rendered = moodecho::ui::render(&mut app, 80);
    assert!(rendered.contains(MSG_REGISTER_OK));

    app.handle_register_click("bob".to_string(), "other".to_string());
    app.settle().await;
    assert_eq!(app.state.read().auth.error(), Some(MSG_REGISTER_FAILED));
}

#[tokio::test]
async fn test_guard_redirects_without_token() {
    let api = FakeApi::default().with_user("alice", "pw");
    let mut app = app_for(&api).await;

    assert_eq!(app.navigate(Screen::Dashboard), Access::Redirect(Screen::Login));
    app.settle().await;
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn test_stale_token_surfaces_fetch_failure() {
    let api = FakeApi::default().with_user("alice", "pw");
    let mut app = app_for(&api).await;
    app.session().set("expired").unwrap();

    assert!(app.start().is_granted());
    app.settle().await;

    let state = app.state.read();
    assert_eq!(state.dashboard.alert.as_deref(), Some(MSG_FETCH_FAILED));
    assert!(state.entries.is_empty());
}

#[tokio::test]
async fn test_users_only_see_their_entries() {
    let api = FakeApi::default().with_user("alice", "pw");
    api.seed_entry("mallory", NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), 2, &[]);
    let app = signed_in(&api).await;
    assert!(app.state.read().entries.is_empty());
}
