//! Subcommand implementations. Each drives the [`App`] the same way an
//! interactive front end would: handler call, then wait for the results.

pub mod auth;
pub mod entries;

use moodecho::app::{App, Screen};
use moodecho::ui;

/// Enter the dashboard through the session guard and wait for the entry
/// list. Prints the login screen and fails when there is no session.
pub(crate) async fn enter_dashboard(app: &mut App, columns: u16) -> anyhow::Result<()> {
    let access = app.start();
    if !access.is_granted() {
        print!("{}", ui::render(app, columns));
        anyhow::bail!("Not logged in. Run `moodecho login` first.");
    }
    app.settle().await;
    fail_on_alert(app)
}

/// Turn a dashboard alert into an error
pub(crate) fn fail_on_alert(app: &App) -> anyhow::Result<()> {
    match app.state.read().dashboard.alert.clone() {
        Some(alert) => anyhow::bail!(alert),
        None => Ok(()),
    }
}

pub async fn dashboard(app: &mut App, columns: u16) -> anyhow::Result<()> {
    enter_dashboard(app, columns).await?;
    debug_assert_eq!(app.visible_screen(), Screen::Dashboard);
    print!("{}", ui::render(app, columns));
    Ok(())
}
