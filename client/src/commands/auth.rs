use moodecho::app::{App, Screen};
use moodecho::ui;

pub async fn login(app: &mut App, username: String, password: String, columns: u16) -> anyhow::Result<()> {
    app.handle_login_click(username, password);
    app.settle().await;

    if app.visible_screen() != Screen::Dashboard {
        print!("{}", ui::render(app, columns));
        let message = app.state.read().auth.error().unwrap_or("Login failed").to_string();
        anyhow::bail!(message);
    }

    super::fail_on_alert(app)?;
    print!("{}", ui::render(app, columns));
    Ok(())
}

pub async fn register(app: &mut App, username: String, password: String, columns: u16) -> anyhow::Result<()> {
    app.handle_register_click(username, password);
    app.settle().await;

    print!("{}", ui::render(app, columns));
    match app.state.read().auth.error() {
        Some(error) => anyhow::bail!(error.to_string()),
        None => Ok(()),
    }
}

pub fn logout(app: &mut App) -> anyhow::Result<()> {
    app.handle_logout();
    println!("Logged out.");
    Ok(())
}
