use moodecho::app::derive::{format_average, resolve_habit};
use moodecho::app::{App, MSG_CONFIRM_DELETE};
use moodecho::ui;
use moodecho::ui::widgets::cards;
use std::io::{self, BufRead, Write};

fn resolve_habits(names: &[String]) -> anyhow::Result<Vec<&'static str>> {
    names
        .iter()
        .map(|name| resolve_habit(name).ok_or_else(|| anyhow::anyhow!("Unknown habit: {}", name)))
        .collect()
}

pub async fn write(app: &mut App, text: String, habits: Vec<String>, columns: u16) -> anyhow::Result<()> {
    let habits = resolve_habits(&habits)?;
    super::enter_dashboard(app, columns).await?;

    app.handle_text_change(text);
    let selected = app.state.read().dashboard.draft.habits.clone();
    for habit in habit_toggles(&selected, &habits) {
        app.handle_habit_toggle(&habit);
    }
    submit(app, columns).await
}

pub async fn edit(app: &mut App, id: i64, text: String, habits: Vec<String>, columns: u16) -> anyhow::Result<()> {
    let habits = resolve_habits(&habits)?;
    super::enter_dashboard(app, columns).await?;

    app.handle_start_edit(id)?;
    app.handle_text_change(text);
    if !habits.is_empty() {
        let selected = app.state.read().dashboard.draft.habits.clone();
        for habit in habit_toggles(&selected, &habits) {
            app.handle_habit_toggle(&habit);
        }
    }
    submit(app, columns).await
}

/// Toggles that turn the `selected` habits into exactly `wanted`, in
/// `wanted` order. Everything selected is toggled off first.
fn habit_toggles(selected: &[String], wanted: &[&str]) -> Vec<String> {
    let mut toggles: Vec<String> = selected.to_vec();
    for habit in wanted {
        if !toggles[selected.len()..].iter().any(|h| h == habit) {
            toggles.push(habit.to_string());
        }
    }
    toggles
}

async fn submit(app: &mut App, columns: u16) -> anyhow::Result<()> {
    app.handle_submit()?;
    app.settle().await;
    super::fail_on_alert(app)?;
    print!("{}", ui::render(app, columns));
    Ok(())
}

pub async fn delete(app: &mut App, id: i64, yes: bool, columns: u16) -> anyhow::Result<()> {
    super::enter_dashboard(app, columns).await?;
    if !app.state.read().entries.contains(id) {
        anyhow::bail!("No entry with id {}", id);
    }

    app.handle_request_delete(id);
    if !yes && !confirm(MSG_CONFIRM_DELETE, &mut io::stdin().lock(), &mut io::stdout())? {
        app.handle_dismiss_delete();
        println!("Operation cancelled.");
        return Ok(());
    }

    app.handle_confirm_delete();
    app.settle().await;
    super::fail_on_alert(app)?;
    println!("Deleted entry #{}.", id);
    Ok(())
}

pub async fn streaks(app: &mut App, columns: u16) -> anyhow::Result<()> {
    super::enter_dashboard(app, columns).await?;
    let state = app.state.read();
    let view = &state.dashboard.view;
    println!("Avg Mood: {}", format_average(view.average_mood));
    println!("{}", cards::streak_line(&view.streaks));
    Ok(())
}

fn confirm(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{} (yes/no): ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "yes" || answer == "y")
}
