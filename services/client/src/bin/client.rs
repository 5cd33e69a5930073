//! services/client/src/bin/client.rs
//!
//! Runs a scripted walkthrough of every screen against the simulated adapters
//! and prints what each screen shows as JSON.

use bytes::Bytes;
use chrono::{Duration, Utc};
use client_lib::{
    adapters::{RecordingNavigator, TracingNotifier},
    config::Config,
    error::{ClientError, ClientResult},
    screens::{
        enter, AppContext, ChatScreen, ProjectsScreen, RegisterScreen, RegistrationForm,
        UploadScreen,
    },
};
use project_manager_core::domain::{ProjectDraft, SelectedFile};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_json<T: Serialize>(label: &str, value: &T) -> ClientResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "== {}\n{}", label, json)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting walkthrough...");

    // --- 2. Build the Application Context ---
    let navigator = Arc::new(RecordingNavigator::new());
    let ctx = Arc::new(AppContext::simulated(
        config,
        Arc::new(TracingNotifier),
        navigator.clone(),
    ));
    info!("Landing on {}", enter(&ctx).path());

    // --- 3. Register ---
    let register = RegisterScreen::mount(ctx.clone());
    let user = register
        .submit(&RegistrationForm {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            password: "demo-password".to_string(),
            confirm_password: "demo-password".to_string(),
        })
        .await?;
    print_json("user", &user)?;

    // --- 4. Projects ---
    let mut projects = ProjectsScreen::mount(ctx.clone()).await?;
    let today = Utc::now().date_naive();
    projects
        .create_project(ProjectDraft {
            name: "Website".to_string(),
            requested_date: today,
            due_date: today + Duration::days(3),
        })
        .await?;
    print_json("projects", &projects.rows())?;
    projects.dispose();

    // --- 5. Chat ---
    let mut chat = ChatScreen::mount(ctx.clone()).await?;
    chat.send_message("How do I attach a file to my project?").await?;
    chat.settle().await;
    print_json("chat", &chat.snapshot().await)?;
    chat.dispose();

    // --- 6. Upload ---
    let mut upload = UploadScreen::mount(ctx.clone()).await?;
    upload.select_file(SelectedFile::new(
        "brief.txt",
        "text/plain",
        Bytes::from_static(b"Landing page, contact form, blog."),
    ))?;
    if let Some(project_id) = upload.projects().first().map(|p| p.id) {
        upload.select_project(project_id);
    }
    upload.submit().await?;
    print_json("uploads", &upload.view())?;
    upload.dispose();

    // --- 7. Logout ---
    ctx.logout().await?;
    print_json("navigation", &navigator.history())?;
    info!("Walkthrough finished.");

    Ok(())
}
