use std::sync::Arc;

use anyhow::{Result, anyhow};
use colored::Colorize;
use marquee_application::{AccountStore, NavbarController, NavbarRender};
use marquee_core::account::FetchOutcome;
use marquee_core::config::AppConfig;
use marquee_core::navigation::MenuItemId;
use marquee_core::session::Session;
use marquee_infrastructure::{HistoryNavigator, HttpAccountSource, InMemorySessionProvider};
use tokio::sync::watch;

pub async fn run(
    config: &AppConfig,
    user_id: String,
    account: Option<String>,
    open: Option<String>,
    json: bool,
) -> Result<()> {
    let open = open
        .map(|id| MenuItemId::parse(&id).ok_or_else(|| anyhow!("Unknown menu item '{}'", id)))
        .transpose()?;

    let source = Arc::new(HttpAccountSource::from_config(&config.api));
    let store = Arc::new(AccountStore::new(source));
    let sessions = Arc::new(InMemorySessionProvider::signed_in(Session::new(user_id)));
    let controller = Arc::new(NavbarController::new(
        store.clone(),
        sessions,
        Arc::new(HistoryNavigator::new()),
    ));

    let (_scroll_tx, scroll_rx) = watch::channel(0.0);
    let mut handle = controller.mount(scroll_rx).await;

    match handle.settled().await {
        Some(FetchOutcome::Loaded(accounts)) => {
            tracing::debug!(count = accounts.len(), "Accounts loaded")
        }
        Some(FetchOutcome::Empty) => eprintln!("{}", "No profiles for this user".yellow()),
        Some(FetchOutcome::Failed(reason)) => {
            eprintln!("{} {}", "Could not load profiles:".red(), reason)
        }
        Some(FetchOutcome::Superseded) | None => {}
    }

    if let Some(account_id) = account {
        let selected = store
            .accounts()
            .await
            .into_iter()
            .find(|a| a.id == account_id)
            .ok_or_else(|| anyhow!("Profile '{}' not found", account_id))?;
        controller.select_account(selected).await;
    }

    if let Some(item) = open {
        match controller.select_menu_item(item).await {
            Ok(route) => eprintln!("{} {}", "Navigated to".green(), route.path()),
            Err(e) => eprintln!("{} {}: {}", "Cannot open".red(), item.title(), e),
        }
    }

    let render = controller.render().await;
    controller.unmount(handle).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&render)?);
    } else {
        print_render(&render);
    }
    Ok(())
}

fn print_render(render: &NavbarRender) {
    let Some(header) = render.header() else {
        println!("(loading)");
        return;
    };

    let profile = header.profile_name.as_deref().unwrap_or("-");
    println!("{} {}", "Profile:".bold(), profile);

    for item in &header.menu {
        match item.path() {
            Some(path) => println!("  {:<8} {}", item.title, path.cyan()),
            None => println!("  {:<8} {}", item.title, "(disabled)".dimmed()),
        }
    }
}
