//! Console host: signs in, loads every store and prints one page.
//!
//! Usage: `innovalex-dashboard [route] [alert-filter]`, e.g.
//! `innovalex-dashboard alerts pending`. The route defaults to the
//! dashboard overview.

use std::sync::Arc;

use innovalex_dashboard::app::{Dashboard, ViewState};
use innovalex_dashboard::auth::Authenticator;
use innovalex_dashboard::config::DashboardConfig;
use innovalex_dashboard::layout::Route;
use innovalex_dashboard::pages::alerts::AlertFilter;
use innovalex_dashboard::render;
use innovalex_dashboard::session::SessionContext;
use innovalex_db::{AuthClient, RestClient};
use innovalex_events::{EventBus, ToastLogger};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "innovalex_dashboard=info,innovalex_events=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let mut args = std::env::args().skip(1);
    let route = match args.next().map(|r| r.parse::<Route>()).transpose() {
        Ok(route) => route.unwrap_or(Route::Dashboard),
        Err(e) => {
            tracing::error!(error = %e, "Unknown route");
            std::process::exit(2);
        }
    };
    let alert_filter = args
        .next()
        .and_then(|f| AlertFilter::ALL.into_iter().find(|t| t.label().eq_ignore_ascii_case(&f)))
        .unwrap_or_default();

    let http = match config.backend.http_client() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            std::process::exit(1);
        }
    };
    let rest = Arc::new(RestClient::with_client(http.clone(), &config.backend));
    let session = SessionContext::new();
    let authenticator = Authenticator::new(
        AuthClient::with_client(http, &config.backend),
        Arc::clone(&rest),
        session.clone(),
    );

    let bus = Arc::new(EventBus::default());
    let logger = tokio::spawn(ToastLogger::run(bus.subscribe()));

    if let Some((email, password)) = config.credentials() {
        match authenticator.sign_in(email, password).await {
            Ok(user) => tracing::info!(user_id = %user.id, "Signed in"),
            Err(e) => tracing::warn!(error = %e, "Sign-in failed; continuing signed out"),
        }
    } else {
        tracing::info!("No credentials configured; running signed out");
    }

    let dashboard = Dashboard::new(rest, session, Arc::clone(&bus));
    let report = dashboard.sync_identity().await;
    tracing::debug!(?report, "Initial load finished");

    let view = ViewState {
        alert_filter,
        ..ViewState::default()
    };
    let layout = dashboard.layout(route);
    let page = dashboard.page(route, view);
    println!("{}", render::render(&layout, &page));

    if let Err(e) = authenticator.sign_out().await {
        tracing::warn!(error = %e, "Sign-out failed");
    }

    drop(dashboard);
    drop(bus);
    let _ = logger.await;
}
