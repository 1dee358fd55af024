// src/main.rs
use anyhow::Result;
use newsdesk_core::application::{
    notifications::{FanOutNotifier, NotificationQueue, NotifierSettings},
    ports::{
        notification::{EmailSender, PublishEventSink, SocialChannel},
        security::TokenManager,
        time::Clock,
    },
    services::{ApplicationServices, Repositories},
};
use newsdesk_core::config::{AppConfig, NotificationConfig};
use newsdesk_core::infrastructure::{
    database,
    notifications::{
        DisabledSocialChannel, HttpEmailGateway, LogEmailSender, TwitterClient, TwitterSettings,
    },
    repositories::{
        PostgresContentReadRepository, PostgresContentWriteRepository,
        PostgresPublisherRepository, PostgresStaffRepository, PostgresSubscriptionRepository,
        PostgresUserRepository,
    },
    security::token::BiscuitTokenManager,
    time::SystemClock,
};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WORKER_DRAIN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        publishers: Arc::new(PostgresPublisherRepository::new(pool.clone())),
        staff: Arc::new(PostgresStaffRepository::new(pool.clone())),
        content_write: Arc::new(PostgresContentWriteRepository::new(pool.clone())),
        content_read: Arc::new(PostgresContentReadRepository::new(pool.clone())),
        subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
    };

    let http_client = reqwest::Client::builder()
        .timeout(config.notifications().channel_timeout)
        .build()?;
    let notifier = Arc::new(FanOutNotifier::new(
        Arc::clone(&repos.subscriptions),
        email_channel(config.notifications(), &http_client),
        social_channel(config.notifications(), &http_client),
        NotifierSettings {
            from_email: config.notifications().from_email.clone(),
            site_name: config.notifications().site_name.clone(),
            hashtags: config.notifications().hashtags.clone(),
            media_root: config.notifications().media_root.clone(),
            channel_timeout: config.notifications().channel_timeout,
        },
    ));
    let (queue, worker) =
        NotificationQueue::spawn(notifier, config.notifications().queue_capacity);
    let events: Arc<dyn PublishEventSink> = Arc::new(queue);

    let token_manager: Arc<dyn TokenManager> =
        Arc::new(BiscuitTokenManager::new(config.biscuit_public_key())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        repos,
        token_manager,
        events,
        clock,
    ));

    let state = HttpState {
        services,
        db_pool: Some(pool),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router owned the last queue sender; the worker drains what is left.
    match tokio::time::timeout(WORKER_DRAIN_TIMEOUT, worker).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => tracing::error!(error = %err, "notification worker panicked"),
        Err(_) => tracing::warn!("notification backlog not drained before shutdown"),
    }

    Ok(())
}

fn email_channel(config: &NotificationConfig, client: &reqwest::Client) -> Arc<dyn EmailSender> {
    match &config.email_relay_url {
        Some(url) => Arc::new(HttpEmailGateway::new(
            client.clone(),
            url.clone(),
            config.email_relay_token.clone(),
        )),
        None => {
            tracing::info!("EMAIL_RELAY_URL not set, notification mail is only logged");
            Arc::new(LogEmailSender)
        }
    }
}

fn social_channel(config: &NotificationConfig, client: &reqwest::Client) -> Arc<dyn SocialChannel> {
    let Some(social) = &config.social else {
        return Arc::new(DisabledSocialChannel);
    };
    let settings = TwitterSettings {
        bearer_token: social.bearer_token.clone(),
        api_base: social.api_base.clone(),
        upload_base: social.upload_base.clone(),
    };
    match TwitterClient::new(client.clone(), settings) {
        Ok(twitter) => Arc::new(twitter),
        Err(err) => {
            tracing::warn!(error = %err, "social channel misconfigured, posting disabled");
            Arc::new(DisabledSocialChannel)
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
