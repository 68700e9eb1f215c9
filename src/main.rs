mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use std::time::Duration;

        use crate::server::{
            config::Config,
            scheduler::outbox,
            startup,
            state::{AppSettings, AppState},
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client();
        let oauth_client = startup::setup_oauth_client(&config)?;
        let storage = startup::setup_storage(&config);
        let mailer = startup::setup_mailer(&config)?;

        if config.admin_emails.is_empty() {
            tracing::warn!("ADMIN_EMAILS is empty, nobody will be granted admin on login");
        }

        tracing::info!("Starting server");

        // Start outbox dispatcher
        let scheduler_db = db.clone();
        let scheduler_storage = storage.clone();
        let scheduler_mailer = mailer.clone();
        let scheduler_app_url = config.app_url.clone();
        tokio::spawn(async move {
            if let Err(e) = outbox::start_scheduler(
                scheduler_db,
                scheduler_storage,
                scheduler_mailer,
                scheduler_app_url,
            )
            .await
            {
                tracing::error!("Outbox scheduler error: {}", e);
            }
        });

        let settings = AppSettings {
            app_url: config.app_url.clone(),
            userinfo_url: config.google_userinfo_url.clone(),
            admin_emails: config.admin_emails.clone(),
            signed_url_ttl: Duration::from_secs(config.storage.signed_url_ttl_seconds),
            max_team_size: config.max_team_size,
        };

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(
                db,
                http_client,
                oauth_client,
                storage,
                mailer,
                settings,
            ))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
