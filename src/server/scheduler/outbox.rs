use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{email::Mailer, outbox::OutboxService, storage::ObjectStorage},
};

/// Every 15 seconds.
const DISPATCH_SCHEDULE: &str = "*/15 * * * * *";

/// Starts the outbox dispatcher.
///
/// Each tick claims a batch of due jobs and sends their emails. A job claimed by one
/// tick is never picked up by an overlapping tick.
///
/// # Arguments
/// - `db`: Database connection
/// - `storage`: Object storage for reading ticket response attachments
/// - `mailer`: Email backend
/// - `app_url`: Application URL for links in emails
pub async fn start_scheduler(
    db: DatabaseConnection,
    storage: Arc<dyn ObjectStorage>,
    mailer: Arc<dyn Mailer>,
    app_url: String,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(DISPATCH_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let storage = storage.clone();
        let mailer = mailer.clone();
        let app_url = app_url.clone();

        Box::pin(async move {
            if let Err(e) = dispatch(&db, storage, mailer, &app_url).await {
                tracing::error!("Error dispatching outbox jobs: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Outbox scheduler started");

    Ok(())
}

async fn dispatch(
    db: &DatabaseConnection,
    storage: Arc<dyn ObjectStorage>,
    mailer: Arc<dyn Mailer>,
    app_url: &str,
) -> Result<(), AppError> {
    let summary = OutboxService::new(db, storage.as_ref(), mailer.as_ref(), app_url)
        .dispatch_pending(Utc::now())
        .await?;

    if summary.sent + summary.retried + summary.failed > 0 {
        tracing::info!(
            "Outbox tick: {} sent, {} retried, {} failed",
            summary.sent,
            summary.retried,
            summary.failed
        );
    }

    Ok(())
}
