use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::battery::{BatteryAudit, BatteryService},
};

/// Starts the battery check scheduler.
///
/// Runs one battery tick every `interval`. A failed tick is logged and the next
/// one simply works from whatever is stored at that time.
///
/// # Arguments
/// - `db`: Database connection
/// - `audit`: Sink receiving one record per drained drone
/// - `interval`: Time between ticks
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler, to be shut down on exit
/// - `Err(AppError)`: Scheduler could not be created or started
pub async fn start_scheduler(
    db: DatabaseConnection,
    audit: Arc<dyn BatteryAudit>,
    interval: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let db = db.clone();
        let audit = audit.clone();

        Box::pin(async move {
            if let Err(e) = BatteryService::new(&db, audit.as_ref()).run_tick().await {
                tracing::error!("Error running battery check: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Battery check scheduler started, running every {} minutes",
        interval.as_secs() / 60
    );

    Ok(scheduler)
}
