use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::otp::OtpService};

/// Every ten minutes, on the minute.
const PURGE_SCHEDULE: &str = "0 */10 * * * *";

/// Starts the scheduler that deletes expired OTP codes.
///
/// Expired codes are already rejected at verification; the purge only keeps the
/// table small.
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; keep it alive for the server's lifetime
/// - `Err(AppError::SchedulerErr)` - Failed to create, schedule or start the job
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(PURGE_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            match OtpService::new(&db).purge_expired().await {
                Ok(0) => {}
                Ok(purged) => tracing::info!("Purged {} expired OTP codes", purged),
                Err(e) => tracing::error!("Error purging expired OTP codes: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("OTP purge scheduler started");

    Ok(scheduler)
}
