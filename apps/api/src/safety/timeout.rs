use std::future::Future;
use std::time::Duration;

use crate::errors::AppError;

/// Budget for a full portfolio generation call.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);
/// Budget for smaller refine / describe / suggest calls.
pub const REFINEMENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Races `fut` against `budget`. Nothing from a late call is kept.
pub async fn with_timeout<T, F>(budget: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match tokio::time::timeout(budget, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("Remote call exceeded {}s budget", budget.as_secs());
            Err(AppError::Timeout)
        }
    }
}
