//! Platform health-data boundary.
//!
//! The platform store itself lives in the host app; this crate sees it as an
//! authorization-gated async source of per-day samples. Fetches either
//! resolve or fail once; a day with no samples reads as zero, not an error.

use async_trait::async_trait;
use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("health data is not available on this device")]
    NotAvailable,

    #[error("requested health data type is not available")]
    DataNotAvailable,

    #[error("health data authorization denied")]
    AuthorizationDenied,

    #[error("health data fetch failed: {0}")]
    FetchFailed(#[from] anyhow::Error),
}

/// One day's worth of platform health samples.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DailyHealthSnapshot {
    pub steps: u64,
    pub sleep_hours: f64,
    pub workout_minutes: u32,
}

#[async_trait]
pub trait HealthDataSource: Send + Sync {
    fn is_available(&self) -> bool;

    async fn request_authorization(&self) -> Result<(), HealthError>;

    async fn steps(&self, date: NaiveDate) -> Result<u64, HealthError>;

    async fn sleep_hours(&self, date: NaiveDate) -> Result<f64, HealthError>;

    async fn workout_minutes(&self, date: NaiveDate) -> Result<u32, HealthError>;
}

/// Fetch the full snapshot for one day. Each sample failure is logged and
/// defaults to zero; health problems never become user-facing errors.
pub async fn daily_snapshot(source: &dyn HealthDataSource, date: NaiveDate) -> DailyHealthSnapshot {
    let steps = match source.steps(date).await {
        Ok(steps) => steps,
        Err(e) => {
            tracing::warn!(%date, error = %e, "step fetch failed");
            0
        }
    };

    let sleep_hours = match source.sleep_hours(date).await {
        Ok(hours) => hours,
        Err(e) => {
            tracing::warn!(%date, error = %e, "sleep fetch failed");
            0.0
        }
    };

    let workout_minutes = match source.workout_minutes(date).await {
        Ok(minutes) => minutes,
        Err(e) => {
            tracing::warn!(%date, error = %e, "workout fetch failed");
            0
        }
    };

    DailyHealthSnapshot {
        steps,
        sleep_hours,
        workout_minutes,
    }
}

/// Fixed-value source for tests and host-app previews.
#[derive(Debug, Clone, Default)]
pub struct StaticHealthSource {
    pub authorized: bool,
    pub steps: u64,
    pub sleep_hours: f64,
    pub workout_minutes: u32,
}

#[async_trait]
impl HealthDataSource for StaticHealthSource {
    fn is_available(&self) -> bool {
        true
    }

    async fn request_authorization(&self) -> Result<(), HealthError> {
        if self.authorized {
            Ok(())
        } else {
            Err(HealthError::AuthorizationDenied)
        }
    }

    async fn steps(&self, _date: NaiveDate) -> Result<u64, HealthError> {
        self.check_authorized()?;
        Ok(self.steps)
    }

    async fn sleep_hours(&self, _date: NaiveDate) -> Result<f64, HealthError> {
        self.check_authorized()?;
        Ok(self.sleep_hours)
    }

    async fn workout_minutes(&self, _date: NaiveDate) -> Result<u32, HealthError> {
        self.check_authorized()?;
        Ok(self.workout_minutes)
    }
}

impl StaticHealthSource {
    fn check_authorized(&self) -> Result<(), HealthError> {
        if self.authorized {
            Ok(())
        } else {
            Err(HealthError::AuthorizationDenied)
        }
    }
}
