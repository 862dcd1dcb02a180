//! Per-operation deadline for store round trips

use std::future::Future;
use std::time::Duration;

use filmwise_core::{DomainError, RepoResult};
use tracing::warn;

use crate::repositories::map_db_error;

/// Upper bound on how long one repository operation may spend in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDeadline(Duration);

impl QueryDeadline {
    pub const DEFAULT: Duration = Duration::from_secs(3);

    /// A zero timeout would fail every statement, so it falls back to [`Self::DEFAULT`]
    pub fn new(timeout: Duration) -> Self {
        if timeout.is_zero() {
            Self(Self::DEFAULT)
        } else {
            Self(timeout)
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn timeout(&self) -> Duration {
        self.0
    }

    /// Await `fut`, failing with [`DomainError::QueryTimeout`] once the deadline passes
    pub async fn run<T, F>(&self, fut: F) -> RepoResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        self.run_with(fut, map_db_error).await
    }

    /// Like [`Self::run`], with a custom mapping for store errors
    pub async fn run_with<T, F, M>(&self, fut: F, on_error: M) -> RepoResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
        M: FnOnce(sqlx::Error) -> DomainError,
    {
        match tokio::time::timeout(self.0, fut).await {
            Ok(result) => result.map_err(on_error),
            Err(_) => {
                let timeout_ms = self.timeout_ms();
                warn!(timeout_ms, "Query deadline exceeded");
                Err(DomainError::QueryTimeout(timeout_ms))
            }
        }
    }
}

impl Default for QueryDeadline {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_within_deadline() {
        let deadline = QueryDeadline::new(Duration::from_millis(200));
        let value = deadline.run(async { Ok::<_, sqlx::Error>(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_times_out() {
        let deadline = QueryDeadline::new(Duration::from_millis(10));
        let result = deadline
            .run(async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok::<_, sqlx::Error>(())
            })
            .await;
        assert!(matches!(result, Err(DomainError::QueryTimeout(10))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Query exceeded its 10ms deadline"
        );
    }

    #[tokio::test]
    async fn test_store_errors_are_mapped() {
        let deadline = QueryDeadline::default();
        let result = deadline
            .run(async { Err::<(), _>(sqlx::Error::RowNotFound) })
            .await;
        assert!(matches!(result, Err(DomainError::DatabaseError(_))));

        let result = deadline
            .run_with(async { Err::<(), _>(sqlx::Error::RowNotFound) }, |_| {
                DomainError::MovieTitleExists
            })
            .await;
        assert!(matches!(result, Err(DomainError::MovieTitleExists)));
    }

    #[test]
    fn test_default_is_three_seconds() {
        assert_eq!(QueryDeadline::default().timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        assert_eq!(QueryDeadline::new(Duration::ZERO), QueryDeadline::default());
        assert_eq!(
            QueryDeadline::new(Duration::from_millis(250)).timeout(),
            Duration::from_millis(250)
        );
    }
}
