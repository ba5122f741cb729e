use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::SearchError;

/// Shared flag for cancelling a search from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Optional bounds on a single search. The default is unbounded.
///
/// Checked once per node expansion, so a search overshoots a deadline by at
/// most the cost of one expansion.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    pub deadline: Option<Instant>,
    pub cancel: Option<CancelToken>,
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline relative to now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Fail if expanding one more node would break a limit.
    pub(crate) fn check(&self, expanded: usize) -> Result<(), SearchError> {
        if let Some(limit) = self.max_expansions {
            if expanded >= limit {
                return Err(SearchError::ExpansionLimit { limit });
            }
        }
        if let Some(token) = &self.cancel {
            if token.is_cancelled() {
                return Err(SearchError::Cancelled { expanded });
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(SearchError::DeadlineExceeded { expanded });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_never_fails() {
        assert!(SearchLimits::unbounded().check(usize::MAX - 1).is_ok());
    }

    #[test]
    fn test_expansion_limit() {
        let limits = SearchLimits::unbounded().with_max_expansions(3);
        assert!(limits.check(2).is_ok());
        assert_eq!(limits.check(3), Err(SearchError::ExpansionLimit { limit: 3 }));
    }

    #[test]
    fn test_cancel_token_shared_between_clones() {
        let token = CancelToken::new();
        let limits = SearchLimits::unbounded().with_cancel(token.clone());
        assert!(limits.check(0).is_ok());
        token.cancel();
        assert_eq!(limits.check(5), Err(SearchError::Cancelled { expanded: 5 }));
    }

    #[test]
    fn test_past_deadline() {
        let limits = SearchLimits::unbounded().with_deadline(Instant::now());
        assert_eq!(limits.check(0), Err(SearchError::DeadlineExceeded { expanded: 0 }));
    }
}
