//! Retry policy for Gemini requests.
//!
//! [`decide`] maps the outcome of one attempt to either a backoff delay or a
//! terminal error kind. It is pure so the whole policy can be tested without
//! a network or a clock.

use crate::agent::ErrorKind;
use std::time::Duration;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Classified result of a single failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// The server answered with a non-2xx status
    Status(u16),
    /// 2xx with a body we could not use
    Malformed,
    /// The request never got a response
    Transport,
}

impl Failure {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Failure::Status(503) => ErrorKind::ServiceUnavailable,
            Failure::Status(429) => ErrorKind::RateLimited,
            Failure::Status(401) | Failure::Status(403) => ErrorKind::Auth,
            Failure::Status(_) => ErrorKind::RequestFailed,
            Failure::Malformed => ErrorKind::MalformedResponse,
            Failure::Transport => ErrorKind::Network,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Sleep for the delay, then make the next attempt
    Retry(Duration),
    /// Stop and surface this error
    Fail(ErrorKind),
}

/// Decide what happens after `attempt` (1-indexed) failed.
pub fn decide(failure: Failure, attempt: u32, max_retries: u32, base_delay: Duration) -> Decision {
    let kind = failure.kind();
    if !kind.is_retryable() || attempt >= max_retries {
        return Decision::Fail(kind);
    }

    let multiplier = match kind {
        ErrorKind::RateLimited => attempt * 2,
        _ => attempt,
    };
    Decision::Retry(base_delay * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Duration = DEFAULT_BASE_DELAY;

    #[test]
    fn service_unavailable_backs_off_linearly() {
        assert_eq!(
            decide(Failure::Status(503), 1, 3, BASE),
            Decision::Retry(Duration::from_millis(1000))
        );
        assert_eq!(
            decide(Failure::Status(503), 2, 3, BASE),
            Decision::Retry(Duration::from_millis(2000))
        );
        assert_eq!(
            decide(Failure::Status(503), 3, 3, BASE),
            Decision::Fail(ErrorKind::ServiceUnavailable)
        );
    }

    #[test]
    fn rate_limit_waits_twice_as_long() {
        assert_eq!(
            decide(Failure::Status(429), 1, 3, BASE),
            Decision::Retry(Duration::from_millis(2000))
        );
        assert_eq!(
            decide(Failure::Status(429), 2, 3, BASE),
            Decision::Retry(Duration::from_millis(4000))
        );
        assert_eq!(
            decide(Failure::Status(429), 3, 3, BASE),
            Decision::Fail(ErrorKind::RateLimited)
        );
    }

    #[test]
    fn transport_errors_retry_like_generic_faults() {
        assert_eq!(
            decide(Failure::Transport, 2, 3, BASE),
            Decision::Retry(Duration::from_millis(2000))
        );
        assert_eq!(
            decide(Failure::Transport, 3, 3, BASE),
            Decision::Fail(ErrorKind::Network)
        );
    }

    #[test]
    fn fatal_statuses_never_retry() {
        for status in [401, 403] {
            assert_eq!(
                decide(Failure::Status(status), 1, 3, BASE),
                Decision::Fail(ErrorKind::Auth)
            );
        }
        assert_eq!(
            decide(Failure::Status(400), 1, 3, BASE),
            Decision::Fail(ErrorKind::RequestFailed)
        );
        assert_eq!(
            decide(Failure::Status(500), 1, 3, BASE),
            Decision::Fail(ErrorKind::RequestFailed)
        );
        assert_eq!(
            decide(Failure::Malformed, 1, 3, BASE),
            Decision::Fail(ErrorKind::MalformedResponse)
        );
    }

    #[test]
    fn single_attempt_budget_fails_immediately() {
        assert_eq!(
            decide(Failure::Status(503), 1, 1, BASE),
            Decision::Fail(ErrorKind::ServiceUnavailable)
        );
    }
}
