use std::{future::Future, pin::Pin, sync::Mutex, time::Duration};

use rand::Rng;

use crate::{
    domain::{Profile, ServiceError},
    infrastructure::config::ServiceConfig,
};

pub const SAVE_REJECTED: &str = "Server Error: Could not save changes.";
pub const FETCH_UNREACHABLE: &str = "profile server unreachable";

pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'a>>;

/// Asynchronous access to the remote profile.
/// Each call is single-shot; retrying is up to the caller.
pub trait RemoteProfileService: Send + Sync {
    fn fetch_profile(&self) -> ServiceFuture<'_, Profile>;
    fn save_profile(&self, candidate: Profile) -> ServiceFuture<'_, Profile>;
}

/// In-process stand-in for a profile server.
/// Adds latency to every call and fails a configurable share of them.
#[derive(Debug)]
pub struct SimulatedProfileService {
    profile: Mutex<Profile>,
    fetch_latency: Duration,
    save_latency: Duration,
    fetch_failure_rate: f64,
    save_failure_rate: f64,
}

impl SimulatedProfileService {
    pub fn new(seed: Profile) -> Self {
        Self {
            profile: Mutex::new(seed),
            fetch_latency: Duration::ZERO,
            save_latency: Duration::ZERO,
            fetch_failure_rate: 0.0,
            save_failure_rate: 0.0,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.seed.clone())
            .latencies(
                Duration::from_millis(config.fetch_latency_ms),
                Duration::from_millis(config.save_latency_ms),
            )
            .fetch_failure_rate(config.fetch_failure_rate)
            .save_failure_rate(config.save_failure_rate)
    }

    pub fn latencies(mut self, fetch: Duration, save: Duration) -> Self {
        self.fetch_latency = fetch;
        self.save_latency = save;
        self
    }

    /// Share of fetches that fail, clamped to `[0, 1]`
    pub fn fetch_failure_rate(mut self, rate: f64) -> Self {
        self.fetch_failure_rate = clamp_rate(rate);
        self
    }

    /// Share of saves that fail, clamped to `[0, 1]`
    pub fn save_failure_rate(mut self, rate: f64) -> Self {
        self.save_failure_rate = clamp_rate(rate);
        self
    }

    fn current(&self) -> Profile {
        match self.profile.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn remember(&self, profile: Profile) {
        match self.profile.lock() {
            Ok(mut guard) => *guard = profile,
            Err(poisoned) => *poisoned.into_inner() = profile,
        }
    }
}

impl RemoteProfileService for SimulatedProfileService {
    fn fetch_profile(&self) -> ServiceFuture<'_, Profile> {
        Box::pin(async move {
            tokio::time::sleep(self.fetch_latency).await;
            if roll(self.fetch_failure_rate) {
                log::warn!("Simulated fetch failure");
                return Err(ServiceError::Network(FETCH_UNREACHABLE.to_string()));
            }
            Ok(self.current())
        })
    }

    fn save_profile(&self, candidate: Profile) -> ServiceFuture<'_, Profile> {
        Box::pin(async move {
            tokio::time::sleep(self.save_latency).await;
            if roll(self.save_failure_rate) {
                log::warn!("Simulated save failure");
                return Err(ServiceError::Server(SAVE_REJECTED.to_string()));
            }
            self.remember(candidate.clone());
            Ok(candidate)
        })
    }
}

fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 1.0)
    }
}

/// True when the call should fail. Rates of exactly 0 and 1 never touch the RNG.
fn roll(rate: f64) -> bool {
    if rate <= 0.0 {
        false
    } else if rate >= 1.0 {
        true
    } else {
        rand::rng().random_bool(rate)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn jane() -> Profile {
        Profile {
            name: "Jane Doe".into(),
            title: "Senior Frontend Developer".into(),
            email: "jane.doe@example.com".into(),
            bio: "Hi".into(),
            avatar: "https://example.com/jane.svg".into(),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_seed() {
        let service = SimulatedProfileService::new(jane());
        assert_eq!(service.fetch_profile().await, Ok(jane()));
    }

    #[tokio::test]
    async fn test_successful_save_is_returned_by_next_fetch() {
        let service = SimulatedProfileService::new(jane());
        let candidate = Profile {
            name: "Janet Doe".into(),
            ..jane()
        };

        assert_eq!(
            service.save_profile(candidate.clone()).await,
            Ok(candidate.clone())
        );
        assert_eq!(service.fetch_profile().await, Ok(candidate));
    }

    #[tokio::test]
    async fn test_certain_save_failure_keeps_seed() {
        let service = SimulatedProfileService::new(jane()).save_failure_rate(1.0);
        let candidate = Profile {
            name: "Janet Doe".into(),
            ..jane()
        };

        assert_eq!(
            service.save_profile(candidate).await,
            Err(ServiceError::Server(SAVE_REJECTED.to_string()))
        );
        assert_eq!(service.fetch_profile().await, Ok(jane()));
    }

    #[tokio::test]
    async fn test_certain_fetch_failure() {
        let service = SimulatedProfileService::new(jane()).fetch_failure_rate(1.0);
        assert_eq!(
            service.fetch_profile().await,
            Err(ServiceError::Network(FETCH_UNREACHABLE.to_string()))
        );
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let service = SimulatedProfileService::new(jane())
            .latencies(Duration::from_millis(20), Duration::from_millis(30));
        let started = tokio::time::Instant::now();

        service.fetch_profile().await.ok();
        assert!(started.elapsed() >= Duration::from_millis(20));

        service.save_profile(jane()).await.ok();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[rstest]
    #[case(-0.5, 0.0)]
    #[case(0.1, 0.1)]
    #[case(3.0, 1.0)]
    #[case(f64::NAN, 0.0)]
    fn test_clamp_rate(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(clamp_rate(input), expected);
    }

    #[test]
    fn test_roll_extremes_are_deterministic() {
        for _ in 0..100 {
            assert!(!roll(0.0));
            assert!(roll(1.0));
        }
    }
}
