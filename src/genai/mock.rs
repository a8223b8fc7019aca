use super::TextGenerator;
use crate::{Result, config::MockConfig};
use async_trait::async_trait;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

pub const KUBERNETES_RESPONSE: &str = "Kubernetes is used to orchestrate and manage containers.";
pub const DOCKER_RESPONSE: &str =
    "Docker allows applications to run consistently across environments.";

/// Fallback answers for prompts that match no keyword.
pub const CANNED_RESPONSES: [&str; 4] = [
    "Kubernetes helps deploy and scale containerized applications.",
    "Docker packages applications with all dependencies.",
    "DevOps focuses on automation, reliability, and fast delivery.",
    "Containers make applications portable and scalable.",
];

/// Stand-in for a real model: waits a random time, then answers by keyword
/// or with a random canned sentence.
///
/// The same random source drives both the delay and the fallback choice, so a
/// seeded generator is fully reproducible.
pub struct MockGenerator {
    rng: Mutex<StdRng>,
    latency_min: Duration,
    latency_max: Duration,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &MockConfig) -> Self {
        let generator = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };

        generator.with_latency(
            Duration::from_millis(config.latency_min_ms),
            Duration::from_millis(config.latency_max_ms),
        )
    }

    fn from_rng(rng: StdRng) -> Self {
        let defaults = MockConfig::default();
        Self {
            rng: Mutex::new(rng),
            latency_min: Duration::from_millis(defaults.latency_min_ms),
            latency_max: Duration::from_millis(defaults.latency_max_ms),
        }
    }

    /// Bounds are swapped if given in the wrong order.
    pub fn with_latency(mut self, min: Duration, max: Duration) -> Self {
        self.latency_min = min.min(max);
        self.latency_max = max.max(min);
        self
    }

    pub fn latency_bounds(&self) -> (Duration, Duration) {
        (self.latency_min, self.latency_max)
    }

    fn next_delay(&self) -> Duration {
        if self.latency_min == self.latency_max {
            return self.latency_min;
        }

        let (min, max) = (self.latency_min, self.latency_max);
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    /// Answers without the simulated delay.
    pub fn respond(&self, prompt: &str) -> String {
        let prompt_lower = prompt.to_lowercase();

        if prompt_lower.contains("kubernetes") {
            KUBERNETES_RESPONSE.to_string()
        } else if prompt_lower.contains("docker") {
            DOCKER_RESPONSE.to_string()
        } else {
            let index = self.with_rng(|rng| rng.gen_range(0..CANNED_RESPONSES.len()));
            CANNED_RESPONSES[index].to_string()
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // Poisoning leaves the RNG usable.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let delay = self.next_delay();
        debug!("Simulating inference latency of {:?}", delay);
        tokio::time::sleep(delay).await;

        Ok(self.respond(prompt))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kubernetes_wins_over_docker() {
        let generator = MockGenerator::with_seed(7);
        assert_eq!(
            generator.respond("docker or Kubernetes?"),
            KUBERNETES_RESPONSE
        );
    }

    #[test]
    fn test_default_latency_bounds() {
        let generator = MockGenerator::with_seed(1);
        assert_eq!(
            generator.latency_bounds(),
            (Duration::from_millis(500), Duration::from_millis(1500))
        );
    }

    #[test]
    fn test_with_latency_orders_bounds() {
        let generator = MockGenerator::with_seed(1)
            .with_latency(Duration::from_millis(20), Duration::from_millis(10));
        assert_eq!(
            generator.latency_bounds(),
            (Duration::from_millis(10), Duration::from_millis(20))
        );
    }

    #[test]
    fn test_delay_stays_in_bounds() {
        let generator = MockGenerator::with_seed(3)
            .with_latency(Duration::from_millis(5), Duration::from_millis(9));
        for _ in 0..100 {
            let delay = generator.next_delay();
            assert!(delay >= Duration::from_millis(5) && delay <= Duration::from_millis(9));
        }
    }

    #[test]
    fn test_delay_beyond_u64_micros_stays_in_bounds() {
        // Both bounds exceed u64::MAX microseconds.
        let min = Duration::from_secs(1 << 50);
        let max = min + Duration::from_secs(5);
        let generator = MockGenerator::with_seed(11).with_latency(min, max);

        for _ in 0..100 {
            let delay = generator.next_delay();
            assert!(delay >= min && delay <= max, "out of bounds: {delay:?}");
        }
    }

    #[test]
    fn test_config_max_latency_is_preserved() {
        let generator = MockGenerator::from_config(&MockConfig {
            latency_min_ms: u64::MAX - 1,
            latency_max_ms: u64::MAX,
            seed: Some(2),
        });

        let delay = generator.next_delay();
        assert!(delay >= Duration::from_millis(u64::MAX - 1));
    }
}
