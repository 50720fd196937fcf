use std::time::Duration;

/// Runtime configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port for the HTTP API (from BIBLIA_PORT).
    pub port: u16,
    /// Artificial latency applied to simulated assistant calls
    /// (from BIBLIA_SIMULATED_DELAY_MS).
    pub simulated_delay: Duration,
    /// Deadline for any single assistant call (from BIBLIA_REQUEST_TIMEOUT_MS).
    pub request_timeout: Duration,
    /// Seed for the session RNG (from BIBLIA_RNG_SEED); entropy when unset.
    pub rng_seed: Option<u64>,
}

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DELAY_MS: u64 = 1500;
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("BIBLIA_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let delay_ms = std::env::var("BIBLIA_SIMULATED_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DELAY_MS);

        let timeout_ms = std::env::var("BIBLIA_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let rng_seed = std::env::var("BIBLIA_RNG_SEED")
            .ok()
            .and_then(|s| s.parse().ok());

        Self {
            port,
            simulated_delay: Duration::from_millis(delay_ms),
            request_timeout: Duration::from_millis(timeout_ms),
            rng_seed,
        }
    }

    /// Zero-latency configuration for tests.
    pub fn instant() -> Self {
        Self {
            port: DEFAULT_PORT,
            simulated_delay: Duration::ZERO,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
