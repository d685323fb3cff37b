//! Host configuration structures and loaders.
use std::env;
use std::time::Duration;

use runtime::RuntimeConfig;

/// Configuration required to run a simulated scene session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// How long the session runs before shutting down.
    pub run_for: Duration,
    /// Interval between printed scene views.
    pub view_interval: Duration,
    /// Interval between character position updates.
    pub character_interval: Duration,
    /// Interval between simulated bowl clicks (`None` disables them).
    pub resource_click_interval: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            run_for: Duration::from_secs(30),
            view_interval: Duration::from_millis(500),
            character_interval: Duration::from_millis(100),
            resource_click_interval: Some(Duration::from_secs(20)),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PET_FAST_TICK_MS` - Fast tick period, `0` lets nothing drive it (default: ~16.7)
    /// - `PET_SLOW_TICK_MS` - Slow tick period, `0` disables it (default: 1500)
    /// - `PET_SEED` - Seed for reproducible decisions (default: OS entropy)
    /// - `PET_RUN_SECS` - Session length in seconds (default: 30)
    /// - `PET_VIEW_INTERVAL_MS` - Scene view output interval (default: 500)
    /// - `PET_RESOURCE_CLICK_SECS` - Bowl click interval, `0` disables (default: 20)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|raw| raw.trim().parse::<u64>().ok());
        let mut config = Self::default();

        if let Some(ms) = read("PET_FAST_TICK_MS") {
            config.runtime.fast_tick = non_zero(Duration::from_millis(ms));
        }
        if let Some(ms) = read("PET_SLOW_TICK_MS") {
            config.runtime.slow_tick = non_zero(Duration::from_millis(ms));
        }

        config.runtime.seed = read("PET_SEED");

        if let Some(secs) = read("PET_RUN_SECS") {
            config.run_for = Duration::from_secs(secs.max(1));
        }
        if let Some(ms) = read("PET_VIEW_INTERVAL_MS") {
            config.view_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(secs) = read("PET_RESOURCE_CLICK_SECS") {
            config.resource_click_interval = non_zero(Duration::from_secs(secs));
        }

        config
    }
}

fn non_zero(period: Duration) -> Option<Duration> {
    (!period.is_zero()).then_some(period)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = ClientConfig::from_lookup(|_| None);

        assert_eq!(config.runtime.fast_tick, Some(RuntimeConfig::DEFAULT_FAST_TICK));
        assert_eq!(config.runtime.slow_tick, Some(RuntimeConfig::DEFAULT_SLOW_TICK));
        assert_eq!(config.runtime.seed, None);
        assert_eq!(config.run_for, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("PET_FAST_TICK_MS", "20"),
            ("PET_SLOW_TICK_MS", "0"),
            ("PET_SEED", " 42 "),
            ("PET_RUN_SECS", "5"),
            ("PET_RESOURCE_CLICK_SECS", "0"),
        ]));

        assert_eq!(config.runtime.fast_tick, Some(Duration::from_millis(20)));
        assert_eq!(config.runtime.slow_tick, None);
        assert_eq!(config.runtime.seed, Some(42));
        assert_eq!(config.run_for, Duration::from_secs(5));
        assert_eq!(config.resource_click_interval, None);
    }

    #[test]
    fn ignores_unparseable_values() {
        let config = ClientConfig::from_lookup(lookup(&[("PET_SEED", "doggo")]));
        assert_eq!(config.runtime.seed, None);
    }
}
