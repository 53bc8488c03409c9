//! Tunable parameters of the input sender.

use std::time::Duration;

/// Input sender configuration.
///
/// Capacities of the fixed arenas are compile-time constants; only the
/// timing and distance parameters can be tuned at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct InputConfig {
    /// Minimum gap between two movement destinations sent upstream.
    pub move_send_interval: Duration,
    /// How long movement stays suppressed after a targeted action was sent.
    /// Prevents walking to the character that was just clicked.
    pub target_move_timeout: Duration,
    /// Length of pointer rays used for picking and ground movement.
    pub pointer_ray_distance: f32,
    /// Maximum distance a hit point may be moved to land on walkable ground.
    pub max_ground_distance: f32,
}

impl InputConfig {
    // ===== compile-time constants used as type parameters =====
    /// Intents buffered between two simulation ticks; extra intents are dropped.
    pub const INTENT_CAPACITY: usize = 5;
    /// Ray hits kept per query.
    pub const MAX_RAY_HITS: usize = 4;
    /// Targets carried by a single outbound request.
    pub const MAX_REQUEST_TARGETS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MOVE_SEND_INTERVAL: Duration = Duration::from_millis(40);
    pub const DEFAULT_TARGET_MOVE_TIMEOUT: Duration = Duration::from_millis(450);
    pub const DEFAULT_POINTER_RAY_DISTANCE: f32 = 100.0;
    pub const DEFAULT_MAX_GROUND_DISTANCE: f32 = 1.0;

    pub const fn new() -> Self {
        Self {
            move_send_interval: Self::DEFAULT_MOVE_SEND_INTERVAL,
            target_move_timeout: Self::DEFAULT_TARGET_MOVE_TIMEOUT,
            pointer_ray_distance: Self::DEFAULT_POINTER_RAY_DISTANCE,
            max_ground_distance: Self::DEFAULT_MAX_GROUND_DISTANCE,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `INPUT_MOVE_SEND_INTERVAL_MS` - Movement throttle in milliseconds (default: 40)
    /// - `INPUT_TARGET_MOVE_TIMEOUT_MS` - Movement hold-off after targeting (default: 450)
    /// - `INPUT_POINTER_RAY_DISTANCE` - Pick ray length in world units (default: 100)
    /// - `INPUT_MAX_GROUND_DISTANCE` - Ground projection tolerance (default: 1)
    ///
    /// Unparseable or negative values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`InputConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read_u64 = |key: &str| lookup(key)?.trim().parse::<u64>().ok();
        let read_f32 = |key: &str| lookup(key)?.trim().parse::<f32>().ok();
        let mut config = Self::default();

        if let Some(ms) = read_u64("INPUT_MOVE_SEND_INTERVAL_MS") {
            config.move_send_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = read_u64("INPUT_TARGET_MOVE_TIMEOUT_MS") {
            config.target_move_timeout = Duration::from_millis(ms);
        }
        if let Some(distance) = read_f32("INPUT_POINTER_RAY_DISTANCE")
            && distance.is_finite()
            && distance > 0.0
        {
            config.pointer_ray_distance = distance;
        }
        if let Some(distance) = read_f32("INPUT_MAX_GROUND_DISTANCE")
            && distance.is_finite()
            && distance >= 0.0
        {
            config.max_ground_distance = distance;
        }

        config
    }

    pub fn with_move_send_interval(mut self, interval: Duration) -> Self {
        self.move_send_interval = interval;
        self
    }

    pub fn with_target_move_timeout(mut self, timeout: Duration) -> Self {
        self.target_move_timeout = timeout;
        self
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| vars.get(key).map(|value| value.to_string())
    }

    #[test]
    fn garbage_and_out_of_range_values_keep_defaults() {
        let garbage = InputConfig::from_lookup(lookup(&[
            ("INPUT_MOVE_SEND_INTERVAL_MS", "fast"),
            ("INPUT_TARGET_MOVE_TIMEOUT_MS", ""),
            ("INPUT_POINTER_RAY_DISTANCE", "far"),
            ("INPUT_MAX_GROUND_DISTANCE", "1m"),
        ]));
        assert_eq!(garbage, InputConfig::default());

        let out_of_range = InputConfig::from_lookup(lookup(&[
            ("INPUT_MOVE_SEND_INTERVAL_MS", "-5"),
            ("INPUT_TARGET_MOVE_TIMEOUT_MS", "99999999999999999999999"),
            ("INPUT_POINTER_RAY_DISTANCE", "0"),
            ("INPUT_MAX_GROUND_DISTANCE", "-1.5"),
        ]));
        assert_eq!(out_of_range, InputConfig::default());

        let non_finite = InputConfig::from_lookup(lookup(&[
            ("INPUT_POINTER_RAY_DISTANCE", "inf"),
            ("INPUT_MAX_GROUND_DISTANCE", "NaN"),
        ]));
        assert_eq!(non_finite, InputConfig::default());
    }

    #[test]
    fn valid_values_override_defaults() {
        let config = InputConfig::from_lookup(lookup(&[
            ("INPUT_MOVE_SEND_INTERVAL_MS", " 25 "),
            ("INPUT_TARGET_MOVE_TIMEOUT_MS", "0"),
            ("INPUT_POINTER_RAY_DISTANCE", "250.5"),
            ("INPUT_MAX_GROUND_DISTANCE", "0"),
        ]));
        assert_eq!(config.move_send_interval, Duration::from_millis(25));
        assert_eq!(config.target_move_timeout, Duration::ZERO);
        assert_eq!(config.pointer_ray_distance, 250.5);
        assert_eq!(config.max_ground_distance, 0.0);
    }

    #[test]
    fn from_env_reads_process_environment() {
        // the only test in this crate touching INPUT_* variables
        unsafe {
            std::env::set_var("INPUT_MOVE_SEND_INTERVAL_MS", "not-a-number");
            std::env::set_var("INPUT_POINTER_RAY_DISTANCE", "-3");
            std::env::set_var("INPUT_TARGET_MOVE_TIMEOUT_MS", "300");
        }
        let config = InputConfig::from_env();
        unsafe {
            std::env::remove_var("INPUT_MOVE_SEND_INTERVAL_MS");
            std::env::remove_var("INPUT_POINTER_RAY_DISTANCE");
            std::env::remove_var("INPUT_TARGET_MOVE_TIMEOUT_MS");
        }

        assert_eq!(
            config,
            InputConfig::default().with_target_move_timeout(Duration::from_millis(300))
        );
    }

    #[test]
    fn defaults_match_design_values() {
        let config = InputConfig::default();
        assert_eq!(config.move_send_interval, Duration::from_millis(40));
        assert_eq!(config.target_move_timeout, Duration::from_millis(450));
        assert_eq!(config.pointer_ray_distance, 100.0);
        assert_eq!(config.max_ground_distance, 1.0);
    }

    #[test]
    fn builders_override_timing() {
        let config = InputConfig::new()
            .with_move_send_interval(Duration::from_millis(10))
            .with_target_move_timeout(Duration::ZERO);
        assert_eq!(config.move_send_interval, Duration::from_millis(10));
        assert_eq!(config.target_move_timeout, Duration::ZERO);
    }
}
