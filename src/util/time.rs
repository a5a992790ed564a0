//! Monotonic clock for gesture throttling.

/// Seconds elapsed since the first call in this process
#[cfg(not(target_arch = "wasm32"))]
pub fn monotonic_secs() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Seconds since page load
#[cfg(target_arch = "wasm32")]
pub fn monotonic_secs() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map_or(0.0, |performance| performance.now() / 1000.0)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_clock_never_goes_backwards() {
        let first = monotonic_secs();
        let second = monotonic_secs();
        assert!(second >= first);
    }
}
