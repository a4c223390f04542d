use std::net::IpAddr;
use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Per-IP-per-variant submission rate limiter using a sliding window.
pub struct SubmissionRateLimiter {
    /// (variant slug, ip) -> (count, window_start)
    entries: DashMap<(&'static str, IpAddr), (u32, Instant)>,
}

impl SubmissionRateLimiter {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Check if request is allowed. Returns Ok(()) or Err with retry-after seconds.
    pub fn check(
        &self,
        variant: &'static str,
        ip: IpAddr,
        limit: u32,
        window_secs: u64,
    ) -> Result<(), u64> {
        let key = (variant, ip);
        let window = Duration::from_secs(window_secs);
        let now = Instant::now();

        let mut entry = self.entries.entry(key).or_insert((0, now));
        let (count, start) = entry.value_mut();

        if now.duration_since(*start) > window {
            *count = 1;
            *start = now;
            return Ok(());
        }

        if *count >= limit {
            let elapsed = now.duration_since(*start).as_secs();
            return Err(window_secs.saturating_sub(elapsed));
        }

        *count += 1;
        Ok(())
    }

    /// Remove stale entries older than the given duration.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.entries
            .retain(|_, (_, start)| now.duration_since(*start) < max_age);
    }
}

impl Default for SubmissionRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_limit_then_rejects() {
        let limiter = SubmissionRateLimiter::new();
        let ip: IpAddr = "127.0.0.1".parse().unwrap();

        for _ in 0..3 {
            assert!(limiter.check("waitlist", ip, 3, 60).is_ok());
        }
        assert!(limiter.check("waitlist", ip, 3, 60).is_err());
    }

    #[test]
    fn variants_are_limited_independently() {
        let limiter = SubmissionRateLimiter::new();
        let ip: IpAddr = "127.0.0.1".parse().unwrap();

        assert!(limiter.check("waitlist", ip, 1, 60).is_ok());
        assert!(limiter.check("waitlist", ip, 1, 60).is_err());
        assert!(limiter.check("contact", ip, 1, 60).is_ok());
    }
}
