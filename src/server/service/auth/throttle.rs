//! Login throttle.
//!
//! Failed attempts are counted per guard and email within a decay window. Once the limit is
//! reached further attempts are rejected until the window started by the first failure elapses.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};

use crate::server::model::auth::Guard;

/// Tracked keys above which `hit` sweeps lapsed windows
pub const PRUNE_THRESHOLD: usize = 1024;

#[derive(Clone, Debug)]
pub struct LoginThrottle {
    max_attempts: u32,
    decay: Duration,
    attempts: Arc<Mutex<HashMap<String, (u32, Instant)>>>,
}

impl LoginThrottle {
    pub fn new(max_attempts: u32, decay_seconds: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            decay: Duration::from_secs(decay_seconds),
            attempts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn key(guard: Guard, email: &str) -> String {
        format!("{}|{}", guard.name(), email.trim().to_lowercase())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, (u32, Instant)>> {
        self.attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Seconds until the key may retry, `None` while attempts remain
    pub fn available_in(&self, key: &str) -> Option<u64> {
        self.available_in_at(key, Instant::now())
    }

    fn available_in_at(&self, key: &str, now: Instant) -> Option<u64> {
        let mut attempts = self.lock();

        let (count, started) = *attempts.get(key)?;
        let elapsed = now.saturating_duration_since(started);

        if elapsed >= self.decay {
            attempts.remove(key);
            return None;
        }

        if count < self.max_attempts {
            return None;
        }

        Some((self.decay - elapsed).as_secs().max(1))
    }

    /// Records a failed attempt
    pub fn hit(&self, key: &str) {
        self.hit_at(key, Instant::now())
    }

    fn hit_at(&self, key: &str, now: Instant) {
        let mut attempts = self.lock();

        if attempts.len() >= PRUNE_THRESHOLD {
            let decay = self.decay;
            attempts.retain(|_, (_, started)| now.saturating_duration_since(*started) < decay);
        }

        let entry = attempts.entry(key.to_string()).or_insert((0, now));
        if now.saturating_duration_since(entry.1) >= self.decay {
            *entry = (0, now);
        }
        entry.0 += 1;
    }

    pub fn clear(&self, key: &str) {
        self.lock().remove(key);
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.lock().len()
    }
}
