// SPDX-License-Identifier: MPL-2.0
//! Tag suggestion stub.
//!
//! Placeholder for a future recommendation service: after a fixed delay it
//! returns a random subset of the candidate pool. The wizard only sees the
//! trait, so the real service can be substituted without touching wizard
//! logic.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// Fixed candidate pool the stub samples from.
pub const SUGGESTION_POOL: &[&str] = &[
    "전자기기",
    "주변기기",
    "사무용품",
    "게이밍",
    "무선",
    "기계식",
    "신상품",
    "할인",
    "인기상품",
    "가성비",
];

const MIN_SUGGESTIONS: usize = 4;
const MAX_SUGGESTIONS: usize = 6;

pub trait TagSuggester: Send + Sync {
    /// Produces a subset of `pool` suited to the draft being composed.
    fn suggest(&self, pool: Vec<String>) -> BoxFuture<'static, Vec<String>>;
}

/// Delay-then-shuffle stand-in for the recommendation service.
#[derive(Debug, Clone)]
pub struct StubTagSuggester {
    delay: Duration,
}

impl Default for StubTagSuggester {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(900),
        }
    }
}

impl StubTagSuggester {
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl TagSuggester for StubTagSuggester {
    fn suggest(&self, pool: Vec<String>) -> BoxFuture<'static, Vec<String>> {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            random_subset(pool)
        }
        .boxed()
    }
}

fn random_subset(mut pool: Vec<String>) -> Vec<String> {
    let mut rng = rand::thread_rng();
    pool.shuffle(&mut rng);
    let size = rng.gen_range(MIN_SUGGESTIONS..=MAX_SUGGESTIONS).min(pool.len());
    pool.truncate(size);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<String> {
        SUGGESTION_POOL.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn random_subset_stays_within_bounds() {
        for _ in 0..50 {
            let subset = random_subset(pool());
            assert!(subset.len() >= MIN_SUGGESTIONS);
            assert!(subset.len() <= MAX_SUGGESTIONS);
        }
    }

    #[test]
    fn random_subset_only_contains_pool_entries() {
        let subset = random_subset(pool());
        for tag in &subset {
            assert!(SUGGESTION_POOL.contains(&tag.as_str()));
        }
    }

    #[test]
    fn random_subset_has_no_duplicates() {
        for _ in 0..20 {
            let subset = random_subset(pool());
            let mut deduped = subset.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), subset.len());
        }
    }

    #[test]
    fn random_subset_caps_at_small_pools() {
        let small = vec!["a".to_string(), "b".to_string()];
        let subset = random_subset(small);
        assert_eq!(subset.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stub_resolves_after_its_delay() {
        let suggester = StubTagSuggester::with_delay(Duration::from_millis(10));
        let tags = suggester.suggest(pool()).await;
        assert!(!tags.is_empty());
    }
}
