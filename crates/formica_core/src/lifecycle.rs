//! Shared lifecycle plumbing for ants, queens and eggs.

use crate::config::Settings;
use crate::food::Food;
use rand::Rng;

/// A colony member that ages one day at a time.
///
/// `evolve` is a no-op once the member is dead. The outcome type carries
/// whatever the member hands back to the colony on that day: a death cause,
/// a successor egg or a hatchling.
pub trait Lifecycle {
    type Outcome;

    fn evolve<R: Rng + ?Sized>(
        &mut self,
        food: &mut Food,
        settings: &Settings,
        rng: &mut R,
    ) -> Self::Outcome;

    fn is_alive(&self) -> bool;

    fn age(&self) -> u32;

    fn max_age(&self) -> u32;
}

/// Uniform integer draw in `[avg - variation, avg + variation]`, with the lower
/// bound clamped at zero.
pub fn draw_around<R: Rng + ?Sized>(rng: &mut R, avg: u32, variation: u32) -> u32 {
    let low = avg.saturating_sub(variation);
    let high = avg.saturating_add(variation);
    rng.gen_range(low..=high)
}

/// Bernoulli trial: `true` with probability `chance`.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    rng.gen::<f64>() < chance
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_draw_around_stays_in_span() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let v = draw_around(&mut rng, 90, 20);
            assert!((70..=110).contains(&v));
        }
    }

    #[test]
    fn test_draw_around_clamps_low_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(draw_around(&mut rng, 3, 10) <= 13);
        }
        assert_eq!(draw_around(&mut rng, 0, 0), 0);
    }

    #[test]
    fn test_roll_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(!roll(&mut rng, 0.0));
            assert!(roll(&mut rng, 1.0));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn draw_around_within_clamped_span(
                seed in any::<u64>(),
                avg in 0u32..10_000,
                variation in 0u32..10_000
            ) {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let v = draw_around(&mut rng, avg, variation);
                prop_assert!(v >= avg.saturating_sub(variation));
                prop_assert!(v <= avg + variation);
            }
        }
    }
}
