//! Seedable pseudo-random number generator (xorshift64) and the
//! `RandomSource` seam the simulator draws all of its noise from.

/// Source of uniform floats in [0, 1).
///
/// The simulator never calls a global RNG; tests swap in a scripted source
/// to pin exact particle trajectories.
pub trait RandomSource {
    /// Next uniform value in [0, 1).
    fn next_f32(&mut self) -> f32;

    /// Uniform value in [lo, hi).
    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Uniform index in [0, len). `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f32() * len as f32) as usize).min(len.saturating_sub(1))
    }
}

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for Rng {
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly, so 1.0 is unreachable.
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }
}

/// Replays a fixed list of values, wrapping around at the end.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct Scripted {
    values: Vec<f32>,
    cursor: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(values: &[f32]) -> Self {
        Scripted { values: values.to_vec(), cursor: 0 }
    }

    /// Number of values handed out so far.
    pub(crate) fn drawn(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_f32(&mut self) -> f32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_f32(), rng2.next_f32());
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        // A zero xorshift state would stay zero forever.
        let a = rng.next_f32();
        let b = rng.next_f32();
        assert!((0.0..1.0).contains(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn next_f32_stays_in_unit_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "out of range: {}", v);
        }
    }

    #[test]
    fn range_respects_bounds() {
        let mut rng = Rng::new(99);
        for _ in 0..1000 {
            let v = rng.range(-2.0, -0.5);
            assert!(v >= -2.0 && v <= -0.5, "out of range: {}", v);
        }
    }

    #[test]
    fn index_covers_every_slot() {
        let mut rng = Rng::new(1234);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[rng.index(4)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn scripted_wraps_around() {
        let mut s = Scripted::new(&[0.25, 0.75]);
        assert_eq!(s.next_f32(), 0.25);
        assert_eq!(s.next_f32(), 0.75);
        assert_eq!(s.next_f32(), 0.25);
        assert_eq!(s.drawn(), 3);
        assert_eq!(s.index(4), 3);
    }
}
