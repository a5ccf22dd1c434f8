//! Seeded pseudo-random stream for prose variation.
//!
//! Park–Miller minimal standard generator. Not suitable for anything that
//! needs unpredictability.

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;

/// Linear congruential generator
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Seed the generator. The seed is reduced modulo 2^31 - 1; zero maps to a
    /// fixed non-zero state since zero is a fixed point of the recurrence.
    pub fn new(seed: u64) -> Self {
        let mut state = seed % MODULUS;
        if state == 0 {
            state = MODULUS - 1;
        }
        Self { state }
    }

    /// Advance and return a float in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len - 1)
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_index(items.len())]
    }

    /// Draw `count` distinct elements, removing each chosen index from a
    /// working copy of the pool.
    pub fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut pool = items.to_vec();
        let mut chosen = Vec::with_capacity(count.min(pool.len()));
        while chosen.len() < count && !pool.is_empty() {
            let index = self.next_index(pool.len());
            chosen.push(pool.remove(index));
        }
        chosen
    }
}
