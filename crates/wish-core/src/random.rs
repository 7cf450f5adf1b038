//! Randomness Seam
//!
//! The browser draws from `Math.random`; tests feed a fixed sequence.

/// Source of uniformly distributed floats in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform float in `[low, high)`
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }

    /// Pick one element, or `None` for an empty slice
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        // Clamp in case a source ever yields exactly 1.0
        let idx = ((self.next_f64() * items.len() as f64) as usize).min(items.len() - 1);
        items.get(idx)
    }
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Cycles through a fixed list of values
    pub struct Sequence {
        values: Vec<f64>,
        pos: usize,
    }

    impl Sequence {
        pub fn new(values: &[f64]) -> Self {
            Self { values: values.to_vec(), pos: 0 }
        }
    }

    impl RandomSource for Sequence {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Sequence;
    use super::*;

    #[test]
    fn test_pick_bounds() {
        let items = ["a", "b", "c"];
        assert_eq!(Sequence::new(&[0.0]).pick(&items), Some(&"a"));
        assert_eq!(Sequence::new(&[0.5]).pick(&items), Some(&"b"));
        assert_eq!(Sequence::new(&[0.999]).pick(&items), Some(&"c"));
        assert_eq!(Sequence::new(&[1.0]).pick(&items), Some(&"c"));
    }

    #[test]
    fn test_pick_empty() {
        let items: [u8; 0] = [];
        assert_eq!(Sequence::new(&[0.3]).pick(&items), None);
    }

    #[test]
    fn test_closure_source() {
        let mut rng = || 0.25;
        assert_eq!(rng.range(10.0, 30.0), 15.0);
    }
}
