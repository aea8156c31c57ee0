//! Fixed-capacity shift registers backing the simulator buffers.

/// Fixed-capacity sample buffer ordered newest-first.
///
/// Shifting a value in evicts the oldest one and returns it. Storage is
/// a ring with a head cursor, so a shift moves no elements and never
/// allocates.
#[derive(Debug, Clone)]
pub struct ShiftRegister {
    /// Ring storage.
    slots: Vec<f64>,
    /// Physical index of the newest sample.
    head: usize,
}

impl ShiftRegister {
    /// Create a register holding `capacity` zeros.
    pub fn zeroed(capacity: usize) -> Self {
        Self {
            slots: vec![0.0; capacity],
            head: 0,
        }
    }

    /// Number of stored samples (fixed at construction).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the capacity is zero.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Shift `value` in as the newest sample and return the evicted
    /// oldest one. A zero-capacity register returns `value` unchanged.
    pub fn shift(&mut self, value: f64) -> f64 {
        if self.slots.is_empty() {
            return value;
        }
        // The oldest sample sits one slot behind the head on the ring;
        // that slot becomes the new head.
        self.head = (self.head + self.slots.len() - 1) % self.slots.len();
        let evicted = self.slots[self.head];
        self.slots[self.head] = value;
        evicted
    }

    /// Iterate newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.slots.len()).map(move |i| self.slots[(self.head + i) % self.slots.len()])
    }

    /// Zero every slot, keeping the capacity.
    pub fn reset(&mut self) {
        self.slots.fill(0.0);
        self.head = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_returns_the_evicted_oldest() {
        let mut reg = ShiftRegister::zeroed(3);
        assert_eq!(reg.shift(1.0), 0.0);
        assert_eq!(reg.shift(2.0), 0.0);
        assert_eq!(reg.shift(3.0), 0.0);
        assert_eq!(reg.shift(4.0), 1.0);
        assert_eq!(reg.shift(5.0), 2.0);
    }

    #[test]
    fn iter_walks_newest_first() {
        let mut reg = ShiftRegister::zeroed(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            reg.shift(v);
        }
        let contents: Vec<f64> = reg.iter().collect();
        assert_eq!(contents, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn zero_capacity_passes_values_through() {
        let mut reg = ShiftRegister::zeroed(0);
        assert!(reg.is_empty());
        assert_eq!(reg.shift(7.5), 7.5);
        assert_eq!(reg.iter().count(), 0);
    }

    #[test]
    fn reset_zeroes_contents_and_keeps_capacity() {
        let mut reg = ShiftRegister::zeroed(2);
        reg.shift(1.0);
        reg.shift(2.0);
        reg.reset();
        assert_eq!(reg.len(), 2);
        assert!(reg.iter().all(|v| v == 0.0));
    }
}
