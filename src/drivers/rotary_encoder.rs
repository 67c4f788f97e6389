//! Quadrature decoder for a mechanical rotary encoder.
//!
//! The two phases form a 2-bit Gray code. One detent is a full cycle of
//! four codes, so the position only moves after four consistent sub-steps.
//! A change of direction part way through a detent throws away the partial
//! progress instead of applying it backwards.

const STEPS_PER_DETENT: i8 = 4;

#[derive(Debug, Clone, Default)]
pub struct QuadratureDecoder {
    prior: u8,
    sub: i8,
    position: i16,
    changed: bool,
}

impl QuadratureDecoder {
    pub const fn new() -> Self {
        Self {
            prior: 0,
            sub: 0,
            position: 0,
            changed: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feeds the debounced phase levels of one tick.
    ///
    /// Returns true when the position moved by one detent.
    pub fn tick(&mut self, a: bool, b: bool) -> bool {
        let state = a as u8 | (b as u8) << 1;
        if state == self.prior {
            return false;
        }

        // Direction from the high bit of the new code against the low bit
        // of the previous one. Jumps over two codes still get a direction.
        let inc: i8 = if ((state >> 1) ^ self.prior) & 0x01 != 0 { 1 } else { -1 };
        self.prior = state;

        if (inc < 0 && self.sub > 0) || (inc > 0 && self.sub < 0) {
            self.sub = 0;
        }

        self.sub += inc;
        if self.sub.abs() >= STEPS_PER_DETENT {
            self.position = self.position.wrapping_add(inc as i16);
            self.sub -= inc * STEPS_PER_DETENT;
            self.changed = true;
            return true;
        }
        false
    }

    /// True if the position moved since the last [`read`](Self::read).
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Returns the position and clears the changed flag.
    pub fn read(&mut self) -> i16 {
        self.changed = false;
        self.position
    }

    /// Seeds the position, e.g. with an initial volume.
    pub fn write(&mut self, value: i16) {
        self.position = value;
        self.changed = true;
    }

    /// Partial progress towards the next detent, for diagnostics.
    pub fn sub_steps(&self) -> i8 {
        self.sub
    }
}
