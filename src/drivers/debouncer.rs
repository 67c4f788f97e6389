//! Counter-based debouncer with hysteresis.
//!
//! Every tick the integrator moves one step toward the sampled level. A
//! transition is latched into the [`ButtonState`] only on the step that
//! crosses a band edge, after which the counter parks one step outside the
//! band until the level changes again.
//!
//! Buttons are active low: a high level means released.

use crate::config::{DEBOUNCE_MAX, DEBOUNCE_MIN};
use crate::error::Error;

/// Last detected transition of a debounced input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ButtonState {
    Pressed = 0,
    Released = 1,
    Idle = 2,
}

impl ButtonState {
    /// Logic level this state stands for, if it is an edge.
    pub fn level(self) -> Option<bool> {
        match self {
            ButtonState::Pressed => Some(false),
            ButtonState::Released => Some(true),
            ButtonState::Idle => None,
        }
    }
}

/// Hysteresis band of a [`Debouncer`].
///
/// The counter saturates at `min - 1` and `max + 1`, so both must fit in
/// an `i8`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Band {
    min: i8,
    max: i8,
}

impl Band {
    pub const fn new(min: i8, max: i8) -> Result<Self, Error> {
        if min >= max || min == i8::MIN || max == i8::MAX {
            return Err(Error::InvalidBand { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> i8 {
        self.min
    }

    pub const fn max(&self) -> i8 {
        self.max
    }

    /// Same-direction samples needed to walk across the band.
    pub const fn width(&self) -> u8 {
        (self.max as i16 - self.min as i16 + 1) as u8
    }
}

impl Default for Band {
    fn default() -> Self {
        Self {
            min: DEBOUNCE_MIN,
            max: DEBOUNCE_MAX,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    counter: i8,
    state: ButtonState,
    band: Band,
}

impl Debouncer {
    pub const fn new(band: Band) -> Self {
        Self {
            counter: 0,
            state: ButtonState::Idle,
            band,
        }
    }

    /// Sets a new band and restarts from the idle state.
    pub fn configure(&mut self, min: i8, max: i8) -> Result<(), Error> {
        let band = Band::new(min, max)?;
        *self = Self::new(band);
        Ok(())
    }

    /// Feeds one tick's raw level.
    ///
    /// Returns true while the input is settled past a band edge, including
    /// the tick that crossed it. Only the crossing tick updates the state.
    pub fn sample(&mut self, released: bool) -> bool {
        if released {
            if self.counter < self.band.max {
                self.counter += 1;
                false
            } else {
                if self.counter == self.band.max {
                    self.counter += 1;
                    self.state = ButtonState::Released;
                }
                true
            }
        } else if self.counter > self.band.min {
            self.counter -= 1;
            false
        } else {
            if self.counter == self.band.min {
                self.counter -= 1;
                self.state = ButtonState::Pressed;
            }
            true
        }
    }

    /// Returns the last transition, resetting it to idle if `clear` is set.
    pub fn read(&mut self, clear: bool) -> ButtonState {
        let state = self.state;
        if clear {
            self.state = ButtonState::Idle;
        }
        state
    }

    pub fn peek(&self) -> ButtonState {
        self.state
    }

    pub fn clear(&mut self) {
        self.state = ButtonState::Idle;
    }

    /// Current integrator value, for diagnostics.
    pub fn counter(&self) -> i8 {
        self.counter
    }

    pub fn band(&self) -> Band {
        self.band
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Band::default())
    }
}
