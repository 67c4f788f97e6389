use embedded_hal::digital::v2::InputPin;

use super::debouncer::{Band, ButtonState, Debouncer};

/// An active-low pushbutton sampled once per tick.
pub struct Pushbutton<P> {
    pin: P,
    debouncer: Debouncer,
}

impl<P: InputPin> Pushbutton<P> {
    pub fn new(pin: P, band: Band) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(band),
        }
    }

    /// Samples the pin once. Returns true while the input is settled.
    pub fn poll(&mut self) -> Result<bool, P::Error> {
        let released = self.pin.is_high()?;
        Ok(self.debouncer.sample(released))
    }

    pub fn read(&mut self, clear: bool) -> ButtonState {
        self.debouncer.read(clear)
    }

    pub fn clear(&mut self) {
        self.debouncer.clear();
    }

    /// Samples once and, once the input has settled, drains the state.
    ///
    /// Use with `nb::block!` to wait for a settled reading.
    pub fn read_debounced(&mut self) -> nb::Result<ButtonState, P::Error> {
        if self.poll()? {
            Ok(self.debouncer.read(true))
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock, State, Transaction};

    fn levels(states: &[State]) -> Mock {
        let expectations: Vec<Transaction> = states.iter().map(|s| Transaction::get(s.clone())).collect();
        Mock::new(&expectations)
    }

    #[test]
    fn poll_reads_pin_once_per_tick() {
        let pin = levels(&[State::High, State::High, State::High, State::Low]);
        let mut button = Pushbutton::new(pin, Band::default());

        assert!(!button.poll().unwrap());
        assert!(!button.poll().unwrap());
        assert!(button.poll().unwrap());
        assert_eq!(button.read(false), ButtonState::Released);
        assert!(!button.poll().unwrap());
        assert_eq!(button.debouncer().counter(), 2);

        button.release().done();
    }

    #[test]
    fn read_debounced_blocks_until_settled() {
        let pin = levels(&[State::High, State::High, State::High]);
        let mut button = Pushbutton::new(pin, Band::default());

        let state = nb::block!(button.read_debounced()).unwrap();
        assert_eq!(state, ButtonState::Released);
        assert_eq!(button.read(false), ButtonState::Idle);

        button.release().done();
    }

    #[test]
    fn read_debounced_would_block_while_bouncing() {
        let pin = levels(&[State::High, State::Low]);
        let mut button = Pushbutton::new(pin, Band::new(0, 3).unwrap());

        assert!(matches!(button.read_debounced(), Err(nb::Error::WouldBlock)));
        assert!(matches!(button.read_debounced(), Err(nb::Error::WouldBlock)));

        button.release().done();
    }
}
