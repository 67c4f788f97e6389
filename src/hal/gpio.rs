use core::convert::Infallible;
use embedded_hal::digital::v2::InputPin;

use super::mcu::{PORTB, PORTC};
use crate::config::{PinId, Port};

/// A switch input on port B or C, chosen at runtime from the jumpers.
#[derive(Debug)]
pub struct InputLine {
    port: Port,
    mask: u8,
}

impl InputLine {
    /// Makes `pin` an input with the pull-up disabled.
    ///
    /// The board has its own pull-ups on S1..S4.
    pub fn new(pin: PinId) -> Self {
        let mask = 1 << pin.bit;
        // Clear DDRx bit and disable pull-up
        unsafe {
            match pin.port {
                Port::B => {
                    let port = &*PORTB::ptr();
                    port.ddrb.modify(|r, w| w.bits(r.bits() & !mask));
                    port.portb.modify(|r, w| w.bits(r.bits() & !mask));
                }
                Port::C => {
                    let port = &*PORTC::ptr();
                    port.ddrc.modify(|r, w| w.bits(r.bits() & !mask));
                    port.portc.modify(|r, w| w.bits(r.bits() & !mask));
                }
            }
        }
        Self {
            port: pin.port,
            mask,
        }
    }

    #[inline]
    fn level(&self) -> bool {
        let bits = unsafe {
            match self.port {
                Port::B => (*PORTB::ptr()).pinb.read().bits(),
                Port::C => (*PORTC::ptr()).pinc.read().bits(),
            }
        };
        bits & self.mask != 0
    }
}

impl InputPin for InputLine {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(self.level())
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(!self.level())
    }
}
