use core::convert::Infallible;

use super::mcu::USART0;
use crate::config::{CPU_FREQ_HZ, UART_BAUD};

// Baud rate calculation (normal speed mode)
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

/// Blocking USART0 transmitter for the console.
pub struct Usart {
    usart: USART0,
}

impl Usart {
    pub fn new(usart: USART0) -> Self {
        usart.ubrr0.write(|w| unsafe { w.bits(UBRR) });
        usart.ucsr0b.write(|w| w.txen0().set_bit().rxen0().set_bit());
        usart.ucsr0c.write(|w| w.umsel0().usart_async().ucsz0().chr8());
        Self { usart }
    }

    pub fn write_byte(&mut self, byte: u8) {
        while self.usart.ucsr0a.read().udre0().bit_is_clear() {}
        self.usart.udr0.write(|w| unsafe { w.bits(byte) });
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        if self.usart.ucsr0a.read().rxc0().bit_is_set() {
            Some(self.usart.udr0.read().bits())
        } else {
            None
        }
    }
}

impl ufmt::uWrite for Usart {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
