//! Register-level collaborators for the AVR target: input lines, the tick
//! timer and the console UART.

#[cfg(feature = "atmega1284p")]
pub use avr_device::atmega1284p as mcu;
#[cfg(all(feature = "atmega328p", not(feature = "atmega1284p")))]
pub use avr_device::atmega328p as mcu;

pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::InputLine;
pub use timer::start_tick_timer;
pub use uart::Usart;
