//! Input handling for the Platino AVR board.
//!
//! The core is a pair of tick-driven state machines: a hysteresis
//! [`Debouncer`](drivers::Debouncer) for the pushbuttons and a
//! [`QuadratureDecoder`](drivers::QuadratureDecoder) for rotary encoders.
//! [`Board`](board::Board) wires them to the switches S1..S4 as described
//! by a [`BoardConfig`](config::BoardConfig).
//!
//! Everything is counted in ticks of [`config::TICK_PERIOD_US`]. On the
//! target, Timer0 provides the tick and the ISR calls `Board::tick`.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod board;
pub mod config;
pub mod drivers;
pub mod error;
pub mod os;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use board::{Board, ButtonId, KnobId};
pub use config::BoardConfig;
pub use error::Error;
