//! Configuration for the Platino board.
//!
//! Timing constants are fixed at compile time. Which switches are wired,
//! and whether they form rotary encoders, is described by [`BoardConfig`]
//! and resolved once when the [`Board`](crate::board::Board) is built.

use crate::board::ButtonId;

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Period of the sampling tick in microseconds.
///
/// Debounce bands and the four sub-steps per detent are counted in ticks,
/// so every threshold in this crate is relative to this period.
pub const TICK_PERIOD_US: u32 = 1000;

/// Timer0 clock divider used for the tick interrupt
pub const TIMER0_PRESCALER: u32 = 64;

/// Timer0 compare value giving one interrupt per tick (CTC mode)
pub const TIMER0_COMPARE: u8 =
    (CPU_FREQ_HZ / TIMER0_PRESCALER / (1_000_000 / TICK_PERIOD_US) - 1) as u8;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Default lower debounce threshold
pub const DEBOUNCE_MIN: i8 = 0;

/// Default upper debounce threshold
pub const DEBOUNCE_MAX: i8 = 2;

/// I/O port a switch can be routed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Port {
    B,
    C,
}

/// A resolved input pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinId {
    pub port: Port,
    pub bit: u8,
}

impl PinId {
    pub const fn new(port: Port, bit: u8) -> Self {
        Self { port, bit }
    }
}

impl ufmt::uDisplay for PinId {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        let port = match self.port {
            Port::B => "PB",
            Port::C => "PC",
        };
        f.write_str(port)?;
        ufmt::uDisplay::fmt(&self.bit, f)
    }
}

/// Solder jumper position for one of the switches S1..S4.
///
/// JP4..JP7 route S1..S4 to bit 0..3 of either port B or port C.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Jumper {
    #[default]
    PortB,
    PortC,
    Open,
}

impl Jumper {
    /// Pin this jumper connects switch bit `bit` to, if any.
    pub const fn resolve(self, bit: u8) -> Option<PinId> {
        match self {
            Jumper::PortB => Some(PinId::new(Port::B, bit)),
            Jumper::PortC => Some(PinId::new(Port::C, bit)),
            Jumper::Open => None,
        }
    }
}

/// Board wiring, as soldered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// JP4..JP7, for S1..S4
    pub switches: [Jumper; 4],
    /// S1/S2 form knob 1
    pub knob1: bool,
    /// S3/S4 form knob 2
    pub knob2: bool,
    pub debounce_min: i8,
    pub debounce_max: i8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            switches: [Jumper::PortB; 4],
            knob1: false,
            knob2: false,
            debounce_min: DEBOUNCE_MIN,
            debounce_max: DEBOUNCE_MAX,
        }
    }
}

impl BoardConfig {
    pub fn with_knob1(mut self) -> Self {
        self.knob1 = true;
        self
    }

    pub fn with_knob2(mut self) -> Self {
        self.knob2 = true;
        self
    }

    pub fn with_switch(mut self, id: ButtonId, jumper: Jumper) -> Self {
        self.switches[id.bit() as usize] = jumper;
        self
    }

    pub fn with_debounce(mut self, min: i8, max: i8) -> Self {
        self.debounce_min = min;
        self.debounce_max = max;
        self
    }
}
