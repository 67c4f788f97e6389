//! Error codes for board configuration.

use crate::board::KnobId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Debounce thresholds with `min >= max`, or a band whose saturated
    /// counter range `[min - 1, max + 1]` does not fit in an `i8`.
    InvalidBand { min: i8, max: i8 },
    /// A knob was requested but one of its switch jumpers is open.
    KnobUnwired(KnobId),
    /// The knob is not configured on this board.
    NoSuchKnob(KnobId),
}

impl ufmt::uDisplay for Error {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: ufmt::uWrite + ?Sized,
    {
        match *self {
            Error::InvalidBand { min, max } => {
                ufmt::uwrite!(f, "invalid debounce band {}..{}", min, max)
            }
            Error::KnobUnwired(id) => ufmt::uwrite!(f, "knob {} unwired", id.number()),
            Error::NoSuchKnob(id) => ufmt::uwrite!(f, "no knob {}", id.number()),
        }
    }
}
