//! The Platino front panel: switches S1..S4 and up to two rotary encoders.
//!
//! S1/S2 and S3/S4 are wired as pairs. Each pair is either two independent
//! pushbuttons or the two phases of a knob, decided once when the board is
//! built. A knob owns its phase debouncers, so a switch is never read both
//! as a button and as an encoder phase.

use embedded_hal::digital::v2::InputPin;
use ufmt::uWrite;

use crate::config::{BoardConfig, PinId};
use crate::drivers::{Band, ButtonState, Console, Pushbutton, QuadratureDecoder};
use crate::error::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonId {
    S1,
    S2,
    S3,
    S4,
}

impl ButtonId {
    pub const ALL: [ButtonId; 4] = [ButtonId::S1, ButtonId::S2, ButtonId::S3, ButtonId::S4];

    /// Bit of port B/C the switch is wired to.
    pub const fn bit(self) -> u8 {
        self as u8
    }

    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    fn pair(self) -> (KnobId, bool) {
        match self {
            ButtonId::S1 => (KnobId::Knob1, false),
            ButtonId::S2 => (KnobId::Knob1, true),
            ButtonId::S3 => (KnobId::Knob2, false),
            ButtonId::S4 => (KnobId::Knob2, true),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KnobId {
    Knob1,
    Knob2,
}

impl KnobId {
    pub const fn number(self) -> u8 {
        match self {
            KnobId::Knob1 => 1,
            KnobId::Knob2 => 2,
        }
    }
}

/// A rotary encoder and the two switches carrying its phases.
pub struct Knob<P> {
    a: Pushbutton<P>,
    b: Pushbutton<P>,
    decoder: QuadratureDecoder,
}

impl<P: InputPin> Knob<P> {
    fn new(a: Pushbutton<P>, b: Pushbutton<P>) -> Self {
        Self {
            a,
            b,
            decoder: QuadratureDecoder::new(),
        }
    }

    fn tick(&mut self) -> Result<(), P::Error> {
        self.a.poll()?;
        self.b.poll()?;

        // Phases only count once both have seen a debounced edge.
        let a = self.a.read(false).level();
        let b = self.b.read(false).level();
        if let (Some(a), Some(b)) = (a, b) {
            self.decoder.tick(a, b);
        }
        Ok(())
    }
}

/// One switch pair, resolved from the jumpers.
pub enum Controls<P> {
    Buttons {
        first: Option<Pushbutton<P>>,
        second: Option<Pushbutton<P>>,
    },
    Knob(Knob<P>),
}

impl<P: InputPin> Controls<P> {
    fn tick(&mut self) -> Result<(), P::Error> {
        match self {
            Controls::Buttons { first, second } => {
                for button in [first, second].into_iter().flatten() {
                    button.poll()?;
                }
                Ok(())
            }
            Controls::Knob(knob) => knob.tick(),
        }
    }

    fn button(&mut self, second: bool) -> Option<&mut Pushbutton<P>> {
        match self {
            Controls::Buttons { first, .. } if !second => first.as_mut(),
            Controls::Buttons { second: button, .. } => button.as_mut(),
            Controls::Knob(_) => None,
        }
    }

    fn knob(&mut self) -> Option<&mut Knob<P>> {
        match self {
            Controls::Knob(knob) => Some(knob),
            Controls::Buttons { .. } => None,
        }
    }
}

pub struct Board<P> {
    left: Controls<P>,
    right: Controls<P>,
    pins: [Option<PinId>; 4],
}

impl<P: InputPin> Board<P> {
    /// Resolves the wiring in `config` and takes the pins it needs.
    ///
    /// `pin_for` is called once per connected switch.
    pub fn new<F>(config: &BoardConfig, mut pin_for: F) -> Result<Self, Error>
    where
        F: FnMut(PinId) -> P,
    {
        let band = Band::new(config.debounce_min, config.debounce_max)?;
        let mut pins = [None; 4];
        for id in ButtonId::ALL {
            pins[id.bit() as usize] = config.switches[id.bit() as usize].resolve(id.bit());
        }

        let mut controls = |knob: KnobId, wanted: bool| -> Result<Controls<P>, Error> {
            let (first, second) = match knob {
                KnobId::Knob1 => (pins[0], pins[1]),
                KnobId::Knob2 => (pins[2], pins[3]),
            };
            let mut button = |pin: PinId| Pushbutton::new(pin_for(pin), band);

            if wanted {
                let (Some(a), Some(b)) = (first, second) else {
                    return Err(Error::KnobUnwired(knob));
                };
                Ok(Controls::Knob(Knob::new(button(a), button(b))))
            } else {
                Ok(Controls::Buttons {
                    first: first.map(&mut button),
                    second: second.map(&mut button),
                })
            }
        };

        let left = controls(KnobId::Knob1, config.knob1)?;
        let right = controls(KnobId::Knob2, config.knob2)?;
        Ok(Self { left, right, pins })
    }

    /// Samples every connected switch and advances the knobs.
    ///
    /// Call once per tick from the timer interrupt.
    pub fn tick(&mut self) -> Result<(), P::Error> {
        self.left.tick()?;
        self.right.tick()
    }

    fn controls(&mut self, knob: KnobId) -> &mut Controls<P> {
        match knob {
            KnobId::Knob1 => &mut self.left,
            KnobId::Knob2 => &mut self.right,
        }
    }

    fn pushbutton(&mut self, id: ButtonId) -> Option<&mut Pushbutton<P>> {
        let (knob, second) = id.pair();
        self.controls(knob).button(second)
    }

    fn knob(&mut self, id: KnobId) -> Option<&mut Knob<P>> {
        self.controls(id).knob()
    }

    pub fn has_pushbutton(&mut self, id: ButtonId) -> bool {
        self.pushbutton(id).is_some()
    }

    pub fn has_knob(&mut self, id: KnobId) -> bool {
        self.knob(id).is_some()
    }

    /// Last edge of a pushbutton. Idle if the switch is absent or is a
    /// knob phase.
    pub fn pushbutton_read(&mut self, id: ButtonId, clear: bool) -> ButtonState {
        self.pushbutton(id)
            .map_or(ButtonState::Idle, |button| button.read(clear))
    }

    pub fn pushbutton_clear(&mut self, id: ButtonId) {
        if let Some(button) = self.pushbutton(id) {
            button.clear();
        }
    }

    pub fn knob_changed(&mut self, id: KnobId) -> bool {
        self.knob(id).map_or(false, |knob| knob.decoder.changed())
    }

    /// Knob position, clearing its changed flag.
    pub fn knob_read(&mut self, id: KnobId) -> Option<i16> {
        self.knob(id).map(|knob| knob.decoder.read())
    }

    pub fn knob_write(&mut self, id: KnobId, value: i16) -> Result<(), Error> {
        let knob = self.knob(id).ok_or(Error::NoSuchKnob(id))?;
        knob.decoder.write(value);
        Ok(())
    }

    /// Logs the resolved wiring.
    pub fn describe<W: uWrite>(&mut self, console: &mut Console<W>) -> Result<(), W::Error> {
        for id in ButtonId::ALL {
            let role = match (self.pins[id.bit() as usize], id.pair()) {
                (None, _) => "open",
                (Some(_), (knob, _)) if self.has_knob(knob) => "knob",
                (Some(_), _) => "button",
            };
            ufmt::uwrite!(console.writer(), "[INF] S{}: {}", id.number(), role)?;
            if let Some(pin) = self.pins[id.bit() as usize] {
                ufmt::uwrite!(console.writer(), " {}", pin)?;
            }
            console.write_str("\r\n")?;
        }
        Ok(())
    }
}
