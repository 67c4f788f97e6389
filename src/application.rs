//! Application layer: what the main loop does with the panel.
//!
//! Knob 1 sets a volume between 0 and 100. Button edges are logged.

use embedded_hal::digital::v2::InputPin;
use ufmt::uWrite;

use crate::board::{Board, ButtonId, KnobId};
use crate::drivers::{ButtonState, Console};
use crate::os::Shared;

pub const VOLUME_MAX: i16 = 100;

/// What changed since the last update, copied out under the lock.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub volume: Option<i16>,
    pub buttons: [Option<ButtonState>; 4],
}

pub struct Application {
    volume: i16,
}

impl Application {
    pub fn new(volume: i16) -> Self {
        Self {
            volume: volume.clamp(0, VOLUME_MAX),
        }
    }

    pub fn volume(&self) -> i16 {
        self.volume
    }

    /// Seeds knob 1 with the current volume.
    pub fn start<P>(&self, board: &Shared<Option<Board<P>>>)
    where
        P: InputPin,
    {
        board.with(|board| {
            if let Some(board) = board {
                // No knob 1 simply means a fixed volume.
                board.knob_write(KnobId::Knob1, self.volume).ok();
            }
        });
    }

    /// Drains pending edges and knob movement, keeping the lock short.
    pub fn poll<P>(&mut self, board: &Shared<Option<Board<P>>>) -> Snapshot
    where
        P: InputPin,
    {
        board.with(|board| {
            let mut snapshot = Snapshot::default();
            let Some(board) = board else {
                return snapshot;
            };

            for id in ButtonId::ALL {
                let state = board.pushbutton_read(id, true);
                if state != ButtonState::Idle {
                    snapshot.buttons[id.bit() as usize] = Some(state);
                }
            }

            if board.knob_changed(KnobId::Knob1) {
                if let Some(raw) = board.knob_read(KnobId::Knob1) {
                    let volume = raw.clamp(0, VOLUME_MAX);
                    if volume != raw {
                        // Park the knob at the end stop; the write sets the
                        // changed flag again, so clear it right away.
                        board.knob_write(KnobId::Knob1, volume).ok();
                        board.knob_read(KnobId::Knob1);
                    }
                    snapshot.volume = Some(volume);
                }
            }
            snapshot
        })
    }

    /// One pass of the main loop.
    pub fn update<P, W>(
        &mut self,
        board: &Shared<Option<Board<P>>>,
        console: &mut Console<W>,
    ) -> Result<(), W::Error>
    where
        P: InputPin,
        W: uWrite,
    {
        let snapshot = self.poll(board);

        for id in ButtonId::ALL {
            if let Some(state) = snapshot.buttons[id.bit() as usize] {
                let edge = match state {
                    ButtonState::Pressed => "pressed",
                    ButtonState::Released => "released",
                    ButtonState::Idle => continue,
                };
                ufmt::uwrite!(console.writer(), "[INF] S{} {}\r\n", id.number(), edge)?;
            }
        }

        if let Some(volume) = snapshot.volume {
            if volume != self.volume {
                self.volume = volume;
                console.debug("Volume", &volume)?;
            }
        }
        Ok(())
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new(VOLUME_MAX / 2)
    }
}
