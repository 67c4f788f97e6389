use embedded_hal_mock::pin::{Mock, State, Transaction};
use platino::config::{Jumper, PinId, Port};
use platino::drivers::ButtonState;
use platino::{Board, BoardConfig, ButtonId, KnobId};

/// Phase levels (a, b) held for `ticks` ticks each.
fn hold(codes: &[(u8, usize)]) -> Vec<(bool, bool)> {
    codes
        .iter()
        .flat_map(|&(code, ticks)| std::iter::repeat((code & 1 != 0, code & 2 != 0)).take(ticks))
        .collect()
}

fn expect(levels: impl Iterator<Item = bool>) -> Mock {
    let expectations: Vec<Transaction> = levels
        .map(|high| Transaction::get(if high { State::High } else { State::Low }))
        .collect();
    Mock::new(&expectations)
}

struct Panel {
    board: Board<Mock>,
    pins: Vec<Mock>,
}

impl Panel {
    /// Knob 1 on S1/S2 of port B, with optional S3 button levels.
    fn knob(phases: &[(bool, bool)], s3: Option<&[bool]>) -> Self {
        let a = expect(phases.iter().map(|p| p.0));
        let b = expect(phases.iter().map(|p| p.1));
        let s3 = s3.map(|levels| expect(levels.iter().copied()));

        let mut config = BoardConfig::default()
            .with_knob1()
            .with_switch(ButtonId::S4, Jumper::Open);
        if s3.is_none() {
            config = config.with_switch(ButtonId::S3, Jumper::Open);
        }

        let board = Board::new(&config, |pin| match pin {
            PinId { port: Port::B, bit: 0 } => a.clone(),
            PinId { port: Port::B, bit: 1 } => b.clone(),
            PinId { port: Port::B, bit: 2 } => s3.clone().expect("S3 not expected"),
            other => panic!("unexpected pin {:?}", other),
        })
        .unwrap();

        let mut pins = vec![a, b];
        pins.extend(s3);
        Panel { board, pins }
    }

    fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.board.tick().unwrap();
        }
    }

    fn done(mut self) {
        for pin in self.pins.iter_mut() {
            pin.done();
        }
    }
}

// Each code change needs four ticks to debounce with the default band
// once the phase has settled at the other edge.

#[test]
fn one_detent_up() {
    let phases = hold(&[(0, 1), (2, 4), (3, 4), (1, 4), (0, 4)]);
    let mut panel = Panel::knob(&phases, None);

    panel.run(phases.len() - 1);
    assert!(!panel.board.knob_changed(KnobId::Knob1));
    panel.run(1);
    assert!(panel.board.knob_changed(KnobId::Knob1));
    assert_eq!(panel.board.knob_read(KnobId::Knob1), Some(1));
    assert!(!panel.board.knob_changed(KnobId::Knob1));

    panel.done();
}

#[test]
fn two_detents_down() {
    let phases = hold(&[
        (0, 1),
        (1, 4),
        (3, 4),
        (2, 4),
        (0, 4),
        (1, 4),
        (3, 4),
        (2, 4),
        (0, 4),
    ]);
    let mut panel = Panel::knob(&phases, None);
    panel.board.knob_write(KnobId::Knob1, 10).unwrap();
    assert_eq!(panel.board.knob_read(KnobId::Knob1), Some(10));

    panel.run(phases.len());
    assert_eq!(panel.board.knob_read(KnobId::Knob1), Some(8));

    panel.done();
}

#[test]
fn reversal_mid_detent_keeps_position() {
    let phases = hold(&[(0, 1), (2, 4), (3, 4), (2, 4), (0, 4)]);
    let mut panel = Panel::knob(&phases, None);

    panel.run(phases.len());
    assert!(!panel.board.knob_changed(KnobId::Knob1));
    assert_eq!(panel.board.knob_read(KnobId::Knob1), Some(0));

    panel.done();
}

#[test]
fn short_glitch_on_a_phase_is_ignored() {
    // a bounces high for three ticks, one short of a settled change
    let phases = hold(&[(0, 1), (1, 3), (0, 4), (2, 4), (3, 4), (1, 4), (0, 4)]);
    let mut panel = Panel::knob(&phases, None);

    panel.run(phases.len());
    assert_eq!(panel.board.knob_read(KnobId::Knob1), Some(1));

    panel.done();
}

#[test]
fn button_beside_knob() {
    let phases = hold(&[(0, 1), (2, 4), (3, 4), (1, 4), (0, 4)]);
    let mut s3 = vec![true; 3];
    s3.extend([false; 4]);
    s3.resize(phases.len(), false);
    let mut panel = Panel::knob(&phases, Some(&s3));

    panel.run(3);
    assert_eq!(panel.board.pushbutton_read(ButtonId::S3, true), ButtonState::Released);
    panel.run(4);
    assert_eq!(panel.board.pushbutton_read(ButtonId::S3, false), ButtonState::Pressed);
    panel.run(phases.len() - 7);
    assert_eq!(panel.board.pushbutton_read(ButtonId::S3, true), ButtonState::Pressed);
    assert_eq!(panel.board.pushbutton_read(ButtonId::S1, true), ButtonState::Idle);
    assert_eq!(panel.board.knob_read(KnobId::Knob1), Some(1));

    panel.done();
}
