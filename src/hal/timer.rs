use super::mcu::TC0;
use crate::config::TIMER0_COMPARE;

/// Starts Timer0 as the sampling tick source.
///
/// CTC mode with a /64 prescaler fires `TIMER0_COMPA` once every
/// `TICK_PERIOD_US` at 16MHz. The handler must call `Board::tick`.
pub fn start_tick_timer(tc0: &TC0) {
    tc0.tccr0a.write(|w| w.wgm0().ctc());
    tc0.ocr0a.write(|w| unsafe { w.bits(TIMER0_COMPARE) });
    tc0.tcnt0.write(|w| unsafe { w.bits(0) });
    tc0.tccr0b.write(|w| w.cs0().prescale_64());
    tc0.timsk0.write(|w| w.ocie0a().set_bit());
}
