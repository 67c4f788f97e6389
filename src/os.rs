//! Sharing state between the tick interrupt and foreground code.
//!
//! The timer ISR is the only caller of `Board::tick`. Everything the main
//! loop reads (knob positions, button states) is wider than one register
//! on AVR, so every access goes through [`Shared::with`] with interrupts
//! masked.
//!
//! On AVR the value lives in an `avr_device::interrupt::Mutex`, which only
//! hands out the cell against a critical-section token. Host builds have no
//! interrupts and keep a bare `RefCell`, so a host `Shared` is not `Sync`
//! and cannot be placed in a `static`.

use core::cell::RefCell;

#[cfg(target_arch = "avr")]
use avr_device::interrupt::{self, Mutex};

/// State shared between the ISR and the main loop.
pub struct Shared<T> {
    #[cfg(target_arch = "avr")]
    inner: Mutex<RefCell<T>>,
    #[cfg(not(target_arch = "avr"))]
    inner: RefCell<T>,
}

#[cfg(target_arch = "avr")]
impl<T> Shared<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Borrows the value with interrupts masked.
    ///
    /// Panics if called again from inside `f`.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        interrupt::free(|cs| f(&mut self.inner.borrow(cs).borrow_mut()))
    }

    pub fn replace(&self, value: T) -> T {
        interrupt::free(|cs| self.inner.borrow(cs).replace(value))
    }
}

#[cfg(not(target_arch = "avr"))]
impl<T> Shared<T> {
    pub const fn new(value: T) -> Self {
        Self {
            inner: RefCell::new(value),
        }
    }

    /// Borrows the value.
    ///
    /// Panics if called again from inside `f`.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    pub fn replace(&self, value: T) -> T {
        self.inner.replace(value)
    }
}
