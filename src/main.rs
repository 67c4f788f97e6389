#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use platino::application::Application;
    use platino::drivers::Console;
    use platino::hal::{mcu, start_tick_timer, InputLine, Usart};
    use platino::os::Shared;
    use platino::{Board, BoardConfig};

    // Written by the tick ISR, read by the main loop
    static BOARD: Shared<Option<Board<InputLine>>> = Shared::new(None);

    #[cfg_attr(feature = "atmega1284p", avr_device::interrupt(atmega1284p))]
    #[cfg_attr(
        all(feature = "atmega328p", not(feature = "atmega1284p")),
        avr_device::interrupt(atmega328p)
    )]
    fn TIMER0_COMPA() {
        BOARD.with(|board| {
            if let Some(board) = board {
                // Reading PINx cannot fail
                board.tick().ok();
            }
        });
    }

    #[avr_device::entry]
    fn main() -> ! {
        // Only fails if called twice
        let dp = match mcu::Peripherals::take() {
            Some(dp) => dp,
            None => loop {},
        };

        let mut console = Console::new(Usart::new(dp.USART0));
        console.write_line("Platino v0.1.0").ok();

        let config = BoardConfig::default().with_knob1();
        let mut board = match Board::new(&config, InputLine::new) {
            Ok(board) => board,
            Err(err) => {
                ufmt::uwrite!(console.writer(), "[ERR] {}\r\n", err).ok();
                loop {}
            }
        };
        board.describe(&mut console).ok();
        BOARD.replace(Some(board));

        let mut app = Application::default();
        app.start(&BOARD);

        start_tick_timer(&dp.TC0);
        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };
        console.info("Ready...").ok();

        loop {
            app.update(&BOARD, &mut console).ok();

            if let Some(byte) = console.writer().read_byte() {
                console.writer().write_byte(byte);
            }
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
