use ufmt::{uDisplay, uWrite};

/// Line-oriented log output over any `ufmt` writer, usually the UART.
pub struct Console<W> {
    writer: W,
}

impl<W: uWrite> Console<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), W::Error> {
        self.writer.write_str(s)
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), W::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    pub fn info(&mut self, msg: &str) -> Result<(), W::Error> {
        ufmt::uwrite!(self.writer, "[INF] {}\r\n", msg)
    }

    // Print formatted debug info
    pub fn debug<T: uDisplay + ?Sized>(&mut self, msg: &str, val: &T) -> Result<(), W::Error> {
        ufmt::uwrite!(self.writer, "[DBG] {}: {}\r\n", msg, val)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::convert::Infallible;

    /// Collects console output for assertions.
    #[derive(Default)]
    pub(crate) struct Capture(pub String);

    impl uWrite for Capture {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn lines_end_with_crlf() {
        let mut console = Console::new(Capture::default());
        console.write_line("Platino").unwrap();
        console.info("ready").unwrap();
        assert_eq!(console.into_inner().0, "Platino\r\n[INF] ready\r\n");
    }

    #[test]
    fn debug_formats_value() {
        let mut console = Console::new(Capture::default());
        console.debug("Knob 1", &-42i16).unwrap();
        console.debug("S2", "pressed").unwrap();
        assert_eq!(console.into_inner().0, "[DBG] Knob 1: -42\r\n[DBG] S2: pressed\r\n");
    }
}
