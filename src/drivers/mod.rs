pub mod console;
pub mod debouncer;
pub mod pushbutton;
pub mod rotary_encoder;

pub use console::Console;
pub use debouncer::{Band, ButtonState, Debouncer};
pub use pushbutton::Pushbutton;
pub use rotary_encoder::QuadratureDecoder;
