use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only run the unit and integration tests
    let target = env::var("TARGET").unwrap_or_default();
    if !target.contains("avr") {
        return;
    }

    let mcu = if env::var("CARGO_FEATURE_ATMEGA1284P").is_ok() {
        "atmega1284p"
    } else {
        "atmega328p"
    };
    println!("cargo:rustc-link-arg=-mmcu={}", mcu);

    println!("cargo:warning=Building Platino firmware for {} at 16MHz", mcu);
}
