//! Build script for sousvide-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates machine.toml at compile time
//! - Generates the board configuration constant and pin mapping

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sousvide_core::config::{ConfigError, HardwareConfig};

fn main() {
    setup_linker();
    let config = load_config();
    generate_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = out_dir();

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate machine.toml
fn load_config() -> HardwareConfig {
    println!("cargo:rerun-if-changed=machine.toml");

    let config_path = Path::new("machine.toml");

    if !config_path.exists() {
        fail(
            "ERROR: machine.toml not found!",
            &[
                "The firmware requires a machine.toml board description.".to_string(),
                "Create one in the sousvide-firmware directory.".to_string(),
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("ERROR: Failed to read machine.toml", &[e.to_string()]),
    };

    let config: HardwareConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "ERROR: Invalid machine.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    if let Err(errors) = config.validate() {
        let lines = errors.iter().map(describe).collect::<Vec<_>>();
        fail("ERROR: machine.toml validation failed", &lines);
    }

    println!("cargo:warning=machine.toml validated successfully");
    config
}

/// Human-readable description of a validation error
fn describe(error: &ConfigError) -> String {
    match *error {
        ConfigError::InvalidPin(pin) => format!("GPIO{} does not exist (0-29)", pin),
        ConfigError::DuplicatePin(pin) => format!("GPIO{} is assigned more than once", pin),
        ConfigError::NotAnAdcPin(pin) => {
            format!("keypad.adc_pin: GPIO{} is not an ADC input (26-29)", pin)
        }
        ConfigError::InvalidResolution(bits) => {
            format!("probe.resolution_bits: {} (must be 9-12)", bits)
        }
        ConfigError::InvalidAdcBits(bits) => format!("keypad.adc_bits: {} (must be 8-16)", bits),
        ConfigError::InvalidTickInterval(ms) => {
            format!("tick_interval_ms: {} (must be 100-60000)", ms)
        }
        ConfigError::InvalidSwitchTiming => "rf_switch: timings must be non-zero".to_string(),
        ConfigError::InvalidDebounce => {
            "keypad: debounce_samples and poll_interval_ms must be non-zero".to_string()
        }
    }
}

/// Write `$OUT_DIR/machine_config.rs`
///
/// The generated file holds the `MACHINE` constant and the
/// `take_board_pins!` macro that moves the configured GPIOs out of the
/// peripherals struct.
fn generate_config(config: &HardwareConfig) {
    let rf = &config.rf_switch;
    let probe = &config.probe;
    let keypad = &config.keypad;

    let source = format!(
        "// Generated by build.rs from machine.toml

pub const MACHINE: HardwareConfig = HardwareConfig {{
    tick_interval_ms: {tick},
    rf_switch: RfSwitchHwConfig {{
        address_pin: {address},
        channel_pin: {channel},
        modulator_pin: {modulator},
        encode_settle_ms: {settle},
        transmit_ms: {transmit},
    }},
    probe: ProbeHwConfig {{
        data_pin: {data},
        resolution_bits: {resolution},
    }},
    keypad: KeypadHwConfig {{
        adc_pin: {adc},
        adc_bits: {adc_bits},
        debounce_samples: {debounce},
        poll_interval_ms: {poll},
    }},
}};

macro_rules! take_board_pins {{
    ($p:ident) => {{
        crate::board::BoardPins {{
            rf_address: embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_{address}),
            rf_channel: embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_{channel}),
            rf_modulator: embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_{modulator}),
            probe_data: embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_{data}),
            keypad: embassy_rp::adc::Channel::new_pin($p.PIN_{adc}, embassy_rp::gpio::Pull::None),
        }}
    }};
}}
",
        tick = config.tick_interval_ms,
        address = rf.address_pin,
        channel = rf.channel_pin,
        modulator = rf.modulator_pin,
        settle = rf.encode_settle_ms,
        transmit = rf.transmit_ms,
        data = probe.data_pin,
        resolution = probe.resolution_bits,
        adc = keypad.adc_pin,
        adc_bits = keypad.adc_bits,
        debounce = keypad.debounce_samples,
        poll = keypad.poll_interval_ms,
    );

    fs::write(out_dir().join("machine_config.rs"), source).unwrap();
}

fn out_dir() -> PathBuf {
    PathBuf::from(env::var("OUT_DIR").unwrap())
}

/// Abort the build with a boxed report
fn fail(title: &str, lines: &[String]) -> ! {
    let mut report = String::new();
    report.push_str("\n╔══════════════════════════════════════════════════════════════════╗\n");
    report.push_str(&format!("║  {:<64}║\n", title));
    report.push_str("╠══════════════════════════════════════════════════════════════════╣\n");
    for line in lines {
        report.push_str(&format_error_line(line));
        report.push('\n');
    }
    report.push_str("╚══════════════════════════════════════════════════════════════════╝\n");
    panic!("{}", report);
}

/// Format one error line with box drawing
fn format_error_line(line: &str) -> String {
    let truncated = if line.chars().count() > 62 {
        format!("{}...", line.chars().take(59).collect::<String>())
    } else {
        line.to_string()
    };
    format!("║  {:<64}║", truncated)
}
