//! Temperature probe trait

/// Errors that can occur when reading the probe
///
/// The controller treats every variant the same way as an out-of-bounds
/// reading: it trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeError {
    /// No device answered on the bus
    Disconnected,
    /// Data read back from the sensor failed its checksum
    CrcMismatch,
    /// Sensor returned its power-on register value; no conversion ran
    PowerOnReset,
    /// Reading outside the sensor's measurable range
    OutOfRange,
}

/// Trait for the water temperature probe
///
/// Reads block for the sensor's conversion time.
pub trait TemperatureProbe {
    /// Read the current temperature in degrees Celsius
    ///
    /// Returns a fixed-point value with 0.1°C resolution.
    /// For example, 59.2°C is returned as 592.
    fn read_celsius_x10(&mut self) -> Result<i16, ProbeError>;

    /// Read the current temperature in whole degrees Celsius (truncated)
    fn read_celsius(&mut self) -> Result<i16, ProbeError> {
        self.read_celsius_x10().map(|t| t / 10)
    }
}
