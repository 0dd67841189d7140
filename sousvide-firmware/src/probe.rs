//! Probe wrapper that logs every reading

use defmt::*;

use sousvide_core::traits::{ProbeError, TemperatureProbe};

/// Logs readings at trace level and faults as warnings
pub struct LoggedProbe<P> {
    inner: P,
    faults: u32,
}

impl<P> LoggedProbe<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, faults: 0 }
    }

    /// Failed reads since boot
    pub fn faults(&self) -> u32 {
        self.faults
    }
}

impl<P: TemperatureProbe> TemperatureProbe for LoggedProbe<P> {
    fn read_celsius_x10(&mut self) -> Result<i16, ProbeError> {
        let reading = self.inner.read_celsius_x10();
        match reading {
            Ok(t) => trace!("Probe: {}.{}°C", t / 10, (t % 10).abs()),
            Err(e) => {
                self.faults = self.faults.wrapping_add(1);
                warn!("Probe fault: {:?} ({} since boot)", e, self.faults);
            }
        }
        reading
    }
}
