//! Heater actuator trait

/// Trait for the heater power switch
///
/// Implementations drive the physical switch (RF remote outlet, relay, SSR).
/// Every physical operation carries a settling delay which `set_on` and
/// `force_off` observe before returning.
pub trait HeaterActuator {
    /// Command the heater on or off
    ///
    /// Calling this with the state the actuator already holds must be a
    /// no-op that touches no hardware.
    fn set_on(&mut self, on: bool);

    /// Last commanded state
    fn is_on(&self) -> bool;

    /// Turn the heater off even if the actuator believes it already is
    ///
    /// Used on a safety trip, where the remembered state cannot be trusted.
    fn force_off(&mut self) {
        self.set_on(false);
    }
}
