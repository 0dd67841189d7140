//! Control task
//!
//! Single owner of the cooking controller. Waits on either a panel action
//! or the control tick, runs it to completion, then logs whatever changed.
//! Probe conversions and RF transmissions block this task while they run.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Delay, Duration, Instant, Ticker};

use sousvide_core::state::Event;
use sousvide_core::{ControllerStatus, CookingController};
use sousvide_drivers::heater::RfSwitch;
use sousvide_drivers::sensor::Ds18b20;

use crate::channels::UI_ACTIONS;
use crate::onewire::FlexOneWire;
use crate::probe::LoggedProbe;

/// Controller wired to the board's probe and RF outlet
pub type Controller =
    CookingController<LoggedProbe<Ds18b20<FlexOneWire, Delay>>, RfSwitch<Output<'static>, Delay>>;

#[embassy_executor::task]
pub async fn control_task(mut controller: Controller, tick_interval_ms: u32) {
    info!("Control task started, tick every {} ms", tick_interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(tick_interval_ms as u64));
    let start = Instant::now();

    let mut last_status = controller.status();
    debug!("Status: {:?}", last_status);

    loop {
        let event = match select(UI_ACTIONS.receive(), ticker.next()).await {
            Either::First(action) => {
                trace!("Action: {:?}", action);
                controller.handle_action(action)
            }
            Either::Second(()) => controller.tick(start.elapsed().as_millis()),
        };

        if let Some(event) = event {
            log_event(event, &controller);
        }

        let status = controller.status();
        if status.phase != last_status.phase {
            info!("Phase {} -> {}", last_status.phase.label(), status.phase.label());
        }
        if status != last_status {
            debug!("Status: {:?}", status);
            last_status = status;
        }
    }
}

fn log_event(event: Event, controller: &Controller) {
    let status: ControllerStatus = controller.status();
    let params = status.parameters;

    match event {
        Event::ParametersConfirmed => info!(
            "Parameters confirmed: {}°C for {} min, heating",
            params.target_temp_c(),
            params.cook_time_min()
        ),
        Event::TargetReached => info!(
            "Target {}°C reached, holding for {} min",
            params.target_temp_c(),
            params.cook_time_min()
        ),
        Event::CookComplete => info!("Cooking complete after {} min", status.elapsed_min),
        Event::NewCycle => info!("New cycle, selecting parameters"),
        Event::SafetyTrip(reason) => error!(
            "SAFETY TRIP: {:?} (code {}), heater forced off, {} probe faults, {} RF frames sent",
            reason,
            reason.code(),
            controller.probe().faults(),
            controller.heater().transmissions()
        ),
    }
}
