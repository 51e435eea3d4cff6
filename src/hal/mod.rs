//! Hardware abstraction for the PWM timers
//!
//! The driver talks to the timers only through [`PwmHardware`], so the
//! correction table and the atomic update logic stay independent of the
//! concrete timer and pin layout.

pub mod duty;
pub mod sim;

use crate::color::Channel;

pub use duty::DutyCyclePwm;
pub use sim::SimulatedTimers;

/// Counter top shared by both timers (16-bit resolution)
pub const PWM_TOP: u16 = u16::MAX;

/// Logic level of an output pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// How the LEDs are wired to the output pins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputPolarity {
    /// LED lights up while the pin is high
    #[default]
    ActiveHigh,
    /// LED lights up while the pin is low (common anode)
    ActiveLow,
}

impl OutputPolarity {
    /// Pin level at which the LED is off
    pub const fn inactive_level(self) -> PinLevel {
        match self {
            OutputPolarity::ActiveHigh => PinLevel::Low,
            OutputPolarity::ActiveLow => PinLevel::High,
        }
    }
}

/// Two 16-bit counters driving three compare outputs
///
/// Implementations only write registers. Grouping writes so that interrupt
/// handlers never see them half-applied is up to the caller.
pub trait PwmHardware {
    /// Put both counters into phase-correct mode with the same `top`,
    /// zero every compare register and hold the pins at their inactive level
    fn configure(&mut self, top: u16);

    /// Write the compare register of a channel
    fn set_compare(&mut self, channel: Channel, value: u16);

    /// Route the compare-match outputs of both counters to the pins
    fn connect_outputs(&mut self);

    /// Detach the compare-match outputs of both counters and drive the pins
    /// to their inactive level. The counters keep running.
    fn disconnect_outputs(&mut self);
}
