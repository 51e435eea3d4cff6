//! PWM output driver
//!
//! Owns the current color and the timer hardware. Every update that touches
//! more than one register runs inside a critical section, so an interrupt
//! handler never observes compare values from two different colors or one
//! counter routed while the other is not.

#[cfg(feature = "log")]
use esp_println::println;

use crate::color::{BLACK, Channel, Rgb};
use crate::hal::{PWM_TOP, PwmHardware};
use crate::table::CompareValues;

/// Lifecycle state of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    /// Hardware not configured yet, only `init` is meaningful
    #[default]
    Uninitialized,
    /// Timers running, pins held at their inactive level
    Disabled,
    /// Timers running and routed to the pins
    Enabled,
}

/// Perceptual-brightness RGB PWM driver
pub struct PwmDriver<H: PwmHardware> {
    hardware: H,
    state: DriverState,
    color: Rgb,
    compare: CompareValues,
}

impl<H: PwmHardware> PwmDriver<H> {
    /// Take ownership of the timer hardware
    pub const fn new(hardware: H) -> Self {
        Self {
            hardware,
            state: DriverState::Uninitialized,
            color: BLACK,
            compare: CompareValues {
                red: 0,
                green: 0,
                blue: 0,
            },
        }
    }

    /// Configure the timers
    ///
    /// Both counters run phase-correct with the same top, so all channels
    /// share frequency and phase. Compare registers are zeroed and nothing is
    /// output until [`enable`](Self::enable) is called.
    ///
    /// Must run with interrupts disabled. An interrupt between the two
    /// counter setups leaves the timers out of sync.
    pub fn init(&mut self) {
        self.hardware.configure(PWM_TOP);
        self.color = BLACK;
        self.compare = CompareValues::default();
        self.state = DriverState::Disabled;
        #[cfg(feature = "log")]
        println!("[PwmDriver.init] timers configured, top = {}", PWM_TOP);
    }

    /// Route the PWM signals to the pins
    pub fn enable(&mut self) {
        if self.state == DriverState::Uninitialized {
            #[cfg(feature = "log")]
            println!("[PwmDriver.enable] ignored, driver is not initialized");
            return;
        }
        critical_section::with(|_| self.hardware.connect_outputs());
        self.state = DriverState::Enabled;
    }

    /// Detach the PWM signals from the pins and drive them inactive
    ///
    /// The timers keep running, so a later [`enable`](Self::enable) resumes
    /// with the current color.
    pub fn disable(&mut self) {
        if self.state == DriverState::Uninitialized {
            #[cfg(feature = "log")]
            println!("[PwmDriver.disable] ignored, driver is not initialized");
            return;
        }
        critical_section::with(|_| self.hardware.disconnect_outputs());
        self.state = DriverState::Disabled;
    }

    /// Output a color
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
        let compare = CompareValues::from_color(color);
        #[cfg(feature = "log")]
        println!(
            "[PwmDriver.set_color] {:?} -> ({}, {}, {})",
            color, compare.red, compare.green, compare.blue
        );
        self.apply(compare);
    }

    /// Color currently being output
    pub const fn get_color(&self) -> Rgb {
        self.color
    }

    pub const fn state(&self) -> DriverState {
        self.state
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self.state, DriverState::Enabled)
    }

    /// Compare values last written to the hardware
    pub const fn compare_values(&self) -> CompareValues {
        self.compare
    }

    /// Read access to the hardware, e.g. for inspection
    pub const fn hardware(&self) -> &H {
        &self.hardware
    }

    /// Stop managing the hardware and give it back
    pub fn release(self) -> H {
        self.hardware
    }

    /// Write all three compare registers as one update
    fn apply(&mut self, compare: CompareValues) {
        critical_section::with(|_| {
            for channel in Channel::ALL {
                self.hardware.set_compare(channel, compare.get(channel));
            }
        });
        self.compare = compare;
    }
}
