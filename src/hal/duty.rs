//! [`PwmHardware`] on top of `embedded-hal` PWM channels
//!
//! For HALs that expose each output as a [`SetDutyCycle`] channel. The
//! timers must already run in a center-aligned mode with a shared period;
//! this adapter only moves duty cycles. Pin routing is emulated: while
//! disconnected every channel is held at its off duty.

use embedded_hal::pwm::SetDutyCycle;

use super::{OutputPolarity, PwmHardware};
use crate::color::Channel;
use crate::table::rescale;

/// Three `SetDutyCycle` channels acting as one RGB output
///
/// Errors returned by the channels are ignored; a failed write leaves the
/// previous duty in place.
pub struct DutyCyclePwm<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    red: R,
    green: G,
    blue: B,
    polarity: OutputPolarity,
    top: u16,
    compare: [u16; 3],
    connected: bool,
}

impl<R, G, B> DutyCyclePwm<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    pub const fn new(red: R, green: G, blue: B, polarity: OutputPolarity) -> Self {
        Self {
            red,
            green,
            blue,
            polarity,
            top: super::PWM_TOP,
            compare: [0; 3],
            connected: false,
        }
    }

    /// Give the channels back
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }

    /// Borrow the channels
    pub const fn channels(&self) -> (&R, &G, &B) {
        (&self.red, &self.green, &self.blue)
    }

    /// Whether the outputs are currently routed
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Map a compare value onto the duty range of a channel
    fn duty_for(&self, value: u16, max_duty: u16) -> u16 {
        let duty = rescale(value, self.top, max_duty);
        match self.polarity {
            OutputPolarity::ActiveHigh => duty,
            OutputPolarity::ActiveLow => max_duty - duty,
        }
    }

    const fn off_duty(&self, max_duty: u16) -> u16 {
        match self.polarity {
            OutputPolarity::ActiveHigh => 0,
            OutputPolarity::ActiveLow => max_duty,
        }
    }

    fn write(&mut self, channel: Channel, duty: Option<u16>) {
        // Register writes cannot fail at this layer; HAL errors are dropped
        match channel {
            Channel::Red => {
                let max = self.red.max_duty_cycle();
                let duty = duty.map_or(self.off_duty(max), |value| self.duty_for(value, max));
                let _ = self.red.set_duty_cycle(duty);
            }
            Channel::Green => {
                let max = self.green.max_duty_cycle();
                let duty = duty.map_or(self.off_duty(max), |value| self.duty_for(value, max));
                let _ = self.green.set_duty_cycle(duty);
            }
            Channel::Blue => {
                let max = self.blue.max_duty_cycle();
                let duty = duty.map_or(self.off_duty(max), |value| self.duty_for(value, max));
                let _ = self.blue.set_duty_cycle(duty);
            }
        }
    }
}

impl<R, G, B> PwmHardware for DutyCyclePwm<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    fn configure(&mut self, top: u16) {
        self.top = top;
        self.compare = [0; 3];
        self.connected = false;
        for channel in Channel::ALL {
            self.write(channel, None);
        }
    }

    fn set_compare(&mut self, channel: Channel, value: u16) {
        self.compare[channel.index()] = value;
        if self.connected {
            self.write(channel, Some(value));
        }
    }

    fn connect_outputs(&mut self) {
        self.connected = true;
        for channel in Channel::ALL {
            self.write(channel, Some(self.compare[channel.index()]));
        }
    }

    fn disconnect_outputs(&mut self) {
        self.connected = false;
        for channel in Channel::ALL {
            self.write(channel, None);
        }
    }
}
