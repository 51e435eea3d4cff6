//! In-memory model of the two PWM timers
//!
//! Mirrors the register state of the real board (red = counter 1 output A,
//! green = counter 1 output B, blue = counter 2 output A) so the driver can
//! be exercised on the host.

use super::{OutputPolarity, PinLevel, PwmHardware};
use crate::color::Channel;

/// Counting mode of a simulated timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterMode {
    /// Reset state, the counter is not clocked
    #[default]
    Stopped,
    /// Counts up to top and back down, producing center-aligned pulses
    PhaseCorrect,
}

/// One of the two timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    /// Drives red (output A) and green (output B)
    First,
    /// Drives blue (output A)
    Second,
}

impl Counter {
    pub const ALL: [Counter; 2] = [Counter::First, Counter::Second];

    /// Timer whose compare output drives a channel
    pub const fn of(channel: Channel) -> Self {
        match channel {
            Channel::Red | Channel::Green => Counter::First,
            Channel::Blue => Counter::Second,
        }
    }

    const fn index(self) -> usize {
        match self {
            Counter::First => 0,
            Counter::Second => 1,
        }
    }
}

/// Register state of one 16-bit timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimTimer {
    pub mode: CounterMode,
    pub top: u16,
    pub compare_a: u16,
    pub compare_b: u16,
    pub outputs_connected: bool,
}

/// What a pin is currently driving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutput {
    /// Output detached from the timer, pin held at a fixed level
    Idle(PinLevel),
    /// Timer waveform with the given on-time in compare units
    Pwm { duty: u16 },
}

/// Simulated timer pair
#[derive(Debug, Clone)]
pub struct SimulatedTimers {
    timers: [SimTimer; 2],
    polarity: OutputPolarity,
    idle_level: PinLevel,
    writes: usize,
}

impl SimulatedTimers {
    /// Create timers in their reset state
    ///
    /// Pins float at the active level of the LEDs until configured, like
    /// undriven pins on a freshly reset board.
    pub const fn new(polarity: OutputPolarity) -> Self {
        let idle_level = match polarity.inactive_level() {
            PinLevel::Low => PinLevel::High,
            PinLevel::High => PinLevel::Low,
        };
        Self {
            timers: [
                SimTimer {
                    mode: CounterMode::Stopped,
                    top: 0,
                    compare_a: 0,
                    compare_b: 0,
                    outputs_connected: false,
                },
                SimTimer {
                    mode: CounterMode::Stopped,
                    top: 0,
                    compare_a: 0,
                    compare_b: 0,
                    outputs_connected: false,
                },
            ],
            polarity,
            idle_level,
            writes: 0,
        }
    }

    /// Register state of a timer
    pub const fn timer(&self, counter: Counter) -> &SimTimer {
        &self.timers[counter.index()]
    }

    pub const fn polarity(&self) -> OutputPolarity {
        self.polarity
    }

    /// Number of register writes performed so far
    pub const fn write_count(&self) -> usize {
        self.writes
    }

    /// Compare register value of a channel
    pub const fn compare(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Red => self.timers[0].compare_a,
            Channel::Green => self.timers[0].compare_b,
            Channel::Blue => self.timers[1].compare_a,
        }
    }

    /// What the pin of a channel is driving
    pub const fn pin_output(&self, channel: Channel) -> PinOutput {
        let timer = self.timer(Counter::of(channel));
        if timer.outputs_connected {
            PinOutput::Pwm {
                duty: self.compare(channel),
            }
        } else {
            PinOutput::Idle(self.idle_level)
        }
    }

    /// Whether the LED of a channel emits any light
    pub const fn is_lit(&self, channel: Channel) -> bool {
        match self.pin_output(channel) {
            PinOutput::Pwm { duty } => duty > 0,
            PinOutput::Idle(level) => !matches!(
                (level, self.polarity.inactive_level()),
                (PinLevel::Low, PinLevel::Low) | (PinLevel::High, PinLevel::High)
            ),
        }
    }

    fn compare_mut(&mut self, channel: Channel) -> &mut u16 {
        match channel {
            Channel::Red => &mut self.timers[0].compare_a,
            Channel::Green => &mut self.timers[0].compare_b,
            Channel::Blue => &mut self.timers[1].compare_a,
        }
    }
}

impl Default for SimulatedTimers {
    fn default() -> Self {
        Self::new(OutputPolarity::default())
    }
}

impl PwmHardware for SimulatedTimers {
    fn configure(&mut self, top: u16) {
        // Pins first, so nothing lights up while the timers start
        self.idle_level = self.polarity.inactive_level();
        for timer in &mut self.timers {
            timer.outputs_connected = false;
            timer.compare_a = 0;
            timer.compare_b = 0;
            timer.top = top;
            timer.mode = CounterMode::PhaseCorrect;
        }
        self.writes += 1 + 5 * self.timers.len();
    }

    fn set_compare(&mut self, channel: Channel, value: u16) {
        *self.compare_mut(channel) = value;
        self.writes += 1;
    }

    fn connect_outputs(&mut self) {
        self.idle_level = self.polarity.inactive_level();
        for timer in &mut self.timers {
            timer.outputs_connected = true;
        }
        self.writes += 1 + self.timers.len();
    }

    fn disconnect_outputs(&mut self) {
        for timer in &mut self.timers {
            timer.outputs_connected = false;
        }
        self.idle_level = self.polarity.inactive_level();
        self.writes += self.timers.len() + 1;
    }
}
