#![no_std]

pub mod color;
pub mod driver;
pub mod hal;
pub mod shared;
pub mod table;

pub use color::{Channel, Rgb};
pub use driver::{DriverState, PwmDriver};
pub use hal::{DutyCyclePwm, OutputPolarity, PWM_TOP, PinLevel, PwmHardware, SimulatedTimers};
pub use shared::{AccessError, SharedPwm};
pub use table::{CompareValues, PWM_TABLE, rescale, scaled_value_at, value_at};
