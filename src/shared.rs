//! Interrupt-safe holder for a [`PwmDriver`].
//!
//! Lets a driver live in a `static` so the main loop and interrupt handlers
//! can both drive the LEDs. Every call runs in a single critical section,
//! so two callers at different interrupt priorities can never interleave
//! their updates.
//!
//! ```ignore
//! static PWM: SharedPwm<Board> = SharedPwm::new();
//!
//! PWM.install(PwmDriver::new(board));
//! PWM.init()?;
//! PWM.set_color(Rgb::new(255, 0, 0))?;
//! PWM.enable()?;
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

use crate::color::Rgb;
use crate::driver::PwmDriver;
use crate::hal::PwmHardware;

/// Error returned when the driver cannot be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// No driver has been installed yet.
    NotInstalled,
    /// The driver is already borrowed by an enclosing [`SharedPwm::with`] call.
    Busy,
}

/// A driver shared between execution contexts.
pub struct SharedPwm<H: PwmHardware> {
    inner: Mutex<RefCell<Option<PwmDriver<H>>>>,
}

impl<H: PwmHardware> SharedPwm<H> {
    /// Create an empty holder.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install a driver, returning the previous one if any.
    ///
    /// # Panics
    ///
    /// Panics when called from inside a [`with`](Self::with) closure.
    pub fn install(&self, driver: PwmDriver<H>) -> Option<PwmDriver<H>> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(driver)))
    }

    /// Remove the installed driver.
    ///
    /// # Panics
    ///
    /// Panics when called from inside a [`with`](Self::with) closure.
    pub fn take(&self) -> Option<PwmDriver<H>> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }

    /// Whether a driver is installed.
    pub fn is_installed(&self) -> bool {
        // Only an installed driver is ever lent out, so a busy cell means installed
        critical_section::with(|cs| match self.inner.borrow(cs).try_borrow() {
            Ok(driver) => driver.is_some(),
            Err(_) => true,
        })
    }

    /// Run `f` on the installed driver inside a critical section.
    ///
    /// Returns `Err(AccessError::NotInstalled)` if there is no driver and
    /// `Err(AccessError::Busy)` if `f` of an enclosing call re-enters the
    /// same holder.
    pub fn with<R>(&self, f: impl FnOnce(&mut PwmDriver<H>) -> R) -> Result<R, AccessError> {
        critical_section::with(|cs| {
            let mut driver = self
                .inner
                .borrow(cs)
                .try_borrow_mut()
                .map_err(|_| AccessError::Busy)?;
            driver.as_mut().map(f).ok_or(AccessError::NotInstalled)
        })
    }

    /// See [`PwmDriver::init`].
    pub fn init(&self) -> Result<(), AccessError> {
        self.with(PwmDriver::init)
    }

    /// See [`PwmDriver::enable`].
    pub fn enable(&self) -> Result<(), AccessError> {
        self.with(PwmDriver::enable)
    }

    /// See [`PwmDriver::disable`].
    pub fn disable(&self) -> Result<(), AccessError> {
        self.with(PwmDriver::disable)
    }

    /// See [`PwmDriver::set_color`].
    pub fn set_color(&self, color: Rgb) -> Result<(), AccessError> {
        self.with(|driver| driver.set_color(color))
    }

    /// See [`PwmDriver::get_color`].
    pub fn get_color(&self) -> Result<Rgb, AccessError> {
        self.with(|driver| driver.get_color())
    }
}

impl<H: PwmHardware> Default for SharedPwm<H> {
    fn default() -> Self {
        Self::new()
    }
}
