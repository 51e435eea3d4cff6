mod tests {
    use core::convert::Infallible;

    use embedded_hal::pwm::{ErrorType, SetDutyCycle};
    use myrtio_rgb_pwm::{DutyCyclePwm, OutputPolarity, PwmDriver, Rgb, scaled_value_at};

    #[derive(Debug, Default)]
    struct MockChannel {
        max: u16,
        duty: u16,
    }

    impl MockChannel {
        fn new(max: u16) -> Self {
            Self { max, duty: 0 }
        }
    }

    impl ErrorType for MockChannel {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockChannel {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    type Driver = PwmDriver<DutyCyclePwm<MockChannel, MockChannel, MockChannel>>;

    fn driver(max: u16, polarity: OutputPolarity) -> Driver {
        let mut driver = PwmDriver::new(DutyCyclePwm::new(
            MockChannel::new(max),
            MockChannel::new(max),
            MockChannel::new(max),
            polarity,
        ));
        driver.init();
        driver
    }

    fn duties(driver: &Driver) -> (u16, u16, u16) {
        let (r, g, b) = driver.hardware().channels();
        (r.duty, g.duty, b.duty)
    }

    #[test]
    fn test_disabled_holds_off_duty() {
        let mut driver = driver(1000, OutputPolarity::ActiveHigh);
        driver.set_color(Rgb::new(255, 255, 255));
        assert_eq!(duties(&driver), (0, 0, 0));
        assert!(!driver.hardware().is_connected());
    }

    #[test]
    fn test_enable_applies_scaled_values() {
        let mut driver = driver(1000, OutputPolarity::ActiveHigh);
        driver.set_color(Rgb::new(255, 128, 0));
        driver.enable();
        assert_eq!(duties(&driver), (1000, scaled_value_at(128, 1000), 0));

        driver.set_color(Rgb::new(0, 0, 255));
        assert_eq!(duties(&driver), (0, 0, 1000));
    }

    #[test]
    fn test_duty_follows_scaled_table() {
        let mut driver = driver(1000, OutputPolarity::ActiveHigh);
        driver.enable();
        for level in 0..=255u8 {
            driver.set_color(Rgb::new(level, level, level));
            let expected = scaled_value_at(level, 1000);
            assert_eq!(duties(&driver), (expected, expected, expected));
        }
    }

    #[test]
    fn test_full_range_channel_matches_table() {
        let mut driver = driver(u16::MAX, OutputPolarity::ActiveHigh);
        driver.enable();
        driver.set_color(Rgb::new(128, 200, 255));
        let compare = driver.compare_values();
        assert_eq!(duties(&driver), (compare.red, compare.green, compare.blue));
    }

    #[test]
    fn test_active_low_inverts() {
        let mut driver = driver(1000, OutputPolarity::ActiveLow);
        assert_eq!(duties(&driver), (1000, 1000, 1000));

        driver.set_color(Rgb::new(255, 0, 128));
        driver.enable();
        assert_eq!(
            duties(&driver),
            (0, 1000, 1000 - scaled_value_at(128, 1000))
        );

        driver.disable();
        assert_eq!(duties(&driver), (1000, 1000, 1000));
    }

    #[test]
    fn test_disable_then_enable_restores() {
        let mut driver = driver(255, OutputPolarity::ActiveHigh);
        driver.set_color(Rgb::new(255, 255, 255));
        driver.enable();
        driver.disable();
        assert_eq!(duties(&driver), (0, 0, 0));
        driver.enable();
        assert_eq!(duties(&driver), (255, 255, 255));
    }
}
