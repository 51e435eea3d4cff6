mod tests {
    use myrtio_rgb_pwm::table::{CompareValues, PWM_TABLE, rescale, scaled_value_at, value_at};
    use myrtio_rgb_pwm::{Channel, Rgb};

    #[test]
    fn test_table_endpoints() {
        assert_eq!(PWM_TABLE.len(), 256);
        assert_eq!(value_at(0), 0);
        assert_eq!(value_at(255), 65535);
    }

    #[test]
    fn test_table_monotonic() {
        for level in 0..255u8 {
            assert!(
                value_at(level) <= value_at(level + 1),
                "table decreases at level {level}"
            );
        }
    }

    #[test]
    fn test_table_strictly_increasing_above_plateau() {
        for level in 128..255u8 {
            assert!(value_at(level) < value_at(level + 1));
        }
    }

    #[test]
    fn test_table_known_values() {
        assert_eq!(value_at(1), 1);
        assert_eq!(value_at(128), 267);
        assert_eq!(value_at(254), 62757);
    }

    #[test]
    fn test_scaled_value_at_full_range() {
        for level in 0..=255u8 {
            assert_eq!(scaled_value_at(level, u16::MAX), value_at(level));
        }
    }

    #[test]
    fn test_scaled_value_at_smaller_top() {
        for top in [1u16, 255, 1000, 4095, 40000] {
            assert_eq!(scaled_value_at(0, top), 0);
            assert_eq!(scaled_value_at(255, top), top);
            for level in 0..255u8 {
                assert!(scaled_value_at(level, top) <= scaled_value_at(level + 1, top));
            }
        }
        assert_eq!(scaled_value_at(128, 1000), 4);
        assert_eq!(scaled_value_at(0, 0), 0);
        assert_eq!(scaled_value_at(255, 0), 0);
    }

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(0, 1000, 255), 0);
        assert_eq!(rescale(1000, 1000, 255), 255);
        assert_eq!(rescale(500, 1000, 255), 128);
        assert_eq!(rescale(2000, 1000, 255), 255);
        assert_eq!(rescale(7, 7, 7), 7);
        assert_eq!(rescale(9, 7, 7), 7);
        assert_eq!(rescale(5, 0, 100), 0);
        assert_eq!(rescale(u16::MAX, u16::MAX, u16::MAX), u16::MAX);
    }

    #[test]
    fn test_scaled_value_at_is_rescaled_table() {
        for top in [255u16, 1000, 4095] {
            for level in 0..=255u8 {
                assert_eq!(
                    scaled_value_at(level, top),
                    rescale(value_at(level), u16::MAX, top)
                );
            }
        }
    }

    #[test]
    fn test_compare_values_from_color() {
        let compare = CompareValues::from_color(Rgb::new(255, 0, 128));
        assert_eq!(compare.get(Channel::Red), 65535);
        assert_eq!(compare.get(Channel::Green), 0);
        assert_eq!(compare.get(Channel::Blue), value_at(128));
    }

    #[test]
    fn test_compare_values_symmetric() {
        let compare = CompareValues::from_color(Rgb::new(128, 128, 128));
        for channel in Channel::ALL {
            assert_eq!(compare.get(channel), value_at(128));
        }
    }
}
