mod tests {
    use rand::rngs::mock::StepRng;
    use sparkle_strip::pattern::{BRIGHTNESS_RANGE, DELAY_RANGE, RandomRange, TICKS_RANGE};
    use sparkle_strip::{BASE_COLOR, Rgb, Sparkle, SpawnParams, color::hue_coefficient};

    #[test]
    fn test_ranges() {
        assert_eq!(TICKS_RANGE.last(), 7);
        assert_eq!(DELAY_RANGE.last(), 14);
        assert_eq!(BRIGHTNESS_RANGE.last(), 0x1fe);
        assert_eq!(RandomRange::new(3, 15).reduce(12), 3);
        assert_eq!(RandomRange::new(3, 15).reduce(11), 14);
    }

    #[test]
    fn test_from_raw_byte_fields() {
        assert_eq!(
            SpawnParams::from_raw(0x0000_0105),
            SpawnParams {
                ticks: 6,
                delay: 4,
                brightness: 32
            }
        );
        assert_eq!(
            SpawnParams::from_raw(0),
            SpawnParams {
                ticks: 1,
                delay: 3,
                brightness: 32
            }
        );
        assert_eq!(
            SpawnParams::from_raw(0xFFFF_FFFF),
            SpawnParams {
                ticks: 4,
                delay: 6,
                brightness: 423
            }
        );
    }

    #[test]
    fn test_from_raw_upper_bounds() {
        let raw = (478 << 16) | (11 << 8) | 6;
        assert_eq!(
            SpawnParams::from_raw(raw),
            SpawnParams {
                ticks: 7,
                delay: 14,
                brightness: 510
            }
        );
    }

    #[test]
    fn test_from_raw_stays_in_range() {
        let mut rng = StepRng::new(0, 0x0101_0101 + 7919);
        for _ in 0..10_000 {
            let params = SpawnParams::draw(&mut rng);
            assert!((1..=7).contains(&params.ticks));
            assert!((3..=14).contains(&params.delay));
            assert!((32..=510).contains(&params.brightness));
        }
    }

    #[test]
    fn test_draw_uses_one_value() {
        let mut rng = StepRng::new(0x105, 0);
        assert_eq!(SpawnParams::draw(&mut rng), SpawnParams::from_raw(0x105));
    }

    #[test]
    fn test_spawn_sparkle() {
        let params = SpawnParams {
            ticks: 3,
            delay: 4,
            brightness: 32,
        };
        let sparkle = Sparkle::spawn(params, hue_coefficient(BASE_COLOR));
        assert_eq!(sparkle.center_color, Rgb::new(21, 0, 32));
        // (32 + 0x16) / 2
        assert_eq!(sparkle.side_color, Rgb::new(18, 0, 27));
        assert_eq!(sparkle.period_ticks, 3);
        assert_eq!(sparkle.remaining_ticks, 3);
        assert_eq!(sparkle.position, 0);
        assert!(sparkle.active);
    }
}
