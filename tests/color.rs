mod tests {
    use sparkle_strip::BASE_COLOR;
    use sparkle_strip::color::{Rgb, color_from_brightness, hue_coefficient, rgb_from_u32};

    #[test]
    fn test_hue_coefficient() {
        let coef = hue_coefficient(BASE_COLOR);
        assert!((coef - 15.0 / 22.0).abs() < 1e-6);
        assert_eq!(hue_coefficient(Rgb::new(10, 0, 10)), 1.0);
    }

    #[test]
    fn test_color_from_brightness_low() {
        assert_eq!(color_from_brightness(0, 0.5), Rgb::new(0, 0, 0));
        assert_eq!(color_from_brightness(100, 0.5), Rgb::new(50, 0, 100));
        assert_eq!(color_from_brightness(255, 0.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_color_from_brightness_truncates_red() {
        assert_eq!(color_from_brightness(3, 0.5), Rgb::new(1, 0, 3));
        assert_eq!(
            color_from_brightness(32, hue_coefficient(BASE_COLOR)),
            Rgb::new(21, 0, 32)
        );
    }

    #[test]
    fn test_color_from_brightness_high_ramps_green() {
        assert_eq!(color_from_brightness(256, 0.0), Rgb::new(0, 1, 255));
        assert_eq!(color_from_brightness(300, 0.5), Rgb::new(150, 45, 255));
        assert_eq!(color_from_brightness(511, 1.0), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_color_from_brightness_channels_clamped() {
        for coef in [0.0, 15.0 / 22.0, 1.0, 3.0] {
            for brightness in 0..=511u16 {
                let color = color_from_brightness(brightness, coef);
                assert_eq!(u16::from(color.b), brightness.min(255));
                if brightness <= 255 {
                    assert_eq!(color.g, 0);
                } else {
                    assert_eq!(u16::from(color.g), (brightness - 255).min(255));
                }
            }
        }
        assert_eq!(color_from_brightness(200, 3.0).r, 255);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x0F_0016), Rgb::new(0x0F, 0x00, 0x16));
        assert_eq!(BASE_COLOR, Rgb::new(0x0F, 0x00, 0x16));
    }
}
