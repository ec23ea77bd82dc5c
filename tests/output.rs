mod tests {
    use rand::rngs::mock::StepRng;
    use smart_leds::{RGB8, SmartLedsWrite};
    use sparkle_strip::{BASE_COLOR, OutputDriver, Rgb, Simulation, SmartLedsOutput};

    #[derive(Default)]
    struct FakeStrip {
        written: Vec<RGB8>,
        fail: bool,
    }

    impl SmartLedsWrite for FakeStrip {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.written = iterator.into_iter().map(Into::into).collect();
            Ok(())
        }
    }

    #[test]
    fn test_adapter_forwards_frame() {
        let mut output = SmartLedsOutput::new("fake", FakeStrip::default());
        assert_eq!(output.name(), "fake");
        assert!(output.is_ready());

        let frame = [Rgb::new(1, 2, 3), BASE_COLOR];
        assert_eq!(OutputDriver::write(&mut output, &frame), Ok(()));
        assert_eq!(output.into_inner().written, frame);
    }

    #[test]
    fn test_adapter_reports_errors() {
        let strip = FakeStrip {
            fail: true,
            ..FakeStrip::default()
        };
        let mut output = SmartLedsOutput::new("fake", strip);
        assert_eq!(OutputDriver::write(&mut output, &[BASE_COLOR]), Err(()));
    }

    #[test]
    fn test_simulation_drives_smart_leds() {
        let output = SmartLedsOutput::new("fake", FakeStrip::default());
        let mut simulation =
            Simulation::<SmartLedsOutput<FakeStrip>, StepRng, 12>::start(
                output,
                StepRng::new(0x0000_0105, 0),
            )
            .unwrap();
        assert!(simulation.tick().frame_pushed);
        assert!(simulation.tick().frame_pushed);
        assert_eq!(simulation.frame().len(), 12);
    }
}
