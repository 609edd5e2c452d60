mod support;

mod tests {
    use embassy_time::Duration;
    use strip_controller::{
        Controller, ControllerConfig, Error, Pattern, PatternId, PatternTable, PhasePolicy,
        PixelStrip, Rgb,
    };

    use super::support::{MockPin, SharedStorage, TestStrip, test_strip};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    type TestController<const CAP: usize> =
        Controller<MockPin, MockPin, SharedStorage, TestStrip<10>, CAP>;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// 10ms sampling on both lines and no startup holdoff
    fn fast_config() -> ControllerConfig {
        ControllerConfig::new()
            .with_delays(ms(10), ms(10))
            .with_mode_startup_holdoff(ms(0))
    }

    struct Rig<const CAP: usize> {
        mode: MockPin,
        toggle: MockPin,
        storage: SharedStorage,
        controller: TestController<CAP>,
    }

    fn boot<const CAP: usize>(
        config: &ControllerConfig,
        table: PatternTable<CAP>,
        image: &[u8],
        now: u32,
    ) -> Rig<CAP> {
        let mode = MockPin::new(true);
        let toggle = MockPin::new(true);
        let storage = SharedStorage::new(image);
        let controller = Controller::new(
            config,
            table,
            mode.clone(),
            toggle.clone(),
            storage.clone(),
            test_strip::<10>(),
            now,
        )
        .unwrap();
        Rig {
            mode,
            toggle,
            storage,
            controller,
        }
    }

    fn boot_default(config: &ControllerConfig, image: &[u8]) -> Rig<16> {
        boot(
            config,
            PatternTable::with_default_patterns().unwrap(),
            image,
            0,
        )
    }

    fn wipe_table() -> PatternTable<4> {
        PatternTable::from_patterns(&[
            Pattern::Off { interval: ms(50) },
            Pattern::Wipe {
                color: GREEN,
                interval: ms(10),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_boot_blanks_strip_and_stores_default() {
        let rig = boot_default(&fast_config().with_brightness(100), &[0, 0, 0, 0]);
        let controller = &rig.controller;

        assert_eq!(controller.selection().pattern, PatternId::from_raw(2));
        assert_eq!(controller.selection().address, 0);
        assert_eq!(rig.storage.image(), vec![2, 0, 0, 0]);

        let output = controller.strip().output();
        assert_eq!(output.frames.len(), 1);
        assert_eq!(output.last(), &[BLACK; 10]);
        assert_eq!(controller.strip().brightness(), 100);
    }

    #[test]
    fn test_boot_restores_locked_pattern() {
        let rig = boot_default(&fast_config(), &[0, 0, 5, 0]);

        assert_eq!(rig.controller.selection().pattern.get(), 5);
        assert_eq!(rig.controller.selection().address, 2);
        assert_eq!(rig.storage.total_writes(), 0);
    }

    #[test]
    fn test_boot_rejects_bad_configuration() {
        let result = Controller::new(
            &fast_config(),
            PatternTable::<4>::new(),
            MockPin::new(true),
            MockPin::new(true),
            SharedStorage::new(&[0; 4]),
            test_strip::<10>(),
            0,
        );
        assert_eq!(result.err(), Some(Error::EmptyPatternTable));

        let result = Controller::new(
            &fast_config(),
            wipe_table(),
            MockPin::new(true),
            MockPin::new(true),
            SharedStorage::new(&[]),
            test_strip::<10>(),
            0,
        );
        assert_eq!(result.err(), Some(Error::ZeroCapacity));

        let result = Controller::new(
            &fast_config().with_default_pattern(PatternId::from_raw(3)),
            wipe_table(),
            MockPin::new(true),
            MockPin::new(true),
            SharedStorage::new(&[0; 4]),
            test_strip::<10>(),
            0,
        );
        assert_eq!(
            result.err(),
            Some(Error::InvalidDefaultPattern {
                pattern: 3,
                total: 2
            })
        );
    }

    #[test]
    fn test_first_frame_after_initial_interval() {
        let mut rig = boot_default(&fast_config(), &[0, 0, 0, 0]);

        assert!(!rig.controller.tick(49));
        assert!(rig.controller.tick(50));
        assert!(!rig.controller.tick(50));

        // rainbow_full asks for 1ms frames
        assert_eq!(rig.controller.frames().interval(), ms(1));
        assert!(rig.controller.tick(51));
        assert_eq!(rig.controller.strip().output().frames.len(), 3);
        assert_eq!(rig.controller.state().rendered, Some(PatternId::from_raw(2)));
    }

    #[test]
    fn test_mode_press_cycles_and_locks() {
        let mut rig = boot_default(&fast_config(), &[0, 0, 0, 0]);

        rig.controller.tick(10);
        rig.mode.set_low();
        rig.controller.tick(20);
        assert_eq!(rig.controller.selection().pattern.get(), 3);
        rig.mode.set_high();
        rig.controller.tick(30);
        assert_eq!(rig.controller.selection().address, 1);
        assert_eq!(rig.storage.image(), vec![0, 3, 0, 0]);

        assert!(rig.controller.tick(50));
        let shown = rig.controller.strip().output().last();
        assert_eq!(&shown[..4], &[RED, WHITE, BLUE, RED]);
        assert_eq!(rig.controller.frames().interval(), ms(50));
    }

    #[test]
    fn test_toggle_turns_strip_off_and_back_on() {
        let mut rig = boot_default(&fast_config(), &[0, 0, 3, 0]);

        rig.toggle.set_low();
        rig.controller.tick(10);
        assert_eq!(rig.controller.selection().pattern, PatternId::OFF);
        assert!(rig.controller.tick(50));
        assert_eq!(rig.controller.strip().output().last(), &[BLACK; 10]);

        rig.toggle.set_high();
        rig.controller.tick(60);
        assert_eq!(rig.controller.selection().pattern.get(), 3);
        assert!(rig.controller.tick(100));
        assert_eq!(rig.controller.strip().output().last()[0], RED);

        // nothing was locked while off
        assert_eq!(rig.storage.image(), vec![0, 0, 3, 0]);
    }

    #[test]
    fn test_mode_ignored_during_startup_holdoff() {
        let mut rig = boot_default(&ControllerConfig::new(), &[0, 0, 0, 0]);
        rig.mode.set_low();

        let mut now = 0;
        while now < 8000 {
            now += 100;
            if now == 8000 {
                break;
            }
            rig.controller.tick(now);
            assert_eq!(rig.controller.selection().pattern.get(), 2, "at {}", now);
        }

        rig.controller.tick(8000);
        assert_eq!(rig.controller.selection().pattern.get(), 3);
    }

    #[test]
    fn test_corrupted_lock_renders_error_pattern() {
        let mut rig = boot_default(&fast_config(), &[0, 0, 0, 0]);
        rig.storage.poke(0, 99);

        rig.toggle.set_low();
        rig.controller.tick(10);
        rig.toggle.set_high();
        rig.controller.tick(20);
        assert_eq!(rig.controller.selection().pattern.get(), 99);

        assert!(rig.controller.tick(50));
        assert_eq!(rig.controller.strip().output().last(), &[RED; 10]);
        assert_eq!(rig.controller.frames().interval(), ms(10));
        assert!(rig.controller.tick(60));
        assert_eq!(rig.controller.strip().output().last(), &[BLACK; 10]);
    }

    #[test]
    fn test_zero_pattern_renders_error_pattern() {
        let mut rig = boot_default(&fast_config(), &[0, 0, 0, 0]);
        rig.storage.poke(0, 0);

        rig.toggle.set_low();
        rig.controller.tick(10);
        rig.toggle.set_high();
        rig.controller.tick(20);

        assert!(rig.controller.tick(50));
        assert_eq!(rig.controller.strip().output().last(), &[RED; 10]);
    }

    /// Three wipe frames, toggle off for one frame, toggle back on
    fn wipe_resume_cursor(policy: PhasePolicy) -> usize {
        let config = fast_config().with_phase_policy(policy);
        let mut rig = boot(&config, wipe_table(), &[0, 0, 0, 0], 0);

        for now in [50, 60, 70] {
            assert!(rig.controller.tick(now));
        }
        assert_eq!(rig.controller.state().phase.wipe.cursor, 3);

        rig.toggle.set_low();
        assert!(rig.controller.tick(80));
        assert_eq!(rig.controller.state().rendered, Some(PatternId::OFF));

        rig.toggle.set_high();
        assert!(!rig.controller.tick(90));
        assert!(rig.controller.tick(130));
        assert_eq!(rig.controller.state().rendered, Some(PatternId::from_raw(2)));
        rig.controller.state().phase.wipe.cursor
    }

    #[test]
    fn test_phase_preserved_across_switch() {
        assert_eq!(wipe_resume_cursor(PhasePolicy::PreserveOnSwitch), 4);
    }

    #[test]
    fn test_phase_reset_on_switch() {
        assert_eq!(wipe_resume_cursor(PhasePolicy::ResetOnSwitch), 1);
    }

    #[test]
    fn test_zero_interval_pattern_still_paces() {
        let table = PatternTable::<2>::from_patterns(&[Pattern::Solid {
            color: WHITE,
            interval: ms(0),
        }])
        .unwrap();
        let config = fast_config().with_default_pattern(PatternId::OFF);
        let mut rig = boot(&config, table, &[0, 0], 0);

        assert!(rig.controller.tick(50));
        assert_eq!(rig.controller.frames().interval(), ms(1));
        assert!(!rig.controller.tick(50));
        assert!(rig.controller.tick(51));
    }

    #[test]
    fn test_ticks_across_clock_rollover() {
        let start = u32::MAX - 20;
        let mut rig = boot(&fast_config(), wipe_table(), &[0, 0, 0, 0], start);

        assert!(!rig.controller.tick(u32::MAX));
        assert!(!rig.controller.tick(28));
        assert!(rig.controller.tick(29));
        assert!(rig.controller.tick(39));
        assert_eq!(rig.controller.strip().pixel(2), Some(GREEN));
    }

    #[test]
    fn test_inputs_polled_between_frames() {
        let mut rig = boot_default(&fast_config(), &[0, 0, 0, 0]);

        // no frame is due yet, the press is still seen
        rig.mode.set_low();
        let result = rig.controller.poll_inputs(10);
        assert!(result.mode.is_some());
        assert_eq!(rig.controller.selection().pattern.get(), 3);
        assert_eq!(rig.controller.strip().output().frames.len(), 1);
        assert_eq!(rig.controller.table().total(), 13);
        assert_eq!(rig.controller.store().capacity(), 4);
        assert_eq!(rig.controller.strip_mut().pixel_count(), 10);
    }
}
