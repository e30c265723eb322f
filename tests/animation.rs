mod tests {
    use embassy_time::{Duration, Instant};
    use motion_saber::{AnimationEngine, RainbowEffect, Rgb, TriggerEvent, blend};

    const ACTIVE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const IDLE: Rgb = Rgb { r: 255, g: 0, b: 0 };

    fn trigger_at(millis: u64) -> TriggerEvent {
        TriggerEvent {
            at: Instant::from_millis(millis),
            active: ACTIVE,
        }
    }

    #[test]
    fn test_hit_fade_is_monotonic() {
        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        let trigger = trigger_at(1_000);

        // at the trigger instant the strip shows the active color
        engine.trigger_frame(&trigger, false, IDLE, Instant::from_millis(1_000));
        assert!(engine.frame().iter().all(|&c| c == ACTIVE));

        // halfway through the first second it has faded half way
        engine.trigger_frame(&trigger, false, IDLE, Instant::from_millis(1_500));
        let expected = blend(ACTIVE, IDLE, 0.5);
        assert!(engine.frame().iter().all(|&c| c == expected));

        // past one second the weight clamps and the strip rests at idle
        engine.trigger_frame(&trigger, false, IDLE, Instant::from_millis(3_000));
        assert!(engine.frame().iter().all(|&c| c == IDLE));
    }

    #[test]
    fn test_swing_fade_folds_around_midpoint() {
        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        let trigger = trigger_at(1_000);

        // a swing starts at idle, peaks at the active color at 0.5 s
        engine.trigger_frame(&trigger, true, IDLE, Instant::from_millis(1_000));
        assert!(engine.frame().iter().all(|&c| c == IDLE));

        engine.trigger_frame(&trigger, true, IDLE, Instant::from_millis(1_500));
        assert!(engine.frame().iter().all(|&c| c == ACTIVE));

        // and ramps back out symmetrically
        let expected = blend(ACTIVE, IDLE, 0.5);
        engine.trigger_frame(&trigger, true, IDLE, Instant::from_millis(1_750));
        assert!(engine.frame().iter().all(|&c| c == expected));
        engine.trigger_frame(&trigger, true, IDLE, Instant::from_millis(1_250));
        assert!(engine.frame().iter().all(|&c| c == expected));
    }

    #[test]
    fn test_fill_range_clamps_to_strip() {
        let mut engine: AnimationEngine<4> = AnimationEngine::new();
        engine.fill_range(2..10, IDLE);
        assert_eq!(engine.frame()[1], Rgb::new(0, 0, 0));
        assert_eq!(engine.frame()[2], IDLE);
        assert_eq!(engine.frame()[3], IDLE);

        // inverted range is a no-op
        engine.fill_range(3..1, ACTIVE);
        assert_eq!(engine.frame()[2], IDLE);
    }

    #[test]
    fn test_rainbow_spreads_and_cycles() {
        let mut rainbow = RainbowEffect::default().with_cycle_duration(Duration::from_millis(2_000));
        let mut frame = [Rgb::new(0, 0, 0); 10];

        rainbow.render(Instant::from_millis(500), &mut frame);
        // the wheel is spread across the strip
        assert!(frame.windows(2).any(|w| w[0] != w[1]));

        // one full cycle later the frame repeats
        let snapshot = frame;
        rainbow.render(Instant::from_millis(2_500), &mut frame);
        assert_eq!(frame, snapshot);
    }
}
