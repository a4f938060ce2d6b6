mod common;

mod tests {
    use myrtio_voice_light::color::{BLUE, GREEN, WHITE};
    use myrtio_voice_light::{
        Config, ConfigError, Controller, DEFAULT_CONFIG, DiagnosticsQueue, LightingState,
        NO_EVENT, NullSink, Rendered,
    };

    use crate::common::{
        FakeDelay, RecognizerCall, RecordingStrip, ScriptedRecognizer, VecSink, fixed_hues,
    };

    type TestController<K> =
        Controller<RecordingStrip, ScriptedRecognizer, FakeDelay, fn() -> u16, K, 128>;

    fn hue() -> u16 {
        1_000
    }

    fn start<K: myrtio_voice_light::DiagnosticsSink>(
        config: &Config,
        script: &[i16],
        sink: K,
    ) -> Result<TestController<K>, ConfigError> {
        Controller::start(
            config,
            RecordingStrip::new(),
            ScriptedRecognizer::new(script),
            FakeDelay::new(),
            hue as fn() -> u16,
            sink,
        )
    }

    #[test]
    fn test_startup_sequence() {
        let controller = start(&DEFAULT_CONFIG, &[], NullSink).unwrap();

        assert_eq!(controller.state().lighting, LightingState::Default);
        assert_eq!(controller.state().timer, None);

        let strip = controller.renderer().canvas().strip();
        assert_eq!(strip.config, Some(DEFAULT_CONFIG.strip));
        assert_eq!(strip.brightness, Some(50));
        // Blank frame first, then the white power-on frame
        assert_eq!(strip.commits.len(), 2);
        assert!(strip.commits[0].iter().all(|p| *p == Default::default()));
        assert_eq!(strip.commits[1], vec![WHITE; 93]);

        assert_eq!(
            controller.recognizer().calls,
            vec![
                RecognizerCall::Initialize,
                RecognizerCall::Train {
                    call_sign: "gallery".into(),
                    sentences: vec![
                        "turn red".into(),
                        "turn green".into(),
                        "turn blue".into(),
                        "troll me".into(),
                        "rainbow".into(),
                    ],
                },
                RecognizerCall::SetThreshold(20),
            ]
        );
        assert_eq!(controller.recognizer().polls, 0);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut controller = start(&DEFAULT_CONFIG, &[NO_EVENT, 2, NO_EVENT, 5, 3], NullSink).unwrap();

        let reports: Vec<_> = (0..5).map(|_| controller.cycle()).collect();
        let states: Vec<_> = reports.iter().map(|r| r.state).collect();
        assert_eq!(
            states,
            [
                LightingState::Default,
                LightingState::Green,
                LightingState::Green,
                LightingState::Default,
                LightingState::Blue,
            ]
        );

        assert_eq!(reports[0].rendered, Rendered::Rainbow { first_hue: 1_000 });
        assert_eq!(reports[1].rendered, Rendered::Solid(GREEN));
        assert!(reports[1].changed);
        assert!(!reports[2].changed);
        assert_eq!(reports[3].rendered, Rendered::Rainbow { first_hue: 1_000 });
        assert_eq!(reports[4].rendered, Rendered::Solid(BLUE));

        let commits = &controller.renderer().canvas().strip().commits;
        // Two startup frames plus one per cycle
        assert_eq!(commits.len(), 7);
        assert_eq!(commits[3], vec![GREEN; 93]);
        assert_eq!(commits[6], vec![BLUE; 93]);
    }

    #[test]
    fn test_troll_cycle_plays_asset_once() {
        let mut controller = start(&DEFAULT_CONFIG, &[4], NullSink).unwrap();
        let report = controller.cycle();
        assert_eq!(report.state, LightingState::Troll);
        assert_eq!(report.rendered, Rendered::AudioCue("troll.wav"));
        assert_eq!(controller.recognizer().played(), ["troll.wav"]);
        // Only the startup frames were committed
        assert_eq!(controller.renderer().canvas().strip().commits.len(), 2);
    }

    #[test]
    fn test_diagnostic_record_per_cycle() {
        let mut controller = start(&DEFAULT_CONFIG, &[1, 42, 5], VecSink::default()).unwrap();
        for _ in 0..4 {
            controller.cycle();
        }
        assert_eq!(
            controller.sink().records,
            [
                "state is: 1 response is: 1",
                "state is: -1 response is: 42",
                "state is: 0 response is: 5",
                "state is: -1 response is: 0",
            ]
        );
    }

    #[test]
    fn test_diagnostics_queue_sink() {
        let queue: DiagnosticsQueue<2, 48> = DiagnosticsQueue::new();
        let mut controller = start(&DEFAULT_CONFIG, &[2], &queue).unwrap();
        for _ in 0..3 {
            controller.cycle();
        }
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dropped(), 1);
        assert_eq!(queue.pop().unwrap().as_str(), "state is: 2 response is: 2");
    }

    #[test]
    fn test_rejects_misconfiguration_before_touching_hardware() {
        let mut config = DEFAULT_CONFIG;
        config.strip.pixel_count = 0;
        assert_eq!(start(&config, &[], NullSink).err(), Some(ConfigError::ZeroLength));

        let mut config = DEFAULT_CONFIG;
        config.strip.pixel_count = 200;
        assert_eq!(
            start(&config, &[], NullSink).err(),
            Some(ConfigError::TooLong {
                requested: 200,
                capacity: 128
            })
        );

        let mut config = DEFAULT_CONFIG;
        config.voice.threshold = 1;
        assert_eq!(
            start(&config, &[], NullSink).err(),
            Some(ConfigError::ThresholdOutOfRange(1))
        );
    }

    #[test]
    fn test_primitives_run_through_renderer_canvas() {
        let mut controller = start(&DEFAULT_CONFIG, &[], NullSink).unwrap();
        let canvas = controller.renderer_mut().canvas_mut();
        myrtio_voice_light::effect::theater_chase(
            canvas,
            GREEN,
            myrtio_voice_light::Duration::from_millis(50),
        );
        assert_eq!(canvas.delay().total_ms(), 1_500);
        assert_eq!(canvas.strip().commits.len(), 2 + 30);
    }

    #[test]
    fn test_fixed_hues_helper_cycles() {
        let mut hues = fixed_hues(&[1, 2]);
        assert_eq!([hues(), hues(), hues()], [1, 2, 1]);
    }
}
