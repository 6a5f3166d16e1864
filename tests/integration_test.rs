use hotplate::{
    ButtonStyle, DynSource, FeedState, PanelConfig, PanelController, RecordedSourceReader,
    SampleSource, SourceReader, TemperatureSource, UiMode, SAMPLE_TEMPERATURES,
};
use anyhow::Result;
use chrono::NaiveTime;
use std::env;
use std::fs;
use std::io::Write;
use std::time::{Duration, Instant};

fn at(minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(10, minute, second).unwrap()
}

#[test]
fn test_reflow_always_yields_twenty_fresh_inputs() {
    let mut panel = PanelController::default();
    assert_eq!(panel.profile().input_count(), 0);

    panel.select_reflow();
    for point in panel.profile_mut().points_mut() {
        point.set_point = "200".to_string();
        point.time = "60".to_string();
    }

    panel.select_reflow();
    let placeholders = panel.profile().placeholders();
    assert_eq!(placeholders.len(), 20);
    for i in 1..=10 {
        assert_eq!(placeholders[(i - 1) * 2], format!("Set Point {}", i));
        assert_eq!(placeholders[(i - 1) * 2 + 1], format!("Time {}", i));
    }
    assert!(panel
        .profile()
        .points()
        .iter()
        .all(|p| p.set_point.is_empty() && p.time.is_empty()));
}

#[test]
fn test_mode_switch_visibility_and_single_active_button() {
    let mut panel = PanelController::default();

    panel.select_reflow();
    panel.select_heat();
    let mode = panel.mode();
    assert!(mode.mode_options_visible());
    assert!(mode.heat_options_visible());
    assert!(!mode.reflow_options_visible());
    assert!(mode.is_active(UiMode::Heat));
    assert!(!mode.is_active(UiMode::Reflow));

    panel.select_reflow();
    let mode = panel.mode();
    assert!(mode.reflow_options_visible());
    assert!(!mode.heat_options_visible());
    assert!(mode.is_active(UiMode::Reflow));
    assert!(!mode.is_active(UiMode::Heat));
}

#[test]
fn test_power_toggle_parity() {
    let mut panel = PanelController::default();
    for _ in 0..4 {
        panel.toggle_power();
    }
    assert_eq!(panel.power().label(), "On");
    assert_eq!(panel.power().style(), ButtonStyle::Success);

    panel.toggle_power();
    assert_eq!(panel.power().label(), "Off");
    assert_eq!(panel.power().style(), ButtonStyle::Danger);
}

#[test]
fn test_feed_emits_samples_in_order_despite_jitter() {
    let mut panel = PanelController::default();
    let t0 = Instant::now();
    panel.start(t0);

    // Frames arrive at uneven spacing, sometimes several per interval
    let mut now = t0;
    let steps_ms = [300, 750, 40, 1200, 999, 1, 1600, 500, 500, 2000, 10, 990, 1005, 3000, 1000, 1000];
    for (i, step) in steps_ms.iter().cycle().take(200).enumerate() {
        now += Duration::from_millis(*step);
        panel.tick(now, &at(2, (i % 60) as u32));
    }

    assert_eq!(panel.feed_state(), FeedState::Stopped);
    assert_eq!(panel.series().len(), 10);
    assert_eq!(panel.series().values().collect::<Vec<_>>(), SAMPLE_TEMPERATURES.to_vec());
}

#[test]
fn test_point_labels_use_wall_clock() {
    let mut panel = PanelController::default();
    let t0 = Instant::now();
    panel.start(t0);

    panel.tick(t0 + Duration::from_secs(1), &at(4, 5));
    panel.tick(t0 + Duration::from_secs(2), &at(4, 45));
    panel.tick(t0 + Duration::from_secs(3), &at(4, 45));

    let labels: Vec<&str> = panel.series().labels().collect();
    assert_eq!(labels, vec!["4:05", "4:45", "4:45"]);
}

#[test]
fn test_no_points_after_tenth_and_timer_cancelled() {
    let mut panel = PanelController::default();
    let t0 = Instant::now();
    panel.start(t0);

    for s in 1..=10 {
        panel.tick(t0 + Duration::from_secs(s), &at(0, s as u32));
    }
    assert_eq!(panel.series().len(), 10);
    assert_eq!(panel.time_until_next_point(t0 + Duration::from_secs(10)), None);

    for s in 11..=3600 {
        assert!(panel.tick(t0 + Duration::from_secs(s), &at(0, (s % 60) as u32)).is_none());
    }
    assert_eq!(panel.series().len(), 10);
    assert_eq!(panel.feed_state(), FeedState::Stopped);
}

#[test]
fn test_mode_and_power_do_not_affect_feed() {
    let mut panel = PanelController::default();
    let t0 = Instant::now();
    panel.start(t0);

    panel.tick(t0 + Duration::from_secs(1), &at(1, 1));
    panel.select_reflow();
    panel.toggle_power();
    panel.select_heat();
    panel.tick(t0 + Duration::from_secs(2), &at(1, 2));

    assert_eq!(panel.series().values().collect::<Vec<_>>(), vec![100.0, 105.0]);
    assert_eq!(panel.feed_state(), FeedState::Running);
}

#[test]
fn test_custom_source_and_interval() {
    let config = PanelConfig { sample_interval_ms: 250, ..PanelConfig::default() };
    let source = DynSource::Sample(SampleSource::new(vec![50.0, 60.0, 70.0]));
    let mut panel = PanelController::with_source(config, source);
    let t0 = Instant::now();
    panel.start(t0);

    assert!(panel.tick(t0 + Duration::from_millis(249), &at(0, 0)).is_none());
    for i in 1..=3 {
        panel.tick(t0 + Duration::from_millis(250 * i), &at(0, 0));
    }
    assert_eq!(panel.series().values().collect::<Vec<_>>(), vec![50.0, 60.0, 70.0]);
    assert_eq!(panel.feed_state(), FeedState::Stopped);
}

#[test]
fn test_read_plain_recording() -> Result<()> {
    let path = env::temp_dir().join("hotplate_plain_recording.json");
    fs::write(&path, r#"{"samples": [25.0, 80.5, 150.0, 217.0]}"#)?;

    let mut source = RecordedSourceReader::new().read(path.to_str().unwrap())?;
    assert_eq!(source.name(), "hotplate_plain_recording.json");
    let values: Vec<f64> = std::iter::from_fn(|| source.next_value()).collect();
    assert_eq!(values, vec![25.0, 80.5, 150.0, 217.0]);
    assert!(source.is_exhausted());

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_read_brotli_recording() -> Result<()> {
    let path = env::temp_dir().join("hotplate_compressed_recording.json.br");
    {
        let file = fs::File::create(&path)?;
        let mut writer = brotli::CompressorWriter::new(file, 4096, 9, 22);
        writer.write_all(b"[100, 105, 110]")?;
        writer.flush()?;
    }

    let source = RecordedSourceReader::new().read(path.to_str().unwrap())?;
    let mut panel = PanelController::default();
    let t0 = Instant::now();
    panel.replace_source(source, t0);
    for s in 1..=3 {
        panel.tick(t0 + Duration::from_secs(s), &at(0, 0));
    }
    assert_eq!(panel.series().values().collect::<Vec<_>>(), vec![100.0, 105.0, 110.0]);
    assert_eq!(panel.feed_state(), FeedState::Stopped);

    fs::remove_file(&path)?;
    Ok(())
}

#[test]
fn test_read_invalid_recording_reports_context() -> Result<()> {
    let path = env::temp_dir().join("hotplate_bad_recording.json");
    fs::write(&path, "[]")?;

    let err = RecordedSourceReader::new()
        .read(path.to_str().unwrap())
        .unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Invalid recording"));
    assert!(message.contains("no samples"));

    fs::remove_file(&path)?;
    Ok(())
}
