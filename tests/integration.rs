// SPDX-License-Identifier: MPL-2.0
use snapback::config::{self, Config, SlideSection, ZoomSection};
use snapback::gesture::Offset;
use snapback::onboarding::{
    flow, slide_confirm, FileFlagStore, FlagStore, OnboardingFlow, Screen, Silent,
    SlideConfirmController, ONBOARDING_KEY,
};
use snapback::pinch::{ZoomPanController, ZoomPhase, ZoomState};
use snapback::Error;
use tempfile::tempdir;

#[test]
fn slide_confirms_past_midpoint() {
    let mut slide = SlideConfirmController::new(300.0, 80.0).expect("valid geometry");
    slide.on_drag_changed(200.0);
    slide.on_drag_ended();

    assert_eq!(slide.handle_offset(), 220.0);
    assert!(slide.is_confirmed());
}

#[test]
fn slide_retracts_before_midpoint() {
    let mut slide = SlideConfirmController::new(300.0, 80.0).expect("valid geometry");
    slide.on_drag_changed(100.0);
    slide.on_drag_ended();

    assert_eq!(slide.handle_offset(), 0.0);
    assert!(!slide.is_confirmed());
}

#[test]
fn slide_rejects_track_narrower_than_handle() {
    assert!(matches!(
        SlideConfirmController::new(50.0, 80.0),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn double_tap_pair_returns_to_rest() {
    let mut zoom = ZoomPanController::default();
    zoom.on_double_tap();
    assert_eq!(zoom.phase(), ZoomPhase::Zoomed);
    zoom.on_drag_changed(Offset::new(-60.0, 15.0));
    zoom.on_double_tap();

    assert_eq!(zoom.state(), ZoomState::default());
}

#[test]
fn tuned_settings_drive_controllers() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings_path = dir.path().join("settings.toml");

    let tuned = Config {
        zoom: ZoomSection {
            max_scale: Some(3.0),
            scale_step: Some(0.5),
        },
        slide: SlideSection {
            handle_width: Some(60.0),
            track_padding: Some(40.0),
        },
    };
    config::save_to_path(&tuned, &settings_path).expect("Failed to write settings");
    let loaded = config::load_from_path(&settings_path).expect("Failed to load settings");

    let mut zoom = ZoomPanController::new(loaded.zoom_config().expect("valid zoom"));
    zoom.on_double_tap();
    assert_eq!(zoom.scale(), 3.0);
    zoom.on_scale_step_down();
    assert_eq!(zoom.scale(), 2.5);

    let slide = SlideConfirmController::from_layout(340.0, &loaded.slide_config().expect("valid slide"))
        .expect("valid layout");
    assert_eq!(slide.track_width(), 300.0);
    assert_eq!(slide.handle_width(), 60.0);
}

#[test]
fn onboarding_completion_survives_restart_of_the_process() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = Some(dir.path().to_path_buf());

    {
        let store = FileFlagStore::open(data_dir.clone()).expect("open store");
        let mut host =
            OnboardingFlow::new(store, Silent, 390.0, Default::default()).expect("valid layout");
        assert_eq!(host.screen(), Screen::Onboarding);

        host.handle(flow::Message::Slide(slide_confirm::Message::DragChanged(
            280.0,
        )));
        host.handle(flow::Message::Slide(slide_confirm::Message::DragEnded));
        assert_eq!(host.screen(), Screen::Home);
    }

    let store = FileFlagStore::open(data_dir.clone()).expect("reopen store");
    assert_eq!(store.get(ONBOARDING_KEY), Some(false));

    let mut host =
        OnboardingFlow::new(store, Silent, 390.0, Default::default()).expect("valid layout");
    assert_eq!(host.screen(), Screen::Home);

    host.handle(flow::Message::Restart);
    let store = FileFlagStore::open(data_dir).expect("reopen store");
    assert_eq!(store.get(ONBOARDING_KEY), Some(true));
}
