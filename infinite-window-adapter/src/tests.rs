use crate::*;

use infinite_window::{Error, HeightSpec, InvalidConfig, InvalidHeightSpec};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec;
use std::vec::Vec;

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    (calls, move || {
        c.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn a_single_item_is_rejected() {
    let err = Controller::new(InfiniteOptions::new(200, 800), 1).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidHeightSpec(InvalidHeightSpec::TooFewItems { items: 1, min: 2 })
    );
}

#[test]
fn min_item_count_can_be_lowered_for_empty_lists() {
    let c = Controller::new(InfiniteOptions::new(200, 800).with_min_item_count(0), 0).unwrap();
    assert!(c.render_plan().window.is_empty());
}

#[test]
fn options_resolve_defaults_from_container_height() {
    let config = InfiniteOptions::new(200, 800).to_window_config().unwrap();
    assert_eq!(config.container_extent, 800);
    assert_eq!(config.preload_batch_size, 400);
    assert_eq!(config.preload_additional_extent, 800);
    assert_eq!(config.infinite_load_begin_offset, None);
    assert_eq!(config.scroll_quiet_ms, 150);

    let config = InfiniteOptions::new(200, 800)
        .with_preload_batch_size(100)
        .with_preload_additional_height(0)
        .with_infinite_load_begin_bottom_offset(50)
        .with_time_scroll_state_lasts_for_after_user_scrolls_ms(10)
        .to_window_config()
        .unwrap();
    assert_eq!(config.preload_batch_size, 100);
    assert_eq!(config.preload_additional_extent, 0);
    assert_eq!(config.infinite_load_begin_offset, Some(50));
    assert_eq!(config.scroll_quiet_ms, 10);
}

#[test]
fn invalid_options_are_rejected() {
    assert_eq!(
        Controller::new(InfiniteOptions::new(200, 0), 10).unwrap_err(),
        Error::InvalidConfig(InvalidConfig::ZeroContainerExtent)
    );

    let zero_batch = InfiniteOptions::new(200, 800).with_preload_batch_size(0);
    assert_eq!(
        Controller::new(zero_batch, 10).unwrap_err(),
        Error::InvalidConfig(InvalidConfig::ZeroPreloadBatchSize)
    );

    // one height per item, but one item short
    assert_eq!(
        Controller::new(InfiniteOptions::new(vec![1, 2, 3], 100), 4).unwrap_err(),
        Error::InvalidHeightSpec(InvalidHeightSpec::LengthMismatch {
            heights: 3,
            items: 4
        })
    );
}

#[test]
fn render_plan_reports_container_height() {
    let c = Controller::new(InfiniteOptions::new(200, 800), 2).unwrap();
    assert_eq!(c.render_plan().container_height, 800);
}

#[test]
fn renders_all_children_when_no_hiding_is_required() {
    let w = Controller::new(InfiniteOptions::new(200, 800), 2)
        .unwrap()
        .render_plan()
        .window;
    assert_eq!(w.top_spacer, 0);
    assert_eq!(w.bottom_spacer, 0);
    assert_eq!(w.range(), 0..2);
}

#[test]
fn renders_a_prefix_when_some_children_are_hidden() {
    let w = Controller::new(InfiniteOptions::new(200, 800), 10)
        .unwrap()
        .render_plan()
        .window;
    assert_eq!(w.top_spacer, 0);
    assert_eq!(w.bottom_spacer, 800);
    assert_eq!(w.range(), 0..6);
}

#[test]
fn preload_options_widen_the_rendered_prefix() {
    let c = Controller::new(
        InfiniteOptions::new(200, 800).with_preload_additional_height(1000),
        10,
    )
    .unwrap();
    assert_eq!(c.render_plan().window.range(), 0..7);

    let c = Controller::new(InfiniteOptions::new(200, 800).with_preload_batch_size(800), 10)
        .unwrap();
    assert_eq!(c.render_plan().window.range(), 0..8);
}

#[test]
fn scrolling_moves_the_window() {
    let mut c = Controller::new(InfiniteOptions::new(200, 800), 20).unwrap();
    let w = c.on_scroll(1500, 0).window;
    assert_eq!(w.top_spacer, 400);
    assert_eq!(w.bottom_spacer, 1600);
    assert_eq!(w.range(), 2..12);
}

#[test]
fn variable_heights_are_supported() {
    let heights = vec![
        20, 20, 160, 100, 50, 150, 25, 25, 25, 25, 125, 80, 75, 20, 150, 250, 100,
    ];
    let count = heights.len();
    let c = Controller::new(InfiniteOptions::new(heights, 420), count).unwrap();
    let w = c.render_plan().window;
    assert_eq!(w.top_spacer, 0);
    assert_eq!(w.bottom_spacer, 675);
    assert!((1..11).all(|i| w.contains(i)));
}

#[test]
fn infinite_load_is_not_requested_far_from_the_bottom() {
    let (calls, on_load) = counter();
    let mut c = Controller::new(
        InfiniteOptions::new(200, 800)
            .with_infinite_load_begin_bottom_offset(1000)
            .with_on_infinite_load(Some(on_load)),
        20,
    )
    .unwrap();

    let plan = c.on_scroll(300, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!plan.show_loading_indicator);
}

#[test]
fn infinite_load_is_requested_once_past_the_bottom_offset() {
    let (calls, on_load) = counter();
    let mut c = Controller::new(
        InfiniteOptions::new(200, 800)
            .with_infinite_load_begin_bottom_offset(1000)
            .with_on_infinite_load(Some(on_load)),
        20,
    )
    .unwrap();

    let plan = c.on_scroll(3600, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(plan.show_loading_indicator);

    c.on_scroll(3600, 10);
    c.on_scroll(3700, 20);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // new content arrives
    c.set_item_count(40).unwrap();
    c.notify_load_complete();
    assert!(!c.render_plan().show_loading_indicator);
    assert_eq!(c.item_count(), 40);

    c.on_scroll(3700, 30);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    c.on_scroll(7600, 40);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn is_infinite_loading_option_overrides_load_state() {
    let (calls, on_load) = counter();
    let options = InfiniteOptions::new(200, 800)
        .with_infinite_load_begin_bottom_offset(1000)
        .with_is_infinite_loading(Some(true))
        .with_on_infinite_load(Some(on_load));
    let mut c = Controller::new(options, 20).unwrap();
    assert!(c.render_plan().show_loading_indicator);

    c.on_scroll(3600, 0);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    c.update_options(|o| o.is_infinite_loading = Some(false))
        .unwrap();
    assert!(!c.render_plan().show_loading_indicator);
    c.on_scroll(3600, 10);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    c.set_is_infinite_loading(false);
    assert!(!c.render_plan().show_loading_indicator);
}

#[test]
fn pointer_events_are_suppressed_while_scrolling() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut c = Controller::new(
        InfiniteOptions::new(200, 800)
            .with_time_scroll_state_lasts_for_after_user_scrolls_ms(10_000)
            .with_on_scrolling_change(Some(move |s: bool| sink.lock().unwrap().push(s))),
        20,
    )
    .unwrap();
    assert!(!c.render_plan().suppress_pointer_events);
    assert_eq!(c.pending_timer(), None);

    assert!(c.on_scroll(100, 1_000).suppress_pointer_events);
    assert!(c.on_scroll(200, 2_000).suppress_pointer_events);
    assert_eq!(c.pending_timer().map(|t| t.deadline_ms), Some(12_000));

    assert!(!c.tick(11_999));
    assert!(c.render_plan().suppress_pointer_events);
    assert!(c.tick(12_000));
    assert!(!c.render_plan().suppress_pointer_events);
    assert!(!c.tick(13_000));

    assert_eq!(*changes.lock().unwrap(), vec![true, false]);
}

#[test]
fn handle_scroll_sees_every_raw_offset() {
    let last = Arc::new(AtomicU64::new(0));
    let calls = Arc::new(AtomicUsize::new(0));
    let (l, n) = (Arc::clone(&last), Arc::clone(&calls));
    let mut c = Controller::new(
        InfiniteOptions::new(200, 800).with_handle_scroll(Some(move |offset: u64| {
            l.store(offset, Ordering::SeqCst);
            n.fetch_add(1, Ordering::SeqCst);
        })),
        20,
    )
    .unwrap();

    c.on_scroll(10, 0);
    c.on_scroll(99_999, 1);
    assert_eq!(last.load(Ordering::SeqCst), 99_999);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn rerendering_updates_the_height_model() {
    let options = InfiniteOptions::new(17, 450).with_infinite_load_begin_bottom_offset(1000);
    let mut c = Controller::new(options.clone(), 20).unwrap();
    assert_eq!(c.window().model().height_of(0), Some(17));
    assert_eq!(c.item_count(), 20);

    c.set_item_count(74).unwrap();
    assert_eq!(c.item_count(), 74);

    c.set_content(options.with_element_height(vec![10, 20, 30]), 3)
        .unwrap();
    assert_eq!(c.options().element_height, HeightSpec::Variable(vec![10, 20, 30]));
    assert!(!c.window().model().is_constant());
    assert_eq!(c.window().total_height(), 60);
}

#[test]
fn failed_reconfiguration_keeps_previous_state() {
    let mut c = Controller::new(InfiniteOptions::new(vec![10, 20, 30], 100), 3).unwrap();
    let before = c.render_plan();

    // per-item heights no longer match
    assert!(c.set_item_count(4).is_err());
    assert!(c.update_options(|o| o.container_height = 0).is_err());

    assert_eq!(c.render_plan(), before);
    assert_eq!(c.item_count(), 3);
    assert_eq!(c.options().container_height, 100);
}

#[test]
fn changing_container_height_recomputes_immediately() {
    let mut c = Controller::new(InfiniteOptions::new(200, 800), 20).unwrap();
    assert_eq!(c.render_plan().window.range(), 0..6);
    c.update_options(|o| o.container_height = 400).unwrap();
    // batch 200, margin 400: [0, 600)
    assert_eq!(c.render_plan().window.range(), 0..3);
    assert_eq!(c.render_plan().container_height, 400);
}
