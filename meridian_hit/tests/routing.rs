// Copyright 2025 the Meridian Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing order, short-circuiting and hover enter/leave tracking.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use meridian_hit::{
    DispatchError, FeatureId, Geometry, HitTestRouter, HoverTarget, HoveredEvent, LayerStack,
    MemoryFeature, MemoryLayer, Modifiers, TappedEvent, UiEventReceiver,
};
use meridian_viewport::Viewport;
use proptest::prelude::*;

type Log = Rc<RefCell<Vec<String>>>;

struct Recorder {
    name: &'static str,
    log: Log,
    consume: bool,
}

impl Recorder {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
            consume: false,
        }
    }

    fn consuming(name: &'static str, log: &Log) -> Self {
        Self {
            consume: true,
            ..Self::new(name, log)
        }
    }

    fn record(&self, what: &str) {
        self.log.borrow_mut().push(format!("{}:{what}", self.name));
    }
}

impl UiEventReceiver for Recorder {
    fn on_single_tap(&mut self, event: &mut TappedEvent) {
        self.record("single");
        event.handled |= self.consume;
    }

    fn on_double_tap(&mut self, event: &mut TappedEvent) {
        self.record("double");
        event.handled |= self.consume;
    }

    fn on_hovered(&mut self, event: &mut HoveredEvent) {
        self.record("hovered");
        event.handled |= self.consume;
    }

    fn on_hovered_once(&mut self, _event: &mut HoveredEvent) {
        self.record("entered");
    }

    fn on_hover_stopped(&mut self, event: &mut HoveredEvent) {
        self.record("stopped");
        // The router resets this before entering the next target.
        event.handled = true;
    }
}

/// 100×100 pixels showing world 0..100 at resolution 1, so screen (x, y)
/// is world (x, 100 - y).
fn viewport() -> Viewport {
    let mut vp = Viewport::new();
    assert!(vp.try_initialize(100.0, 100.0, Some(Rect::new(0.0, 0.0, 100.0, 100.0))));
    vp
}

fn square(id: u64, receiver: Recorder) -> MemoryFeature {
    MemoryFeature::new(FeatureId(id), Geometry::Rect(Rect::new(40.0, 40.0, 60.0, 60.0)))
        .with_receiver(receiver)
}

fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

#[test]
fn top_layer_feature_wins_and_short_circuits() {
    let log = Log::default();
    let mut layers = LayerStack::new();
    let bottom = layers.push(
        MemoryLayer::new("bottom")
            .with_receiver(Recorder::new("L1", &log))
            .with_feature(square(1, Recorder::new("F1", &log))),
    );
    let top = layers.push(
        MemoryLayer::new("top")
            .with_receiver(Recorder::new("L2", &log))
            .with_feature(square(2, Recorder::consuming("F2", &log))),
    );
    let vp = viewport();
    let router = HitTestRouter::new();

    let mut tap = TappedEvent::new(Point::new(50.0, 50.0), 1, Modifiers::empty());
    router.dispatch_tap(&mut layers, &vp, &mut tap).unwrap();
    assert!(tap.handled);
    assert_eq!(tap.layer, Some(top));
    assert_eq!(tap.feature, Some(FeatureId(2)));
    assert_eq!(entries(&log), ["F2:single"]);
    assert_ne!(top, bottom);
}

#[test]
fn unhandled_tap_falls_through_every_layer() {
    let log = Log::default();
    let mut layers = LayerStack::new();
    let bottom = layers.push(
        MemoryLayer::new("bottom")
            .with_receiver(Recorder::new("L1", &log))
            .with_feature(square(1, Recorder::new("F1", &log))),
    );
    layers.push(MemoryLayer::<MemoryFeature>::new("top").with_receiver(Recorder::new("L2", &log)));
    let vp = viewport();
    let router = HitTestRouter::new();

    let mut tap = TappedEvent::new(Point::new(50.0, 50.0), 1, Modifiers::empty());
    router.dispatch_tap(&mut layers, &vp, &mut tap).unwrap();
    assert!(!tap.handled);
    assert_eq!(entries(&log), ["L2:single", "F1:single", "L1:single"]);
    // Attribution ends on the topmost hit.
    assert_eq!(tap.layer, Some(bottom));
    assert_eq!(tap.feature, Some(FeatureId(1)));
}

#[test]
fn layer_catches_taps_that_miss_its_features() {
    let log = Log::default();
    let mut layers = LayerStack::new();
    let id = layers.push(
        MemoryLayer::new("layer")
            .with_receiver(Recorder::consuming("L", &log))
            .with_feature(square(1, Recorder::new("F", &log))),
    );
    let vp = viewport();
    let router = HitTestRouter::new();

    let mut tap = TappedEvent::new(Point::new(5.0, 5.0), 1, Modifiers::empty());
    router.dispatch_tap(&mut layers, &vp, &mut tap).unwrap();
    assert!(tap.handled);
    assert_eq!((tap.layer, tap.feature), (Some(id), None));
    assert_eq!(entries(&log), ["L:single"]);
}

#[test]
fn tap_count_selects_double_tap_and_zero_fails() {
    let log = Log::default();
    let mut layers = LayerStack::new();
    layers.push(MemoryLayer::new("layer").with_feature(square(1, Recorder::new("F", &log))));
    let vp = viewport();
    let router = HitTestRouter::new();

    let mut tap = TappedEvent::new(Point::new(50.0, 50.0), 2, Modifiers::SHIFT);
    router.dispatch_tap(&mut layers, &vp, &mut tap).unwrap();
    assert_eq!(entries(&log), ["F:double"]);

    let mut bad = TappedEvent::new(Point::new(50.0, 50.0), 0, Modifiers::empty());
    assert_eq!(
        router.dispatch_tap(&mut layers, &vp, &mut bad),
        Err(DispatchError::InvalidTapCount { taps: 0 })
    );
    assert_eq!(entries(&log).len(), 1);
}

#[test]
fn hidden_layers_are_skipped() {
    let log = Log::default();
    let mut layers = LayerStack::new();
    layers.push(
        MemoryLayer::new("zoomed-in only")
            .with_visible_range(0.0, 0.5)
            .with_feature(square(1, Recorder::consuming("F", &log))),
    );
    let vp = viewport();
    let router = HitTestRouter::new();
    let mut tap = TappedEvent::new(Point::new(50.0, 50.0), 1, Modifiers::empty());
    router.dispatch_tap(&mut layers, &vp, &mut tap).unwrap();
    assert!(!tap.handled);
    assert!(entries(&log).is_empty());
    assert_eq!(router.hit_test(&layers, &vp, Point::new(50.0, 50.0)), None);
}

#[test]
fn hover_enters_once_and_leaves_once() {
    let log = Log::default();
    let mut layers = LayerStack::new();
    let id = layers.push(MemoryLayer::new("layer").with_feature(square(1, Recorder::new("F", &log))));
    let vp = viewport();
    let mut router = HitTestRouter::new();

    for _ in 0..2 {
        let mut hover = HoveredEvent::new(Point::new(50.0, 50.0), Modifiers::empty());
        router.dispatch_hover(&mut layers, &vp, &mut hover);
        assert!(!hover.handled);
    }
    assert_eq!(
        router.previous_hover(),
        Some(HoverTarget::Feature { layer: id, feature: FeatureId(1) })
    );

    let mut off = HoveredEvent::new(Point::new(5.0, 5.0), Modifiers::empty());
    router.dispatch_hover(&mut layers, &vp, &mut off);
    // The stopped handler's `handled` does not leak into the new target.
    assert!(!off.handled);
    assert_eq!(router.previous_hover(), Some(HoverTarget::Layer(id)));

    let log = entries(&log);
    assert_eq!(log.iter().filter(|e| *e == "F:entered").count(), 1);
    assert_eq!(log.iter().filter(|e| *e == "F:stopped").count(), 1);
    assert_eq!(log, ["F:entered", "F:hovered", "F:hovered", "F:stopped"]);
}

#[test]
fn hover_enters_feature_below_an_empty_layer() {
    let log = Log::default();
    let mut layers = LayerStack::new();
    let bottom = layers.push(
        MemoryLayer::new("bottom")
            .with_receiver(Recorder::new("L1", &log))
            .with_feature(square(1, Recorder::new("F", &log))),
    );
    let top = layers.push(MemoryLayer::<MemoryFeature>::new("top").with_receiver(Recorder::new("L2", &log)));
    let vp = viewport();
    let mut router = HitTestRouter::new();

    let mut on = HoveredEvent::new(Point::new(50.0, 50.0), Modifiers::empty());
    router.dispatch_hover(&mut layers, &vp, &mut on);
    assert_eq!(
        router.previous_hover(),
        Some(HoverTarget::Feature { layer: bottom, feature: FeatureId(1) })
    );
    assert_eq!((on.layer, on.feature), (Some(bottom), Some(FeatureId(1))));

    let mut off = HoveredEvent::new(Point::new(5.0, 5.0), Modifiers::empty());
    router.dispatch_hover(&mut layers, &vp, &mut off);
    assert!(!off.handled);
    assert_eq!(router.previous_hover(), Some(HoverTarget::Layer(top)));
    assert_eq!(
        entries(&log),
        [
            "F:entered",
            "L2:hovered",
            "F:hovered",
            "L1:hovered",
            "F:stopped",
            "L2:entered",
            "L2:hovered",
            "L1:hovered",
        ]
    );
}

#[test]
fn handled_hover_stops_before_lower_layers() {
    let log = Log::default();
    let mut layers = LayerStack::new();
    layers.push(MemoryLayer::new("bottom").with_feature(square(1, Recorder::new("F1", &log))));
    layers.push(MemoryLayer::new("top").with_feature(square(2, Recorder::consuming("F2", &log))));
    let vp = viewport();
    let mut router = HitTestRouter::new();

    let mut hover = HoveredEvent::new(Point::new(50.0, 50.0), Modifiers::CTRL);
    router.dispatch_hover(&mut layers, &vp, &mut hover);
    assert!(hover.handled);
    assert_eq!(entries(&log), ["F2:entered", "F2:hovered"]);
}

#[test]
fn removed_hover_target_is_dropped_silently() {
    let log = Log::default();
    let mut layers = LayerStack::new();
    let id = layers.push(MemoryLayer::new("layer").with_feature(square(1, Recorder::new("F", &log))));
    let vp = viewport();
    let mut router = HitTestRouter::new();

    let mut hover = HoveredEvent::new(Point::new(50.0, 50.0), Modifiers::empty());
    router.dispatch_hover(&mut layers, &vp, &mut hover);
    assert!(layers.remove(id).is_some());

    let mut again = HoveredEvent::new(Point::new(50.0, 50.0), Modifiers::empty());
    router.dispatch_hover(&mut layers, &vp, &mut again);
    assert_eq!(router.previous_hover(), None);
    assert_eq!(entries(&log), ["F:entered", "F:hovered"]);
}

proptest! {
    #[test]
    fn prop_hit_test_prefers_the_top_layer(x in 0.0f64..100.0, y in 0.0f64..100.0) {
        let log = Log::default();
        let mut layers = LayerStack::new();
        layers.push(MemoryLayer::new("bottom").with_feature(square(1, Recorder::new("F1", &log))));
        let top = layers.push(MemoryLayer::new("top").with_feature(square(2, Recorder::new("F2", &log))));
        let vp = viewport();
        let router = HitTestRouter::new();

        let world = vp.screen_to_world(Point::new(x, y));
        let inside = (40.0..=60.0).contains(&world.x) && (40.0..=60.0).contains(&world.y);
        match router.hit_test(&layers, &vp, Point::new(x, y)) {
            Some(hit) => {
                prop_assert_eq!(hit, (top, FeatureId(2)));
            }
            // Outside the square but within stroke reach still hits, so only
            // the interior is required to hit.
            None => {
                prop_assert!(!inside);
            }
        }
        prop_assert!(entries(&log).is_empty());
    }
}
