use super::*;

use crossbeam_channel::{bounded, Receiver};

fn sink() -> (EventSink, Receiver<PageEvent>) {
    let (tx, rx) = bounded(16);
    (EventSink::new(tx), rx)
}

#[test]
fn scroll_listeners_hear_every_scroll_until_removed() {
    let viewport = SimulatedViewport::new();
    let (sink, rx) = sink();
    let id = viewport.add_listener(sink);

    viewport.scroll_to(10);
    viewport.scroll_to(10);
    viewport.scroll_to(90);
    let offsets: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        offsets,
        vec![
            PageEvent::Scrolled { offset_y: 10 },
            PageEvent::Scrolled { offset_y: 10 },
            PageEvent::Scrolled { offset_y: 90 },
        ]
    );

    viewport.remove_listener(id);
    viewport.scroll_to(200);
    assert_eq!(viewport.listener_count(), 0);
    assert_eq!(viewport.scroll_y(), 200);
    assert!(rx.try_recv().is_err());
}

#[test]
fn observer_reports_first_ratio_then_only_threshold_crossings() {
    let viewport = SimulatedViewport::new();
    let (sink, rx) = sink();
    viewport.observe(0.3, sink);

    for ratio in [0.1, 0.2, 0.35, 0.9, 0.25, 0.0] {
        viewport.set_skills_ratio(ratio);
    }

    let reported: Vec<_> = rx
        .try_iter()
        .map(|event| match event {
            PageEvent::SkillsIntersection { ratio } => ratio,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(reported, vec![0.1, 0.35, 0.25]);
}

#[test]
fn observe_reports_current_ratio_immediately() {
    let viewport = SimulatedViewport::new();
    viewport.set_skills_ratio(0.6);

    let (sink, rx) = sink();
    viewport.observe(0.3, sink);
    assert_eq!(
        rx.try_recv().expect("initial report"),
        PageEvent::SkillsIntersection { ratio: 0.6 }
    );

    viewport.set_skills_ratio(0.8);
    assert!(rx.try_recv().is_err());
}

#[test]
fn disconnected_observer_is_silent() {
    let viewport = SimulatedViewport::new();
    let (sink, rx) = sink();
    let id = viewport.observe(0.3, sink);
    viewport.disconnect(id);

    viewport.set_skills_ratio(1.0);
    assert_eq!(viewport.observer_count(), 0);
    assert!(rx.try_recv().is_err());
}

#[test]
fn posting_to_a_dropped_inbox_is_harmless() {
    let viewport = SimulatedViewport::new();
    let (sink, rx) = sink();
    viewport.add_listener(sink);
    drop(rx);

    viewport.scroll_to(50);
    assert_eq!(viewport.scroll_y(), 50);
}
