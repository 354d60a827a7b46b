use super::*;

use std::time::Duration;

use shared::domain::{FormField, NavLabel};

use crate::{
    controller::{SubmitOutcome, TeardownPolicy},
    host::SimulatedViewport,
    snapshot::ContactPanel,
};

fn mount(
    config: ControllerConfig,
) -> (Arc<SimulatedViewport>, PageSession<TokioScheduler>) {
    let viewport = Arc::new(SimulatedViewport::new());
    let session = PageSession::mount_on_tokio(
        config,
        Arc::new(SiteContent::default()),
        HostCapabilities::from_viewport(viewport.clone()),
    )
    .expect("mount on test runtime");
    (viewport, session)
}

fn fill_form(session: &mut PageSession<TokioScheduler>) {
    for (field, value) in [
        (FormField::Name, "Jo"),
        (FormField::Email, "a@b.com"),
        (FormField::Message, "Hi"),
    ] {
        session.dispatch(PageEvent::FieldEdited {
            field,
            value: value.into(),
        });
    }
}

#[test]
fn mount_on_tokio_requires_a_runtime() {
    let viewport = Arc::new(SimulatedViewport::new());
    let result = PageSession::mount_on_tokio(
        ControllerConfig::default(),
        Arc::new(SiteContent::default()),
        HostCapabilities::from_viewport(viewport.clone()),
    );

    assert!(matches!(result, Err(ViewStateError::RuntimeUnavailable)));
    assert_eq!(viewport.listener_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn mount_subscribes_and_teardown_unsubscribes() {
    let (viewport, mut session) = mount(ControllerConfig::default());
    assert!(session.is_mounted());
    assert_eq!(viewport.listener_count(), 1);
    assert_eq!(viewport.observer_count(), 1);

    session.teardown();
    session.teardown();
    assert!(!session.is_mounted());
    assert_eq!(viewport.listener_count(), 0);
    assert_eq!(viewport.observer_count(), 0);

    viewport.scroll_to(300);
    assert_eq!(session.pump(), 0);
    assert!(!session.controller().is_scrolled());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_session_unsubscribes() {
    let (viewport, session) = mount(ControllerConfig::default());
    drop(session);

    assert_eq!(viewport.listener_count(), 0);
    assert_eq!(viewport.observer_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn host_signals_apply_on_pump() {
    let (viewport, mut session) = mount(ControllerConfig::default());

    viewport.scroll_to(20);
    viewport.scroll_to(100);
    viewport.set_skills_ratio(0.1);
    assert!(!session.controller().is_scrolled());

    assert_eq!(session.pump(), 3);
    assert_eq!(session.controller().scroll().offset_y(), 100);
    assert!(session.controller().is_scrolled());
    assert!(!session.controller().skills_in_view());

    viewport.set_skills_ratio(0.45);
    session.pump();
    assert!(session.controller().skills_in_view());

    viewport.set_skills_ratio(0.0);
    session.pump();
    assert!(session.controller().skills_in_view());
}

#[tokio::test(start_paused = true)]
async fn section_already_visible_at_mount_reveals_on_first_pump() {
    let viewport = Arc::new(SimulatedViewport::new());
    viewport.set_skills_ratio(0.8);

    let mut session = PageSession::mount_on_tokio(
        ControllerConfig::default(),
        Arc::new(SiteContent::default()),
        HostCapabilities::from_viewport(viewport.clone()),
    )
    .expect("mount");
    assert_eq!(session.pump(), 1);
    assert!(session.controller().skills_in_view());
}

#[tokio::test(start_paused = true)]
async fn sent_clears_after_four_seconds() {
    let (_viewport, mut session) = mount(ControllerConfig::default());
    fill_form(&mut session);
    assert_eq!(session.controller_mut().submit(), SubmitOutcome::Accepted);
    assert_eq!(session.snapshot().contact_panel, ContactPanel::Confirmation);

    tokio::time::sleep(Duration::from_millis(3_999)).await;
    session.pump();
    assert!(session.controller().sent());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(session.pump(), 1);
    assert!(!session.controller().sent());
    assert_eq!(session.snapshot().contact_panel, ContactPanel::Form);
}

#[tokio::test(start_paused = true)]
async fn sent_clears_at_exactly_four_seconds_once_settled() {
    let (_viewport, mut session) = mount(ControllerConfig::default());
    fill_form(&mut session);
    assert_eq!(
        session.dispatch(PageEvent::SubmitClicked),
        Some(SubmitOutcome::Accepted)
    );

    tokio::time::sleep(Duration::from_millis(4_000)).await;
    assert_eq!(session.settle().await, 1);
    assert!(!session.controller().sent());
    assert_eq!(session.controller().form().pending_reset(), None);
}

#[tokio::test(start_paused = true)]
async fn scroll_burst_between_pumps_keeps_every_event_and_the_reset() {
    let (viewport, mut session) = mount(ControllerConfig::default());
    fill_form(&mut session);
    session.dispatch(PageEvent::SubmitClicked);

    for offset_y in 0..5_000 {
        viewport.scroll_to(offset_y);
    }

    tokio::time::sleep(Duration::from_millis(4_000)).await;
    assert_eq!(session.settle().await, 5_001);
    assert_eq!(session.controller().scroll().offset_y(), 4_999);
    assert!(!session.controller().sent());
}

#[tokio::test(start_paused = true)]
async fn dispatch_reports_submit_outcome_only() {
    let (_viewport, mut session) = mount(ControllerConfig::default());
    assert_eq!(
        session.dispatch(PageEvent::SubmitClicked),
        Some(SubmitOutcome::Incomplete)
    );
    assert_eq!(session.dispatch(PageEvent::NavClicked(NavLabel::Skills)), None);
}

#[tokio::test(start_paused = true)]
async fn pending_reset_survives_teardown_by_default() {
    let (_viewport, mut session) = mount(ControllerConfig::default());
    fill_form(&mut session);
    session.dispatch(PageEvent::SubmitClicked);
    session.teardown();

    tokio::time::sleep(Duration::from_millis(4_001)).await;
    session.pump();
    assert!(!session.controller().sent());
}

#[tokio::test(start_paused = true)]
async fn cancel_policy_stops_the_pending_reset() {
    let (_viewport, mut session) = mount(ControllerConfig {
        teardown: TeardownPolicy::CancelPendingReset,
        ..ControllerConfig::default()
    });
    fill_form(&mut session);
    session.dispatch(PageEvent::SubmitClicked);
    session.teardown();
    assert_eq!(session.controller().scheduler().pending(), 0);

    tokio::time::sleep(Duration::from_millis(4_001)).await;
    assert_eq!(session.pump(), 0);
    assert!(session.controller().sent());
}

#[tokio::test(start_paused = true)]
async fn snapshot_reflects_nav_and_skill_reveal() {
    let (viewport, mut session) = mount(ControllerConfig::default());

    let before = session.snapshot();
    assert_eq!(before.active_nav, NavLabel::About);
    assert!(before.skill_bars.iter().all(|bar| bar.width_percent == 0));
    assert_eq!(before.nav.iter().filter(|pill| pill.active).count(), 1);

    session.dispatch(PageEvent::NavClicked(NavLabel::Contact));
    viewport.set_skills_ratio(0.3);
    session.pump();

    let after = session.snapshot();
    let active: Vec<_> = after.nav.iter().filter(|pill| pill.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].label, NavLabel::Contact);
    assert_eq!(active[0].href, "#contact");

    let levels: Vec<_> = session
        .content()
        .skills
        .iter()
        .map(|skill| skill.level)
        .collect();
    let widths: Vec<_> = after.skill_bars.iter().map(|bar| bar.width_percent).collect();
    assert_eq!(widths, levels);
}
