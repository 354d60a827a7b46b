//! Drives a mounted page session from a replay script.

use std::{io::Write, time::Duration};

use serde::Serialize;
use tracing::{debug, info};
use view_state::{
    PageEvent, PageSession, Scheduler, SimulatedViewport, SubmitOutcome, ViewSnapshot,
};

use crate::script::ReplayStep;

#[derive(Debug, Serialize)]
struct StepRecord<'a> {
    step: usize,
    action: &'static str,
    view: &'a ViewSnapshot,
}

/// Applies each step, settles the inbox, then writes one JSON snapshot line.
pub async fn run_replay<S: Scheduler, W: Write>(
    session: &mut PageSession<S>,
    viewport: &SimulatedViewport,
    steps: &[ReplayStep],
    out: &mut W,
) -> anyhow::Result<()> {
    for (index, step) in steps.iter().enumerate() {
        debug!(step = index + 1, action = step.name(), "applying replay step");
        apply_step(session, viewport, step).await;
        session.settle().await;

        let view = session.snapshot();
        serde_json::to_writer(
            &mut *out,
            &StepRecord {
                step: index + 1,
                action: step.name(),
                view: &view,
            },
        )?;
        writeln!(out)?;
    }

    info!(steps = steps.len(), "replay finished");
    Ok(())
}

async fn apply_step<S: Scheduler>(
    session: &mut PageSession<S>,
    viewport: &SimulatedViewport,
    step: &ReplayStep,
) {
    match step {
        ReplayStep::Scroll { offset_y } => viewport.scroll_to(*offset_y),
        ReplayStep::Intersect { ratio } => viewport.set_skills_ratio(*ratio),
        ReplayStep::Nav { label } => {
            session.dispatch(PageEvent::NavClicked(*label));
        }
        ReplayStep::Edit { field, value } => {
            session.dispatch(PageEvent::FieldEdited {
                field: *field,
                value: value.clone(),
            });
        }
        ReplayStep::Submit => {
            if session.dispatch(PageEvent::SubmitClicked) == Some(SubmitOutcome::Incomplete) {
                info!("submit ignored; every contact field must be filled");
            }
        }
        ReplayStep::Wait { ms } => tokio::time::sleep(Duration::from_millis(*ms)).await,
    }
}

#[cfg(test)]
#[path = "tests/replay_tests.rs"]
mod tests;
