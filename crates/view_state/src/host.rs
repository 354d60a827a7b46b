//! Host capabilities: scroll notifications and viewport intersection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::events::{EventSink, ListenerId, ObserverId, PageEvent};

pub trait ScrollNotifier: Send + Sync {
    fn add_listener(&self, sink: EventSink) -> ListenerId;
    fn remove_listener(&self, id: ListenerId);
}

/// Watches the skills section and reports its visible-area ratio.
pub trait IntersectionNotifier: Send + Sync {
    fn observe(&self, threshold: f64, sink: EventSink) -> ObserverId;
    fn disconnect(&self, id: ObserverId);
}

#[derive(Clone)]
pub struct HostCapabilities {
    pub scroll: Arc<dyn ScrollNotifier>,
    pub intersection: Arc<dyn IntersectionNotifier>,
}

impl HostCapabilities {
    pub fn from_viewport(viewport: Arc<SimulatedViewport>) -> Self {
        Self {
            scroll: viewport.clone(),
            intersection: viewport,
        }
    }
}

struct Observer {
    id: ObserverId,
    threshold: f64,
    sink: EventSink,
    last_ratio: Option<f64>,
}

impl Observer {
    fn should_report(&self, ratio: f64) -> bool {
        match self.last_ratio {
            None => true,
            Some(last) => (last >= self.threshold) != (ratio >= self.threshold),
        }
    }
}

#[derive(Default)]
struct ViewportInner {
    next_id: u64,
    scroll_y: u32,
    skills_ratio: Option<f64>,
    listeners: Vec<(ListenerId, EventSink)>,
    observers: Vec<Observer>,
}

impl ViewportInner {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Headless stand-in for a browser viewport.
///
/// Scroll listeners hear every scroll. Intersection observers hear the first
/// report after `observe` and then only threshold crossings, in either direction.
#[derive(Default)]
pub struct SimulatedViewport {
    inner: Mutex<ViewportInner>,
}

impl SimulatedViewport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ViewportInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn scroll_y(&self) -> u32 {
        self.lock().scroll_y
    }

    pub fn skills_ratio(&self) -> Option<f64> {
        self.lock().skills_ratio
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.lock().observers.len()
    }

    pub fn scroll_to(&self, offset_y: u32) {
        let mut inner = self.lock();
        inner.scroll_y = offset_y;
        for (_, sink) in &inner.listeners {
            sink.post(PageEvent::Scrolled { offset_y });
        }
    }

    pub fn set_skills_ratio(&self, ratio: f64) {
        let mut inner = self.lock();
        inner.skills_ratio = Some(ratio);
        for observer in inner.observers.iter_mut() {
            if observer.should_report(ratio) {
                observer.sink.post(PageEvent::SkillsIntersection { ratio });
            }
            observer.last_ratio = Some(ratio);
        }
    }
}

impl ScrollNotifier for SimulatedViewport {
    fn add_listener(&self, sink: EventSink) -> ListenerId {
        let mut inner = self.lock();
        let id = ListenerId(inner.allocate_id());
        inner.listeners.push((id, sink));
        id
    }

    fn remove_listener(&self, id: ListenerId) {
        self.lock().listeners.retain(|(listener, _)| *listener != id);
    }
}

impl IntersectionNotifier for SimulatedViewport {
    fn observe(&self, threshold: f64, sink: EventSink) -> ObserverId {
        let mut inner = self.lock();
        let id = ObserverId(inner.allocate_id());
        let last_ratio = inner.skills_ratio;
        if let Some(ratio) = last_ratio {
            sink.post(PageEvent::SkillsIntersection { ratio });
        }
        inner.observers.push(Observer {
            id,
            threshold,
            sink,
            last_ratio,
        });
        id
    }

    fn disconnect(&self, id: ObserverId) {
        self.lock().observers.retain(|observer| observer.id != id);
    }
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
