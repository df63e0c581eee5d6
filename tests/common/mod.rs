//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sideview::config::{ConfigStore, Settings};
use sideview::controller::Controller;
use sideview::data::{DataSource, Item, RefreshFn, SubscriptionId};
use sideview::workspace::Workspace;

/// Everything a scenario wants to assert about data-source traffic
#[derive(Debug, Default)]
pub struct SourceLog {
    /// Ordered operation trace: "activate", "subscribe:3", "refresh", ...
    pub events: Vec<String>,
    pub refreshes: u32,
    pub max_subscribers: usize,
}

pub type SharedSourceLog = Rc<RefCell<SourceLog>>;

/// Data source that records every call it receives
pub struct RecordingSource {
    items: Vec<Item>,
    subscribers: Vec<(SubscriptionId, RefreshFn)>,
    next_id: u64,
    log: SharedSourceLog,
}

impl RecordingSource {
    pub fn new(items: Vec<Item>) -> (Self, SharedSourceLog) {
        let log = Rc::new(RefCell::new(SourceLog::default()));
        (
            Self {
                items,
                subscribers: Vec::new(),
                next_id: 1,
                log: log.clone(),
            },
            log,
        )
    }
}

impl DataSource for RecordingSource {
    fn activate(&mut self) {
        self.log.borrow_mut().events.push("activate".to_string());
    }

    fn deactivate(&mut self) {
        self.subscribers.clear();
        self.log.borrow_mut().events.push("deactivate".to_string());
    }

    fn subscribe(&mut self, callback: RefreshFn) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        let mut log = self.log.borrow_mut();
        log.events.push(format!("subscribe:{}", id.0));
        log.max_subscribers = log.max_subscribers.max(self.subscribers.len());
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        let removed = self.subscribers.len() != before;
        if removed {
            self.log
                .borrow_mut()
                .events
                .push(format!("unsubscribe:{}", id.0));
        }
        removed
    }

    fn refresh(&mut self) {
        {
            let mut log = self.log.borrow_mut();
            log.events.push("refresh".to_string());
            log.refreshes += 1;
        }
        let items = self.items.clone();
        for (_, callback) in &mut self.subscribers {
            callback(&items);
        }
    }
}

pub fn sample_items() -> Vec<Item> {
    vec![
        Item::group("clients"),
        Item::project("website"),
        Item::project("backend"),
    ]
}

/// Controller over a started workspace and an in-memory config store
pub fn build_controller(settings: Settings) -> (Controller, SharedSourceLog) {
    let (source, log) = RecordingSource::new(sample_items());
    let controller = Controller::with_workspace(
        ConfigStore::with_settings(settings),
        Box::new(source),
        Workspace::started(),
    );
    (controller, log)
}

/// Activated controller, panel not yet attached (default position "Right")
pub fn activated_controller() -> (Controller, SharedSourceLog) {
    let (mut controller, log) = build_controller(Settings::default());
    controller.activate();
    (controller, log)
}

/// Activated controller with the panel attached at the given position
pub fn attached_controller(position: &str) -> (Controller, SharedSourceLog) {
    let (mut controller, log) = activated_controller();
    controller.config_mut().set_panel_position(position);
    controller.pump();
    (controller, log)
}

/// Index of the last occurrence of an event in the trace
pub fn last_event_index(log: &SharedSourceLog, prefix: &str) -> Option<usize> {
    log.borrow()
        .events
        .iter()
        .rposition(|event| event.starts_with(prefix))
}
