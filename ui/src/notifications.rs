use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use hackmate_common::markers::NOTIFICATION_BADGE_ID;
use hackmate_common::notifications::{check_unread, BadgeUpdate};
use hackmate_common::schedule::PollSchedule;
use wasm_bindgen::JsCast;
use web_sys::PageTransitionEvent;

use crate::{dom, state};

struct Poller {
    schedule: PollSchedule,
    /// Bumped on every start so timers armed before a stop are ignored.
    generation: u32,
}

thread_local! {
    static POLLER: RefCell<Option<Poller>> = const { RefCell::new(None) };
}

/// Poll the unread count while the page shows a notification badge.
pub fn init() {
    let has_badge = dom::document()
        .and_then(|d| d.get_element_by_id(NOTIFICATION_BADGE_ID))
        .is_some();
    if !has_badge {
        return;
    }

    start();

    if let Some(window) = dom::window() {
        dom::listen(&window, "pagehide", |_| stop());
        dom::listen(&window, "pageshow", |event| {
            let restored = event
                .dyn_ref::<PageTransitionEvent>()
                .is_some_and(|e| e.persisted());
            if restored {
                start();
            }
        });
    }
}

pub fn start() {
    let now = dom::now_ms();
    let interval = state::config().poll_interval_ms;
    let generation = POLLER.with(|cell| {
        let mut cell = cell.borrow_mut();
        let poller = cell.get_or_insert_with(|| Poller {
            schedule: PollSchedule::new(interval),
            generation: 0,
        });
        if !poller.schedule.start(now) {
            return None;
        }
        poller.generation = poller.generation.wrapping_add(1);
        Some(poller.generation)
    });
    if let Some(generation) = generation {
        tracing::debug!("Notification polling started");
        pump(generation, now);
    }
}

pub fn stop() {
    POLLER.with(|cell| {
        if let Some(poller) = cell.borrow_mut().as_mut() {
            poller.schedule.stop();
        }
    });
    tracing::debug!("Notification polling stopped");
}

/// Run a check if one is due at `now`, then arm a timer for the next one.
fn pump(generation: u32, now: u64) {
    let next = POLLER.with(|cell| {
        let mut cell = cell.borrow_mut();
        let poller = cell.as_mut().filter(|p| p.generation == generation)?;
        let due = poller.schedule.advance(now);
        Some((due, poller.schedule.next_deadline()))
    });
    let Some((due, deadline)) = next else {
        return;
    };

    if due {
        wasm_bindgen_futures::spawn_local(check_once());
    }
    if let Some(deadline) = deadline {
        Timeout::new(dom::millis(deadline.saturating_sub(now)), move || {
            pump(generation, deadline)
        })
        .forget();
    }
}

async fn check_once() {
    let Some(update) = check_unread(&state::client()).await else {
        return;
    };
    let Some(badge) = dom::document().and_then(|d| d.get_element_by_id(NOTIFICATION_BADGE_ID))
    else {
        return;
    };
    if let BadgeUpdate::Show(text) = &update {
        badge.set_text_content(Some(text));
    }
    dom::set_display(&badge, update.display_value());
}
