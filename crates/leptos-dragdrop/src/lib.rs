//! Leptos DragDrop Utilities
//!
//! Pointer drag and drop for Leptos using mouse events, reported as three
//! phases: start, over and end. A press on a handle only becomes a drag once
//! the pointer moves past a threshold, so plain clicks still reach the element.
//!
//! The crate knows nothing about what is dragged: callers pick a small `Copy`
//! key type and resolve it to their own entities when a phase arrives.

use leptos::ev;
use leptos::prelude::*;
use web_sys::MouseEvent;

/// How long after a drop clicks are treated as part of the drag
const JUST_ENDED_MS: u32 = 100;

/// Key identifying a draggable element or drop target
pub trait DragKey: Copy + PartialEq + Send + Sync + 'static {}

impl<T> DragKey for T where T: Copy + PartialEq + Send + Sync + 'static {}

/// One phase of a drag gesture
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase<T> {
    /// Pointer moved past the threshold while holding a handle
    Start { active: T },
    /// Pointer crossed into a different drop target
    Over { active: T, over: T },
    /// Button released; `over` is `None` outside every target
    End { active: T, over: Option<T> },
}

/// DnD state signals
pub struct DndSignals<T: DragKey> {
    dragging: RwSignal<Option<T>>,
    over: RwSignal<Option<T>>,
    /// Pressed but not yet moved far enough
    pending: RwSignal<Option<T>>,
    start: RwSignal<(i32, i32)>,
    just_ended: RwSignal<bool>,
    threshold_px: i32,
    on_phase: Callback<DragPhase<T>>,
}

impl<T: DragKey> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: DragKey> Copy for DndSignals<T> {}

pub fn create_dnd_signals<T: DragKey>(threshold_px: i32, on_phase: Callback<DragPhase<T>>) -> DndSignals<T> {
    DndSignals {
        dragging: RwSignal::new(None),
        over: RwSignal::new(None),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
        just_ended: RwSignal::new(false),
        threshold_px,
        on_phase,
    }
}

impl<T: DragKey> DndSignals<T> {
    /// Element being dragged (tracked)
    pub fn dragging(&self) -> Option<T> {
        self.dragging.get()
    }

    /// Current drop target (tracked)
    pub fn over(&self) -> Option<T> {
        self.over.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.with(Option::is_some)
    }

    /// True briefly after a drop, so click handlers can ignore the release
    pub fn drag_just_ended(&self) -> bool {
        self.just_ended.get_untracked()
    }

    /// Button pressed on a handle; nothing is dragged until the pointer moves
    pub fn press(&self, item: T, position: (i32, i32)) {
        self.pending.set(Some(item));
        self.start.set(position);
    }

    /// Start the pending drag once the pointer has travelled past the threshold
    pub fn pointer_moved(&self, position: (i32, i32)) {
        let Some(pending) = self.pending.get_untracked() else {
            return;
        };
        if self.dragging.get_untracked().is_some() {
            return;
        }
        if exceeds_threshold(self.start.get_untracked(), position, self.threshold_px) {
            self.dragging.set(Some(pending));
            self.on_phase.run(DragPhase::Start { active: pending });
        }
    }

    /// Pointer entered a drop target. Returns whether a drag is in progress.
    ///
    /// `Over` is only reported when the target changes.
    pub fn enter_target(&self, target: T) -> bool {
        let Some(active) = self.dragging.get_untracked() else {
            return false;
        };
        if self.over.get_untracked() != Some(target) {
            self.over.set(Some(target));
            self.on_phase.run(DragPhase::Over { active, over: target });
        }
        true
    }

    pub fn leave_target(&self, target: T) {
        if self.dragging.get_untracked().is_some() && self.over.get_untracked() == Some(target) {
            self.over.set(None);
        }
    }

    /// Button released. Returns whether this ended a drag; a press that never
    /// moved far enough is just a click and reports nothing.
    pub fn release(&self) -> bool {
        let dragging = self.dragging.get_untracked();
        let over = self.over.get_untracked();
        self.pending.set(None);

        let Some(active) = dragging else {
            return false;
        };
        self.dragging.set(None);
        self.over.set(None);
        self.just_ended.set(true);
        self.on_phase.run(DragPhase::End { active, over });
        true
    }

    /// Clear the just-ended flag after a short delay
    fn expire_just_ended(&self) {
        let clear = self.just_ended;
        gloo_timers::callback::Timeout::new(JUST_ENDED_MS, move || {
            let _ = clear.try_set(false);
        })
        .forget();
    }
}

/// Whether the pointer has travelled far enough to start dragging
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32), threshold_px: i32) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > threshold_px || dy > threshold_px
}

/// Create mousedown handler for drag handles.
/// Records a pending drag with its start position.
pub fn make_on_handle_mousedown<T: DragKey>(dnd: DndSignals<T>, item: T) -> impl Fn(MouseEvent) + Copy + 'static {
    move |ev: MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // No text selection while dragging, and enclosing handles stay out of it
        ev.prevent_default();
        ev.stop_propagation();
        dnd.press(item, (ev.client_x(), ev.client_y()));
    }
}

/// Create mouseover handler for drop targets.
/// Nested targets stop propagation, so the innermost one wins.
pub fn make_on_target_mouseover<T: DragKey>(dnd: DndSignals<T>, target: T) -> impl Fn(MouseEvent) + Copy + 'static {
    move |ev: MouseEvent| {
        if dnd.enter_target(target) {
            ev.stop_propagation();
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_target_mouseleave<T: DragKey>(dnd: DndSignals<T>, target: T) -> impl Fn(MouseEvent) + Copy + 'static {
    move |_ev: MouseEvent| dnd.leave_target(target)
}

/// Bind window-level mousemove (drag start) and mouseup (drop) handlers.
/// They are removed again when the calling component is cleaned up.
pub fn bind_global_mouse_handlers<T: DragKey>(dnd: DndSignals<T>) {
    let on_mousemove = window_event_listener(ev::mousemove, move |ev: MouseEvent| {
        dnd.pointer_moved((ev.client_x(), ev.client_y()));
    });

    let on_mouseup = window_event_listener(ev::mouseup, move |_ev: MouseEvent| {
        if dnd.release() {
            dnd.expire_just_ended();
        }
    });

    on_cleanup(move || {
        on_mousemove.remove();
        on_mouseup.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::{Arc, Mutex};

    type Phases = Arc<Mutex<Vec<DragPhase<u32>>>>;

    fn recording_dnd() -> (Owner, DndSignals<u32>, Phases) {
        let owner = Owner::new();
        owner.set();
        let phases: Phases = Arc::new(Mutex::new(Vec::new()));
        let on_phase = {
            let phases = Arc::clone(&phases);
            Callback::new(move |phase: DragPhase<u32>| phases.lock().unwrap().push(phase))
        };
        (owner, create_dnd_signals(10, on_phase), phases)
    }

    fn started(dnd: &DndSignals<u32>, item: u32) {
        dnd.press(item, (0, 0));
        dnd.pointer_moved((0, 20));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!exceeds_threshold((0, 0), (10, 0), 10));
        assert!(exceeds_threshold((0, 0), (11, 0), 10));
    }

    #[test]
    fn test_threshold_checks_each_axis() {
        assert!(exceeds_threshold((100, 100), (100, 85), 10));
        assert!(!exceeds_threshold((100, 100), (93, 107), 10));
    }

    #[test]
    fn test_move_past_threshold_starts_drag() {
        let (_owner, dnd, phases) = recording_dnd();
        dnd.press(7, (100, 100));
        dnd.pointer_moved((105, 104));
        assert!(phases.lock().unwrap().is_empty());
        assert_eq!(dnd.dragging.get_untracked(), None);

        dnd.pointer_moved((100, 120));
        assert_eq!(dnd.dragging.get_untracked(), Some(7));
        assert_eq!(*phases.lock().unwrap(), vec![DragPhase::Start { active: 7 }]);

        // Further movement does not start it again
        dnd.pointer_moved((100, 140));
        assert_eq!(phases.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_release_before_threshold_is_a_click() {
        let (_owner, dnd, phases) = recording_dnd();
        dnd.press(7, (0, 0));
        dnd.pointer_moved((3, 3));

        assert!(!dnd.release());
        assert!(phases.lock().unwrap().is_empty());
        assert!(!dnd.drag_just_ended());

        // The press is gone, so later movement starts nothing
        dnd.pointer_moved((0, 50));
        assert!(phases.lock().unwrap().is_empty());
    }

    #[test]
    fn test_over_reported_only_when_target_changes() {
        let (_owner, dnd, phases) = recording_dnd();
        started(&dnd, 1);

        assert!(dnd.enter_target(2));
        assert!(dnd.enter_target(2));
        assert!(dnd.enter_target(3));

        let phases = phases.lock().unwrap();
        assert_eq!(
            phases[1..],
            [DragPhase::Over { active: 1, over: 2 }, DragPhase::Over { active: 1, over: 3 }]
        );
    }

    #[test]
    fn test_targets_ignore_pointer_without_drag() {
        let (_owner, dnd, phases) = recording_dnd();
        assert!(!dnd.enter_target(2));
        dnd.leave_target(2);

        assert_eq!(dnd.over.get_untracked(), None);
        assert!(phases.lock().unwrap().is_empty());
    }

    #[test]
    fn test_release_after_leaving_target_has_no_target() {
        let (_owner, dnd, phases) = recording_dnd();
        started(&dnd, 1);
        dnd.enter_target(2);
        dnd.leave_target(2);
        assert_eq!(dnd.over.get_untracked(), None);

        assert!(dnd.release());
        assert_eq!(phases.lock().unwrap().last(), Some(&DragPhase::End { active: 1, over: None }));
    }

    #[test]
    fn test_leaving_another_target_keeps_current_one() {
        let (_owner, dnd, _phases) = recording_dnd();
        started(&dnd, 1);
        dnd.enter_target(3);
        dnd.leave_target(2);
        assert_eq!(dnd.over.get_untracked(), Some(3));
    }

    #[test]
    fn test_release_over_target_ends_and_resets() {
        let (_owner, dnd, phases) = recording_dnd();
        started(&dnd, 1);
        dnd.enter_target(4);

        assert!(dnd.release());
        assert_eq!(phases.lock().unwrap().last(), Some(&DragPhase::End { active: 1, over: Some(4) }));
        assert_eq!(dnd.dragging.get_untracked(), None);
        assert_eq!(dnd.over.get_untracked(), None);
        assert_eq!(dnd.pending.get_untracked(), None);
        assert!(dnd.drag_just_ended());

        // A second release reports nothing
        assert!(!dnd.release());
        assert_eq!(phases.lock().unwrap().len(), 3);
    }
}
