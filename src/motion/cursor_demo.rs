//! Unattended product walkthrough played inside a landing card.
//!
//! The script is a list of cues measured from one anchor time. It is compiled
//! into a flat timeline (notification expiries and an end marker included)
//! and armed all at once, so cues can never drift out of order and dropping
//! the [`Schedule`] cancels everything still pending.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Pause after the card becomes visible so entrance transitions can finish.
pub const START_DELAY_MS: u32 = 1200;
/// How long a toast stays on the card.
pub const NOTICE_TTL_MS: u32 = 2500;

pub const FILTER_LABELS: [&str; 4] = ["Senior", "Remote", "Open to work", "Python"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Alert,
}

/// A single scripted mutation. Cursor coordinates are percentages of the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    MoveCursor { x: f64, y: f64 },
    Press,
    Release,
    SetFilter { index: usize, on: bool },
    ToggleAlerts,
    ActivateStep(usize),
    Notify { text: &'static str, kind: NoticeKind },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    pub at_ms: u32,
    pub step: Step,
}

const fn cue(at_ms: u32, step: Step) -> Cue {
    Cue { at_ms, step }
}

pub const SCRIPT: &[Cue] = &[
    cue(0, Step::ActivateStep(0)),
    cue(0, Step::MoveCursor { x: 18.0, y: 30.0 }),
    cue(700, Step::Press),
    cue(850, Step::SetFilter { index: 0, on: true }),
    cue(900, Step::Release),
    cue(1400, Step::MoveCursor { x: 42.0, y: 30.0 }),
    cue(2100, Step::Press),
    cue(2250, Step::SetFilter { index: 1, on: true }),
    cue(2300, Step::Release),
    cue(2600, Step::Notify { text: "38 candidates match your ICP", kind: NoticeKind::Info }),
    cue(3200, Step::ActivateStep(1)),
    cue(3200, Step::MoveCursor { x: 82.0, y: 14.0 }),
    cue(4000, Step::Press),
    cue(4150, Step::ToggleAlerts),
    cue(4200, Step::Release),
    cue(4500, Step::Notify { text: "Alert saved: new matches daily", kind: NoticeKind::Success }),
    cue(5600, Step::ActivateStep(2)),
    cue(5600, Step::MoveCursor { x: 64.0, y: 78.0 }),
    cue(6400, Step::Press),
    cue(6600, Step::Release),
    cue(6700, Step::Notify { text: "Outreach queued for 12 candidates", kind: NoticeKind::Success }),
    cue(7600, Step::Notify { text: "3 replies waiting in your inbox", kind: NoticeKind::Alert }),
    cue(8400, Step::MoveCursor { x: 50.0, y: 50.0 }),
];

#[derive(Clone, Debug, PartialEq)]
pub enum DemoEvent {
    Step(Step),
    Notify {
        id: u32,
        text: &'static str,
        kind: NoticeKind,
        expires_at_ms: u32,
    },
    Expire(u32),
    /// Last event of a run; resets the card and starts the next loop.
    End,
    /// Visibility lost.
    Reset,
    /// A real click on a filter chip.
    UserToggleFilter(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    events: Vec<(u32, DemoEvent)>,
}

impl Timeline {
    pub fn compile(script: &[Cue], notice_ttl_ms: u32) -> Self {
        let mut cues = script.to_vec();
        cues.sort_by_key(|c| c.at_ms);

        let mut events = Vec::with_capacity(cues.len() + 1);
        let mut next_id = 0;
        for cue in cues {
            match cue.step {
                Step::Notify { text, kind } => {
                    let expires_at_ms = cue.at_ms + notice_ttl_ms;
                    events.push((
                        cue.at_ms,
                        DemoEvent::Notify {
                            id: next_id,
                            text,
                            kind,
                            expires_at_ms,
                        },
                    ));
                    events.push((expires_at_ms, DemoEvent::Expire(next_id)));
                    next_id += 1;
                }
                step => events.push((cue.at_ms, DemoEvent::Step(step))),
            }
        }
        events.sort_by_key(|(at, _)| *at);

        let end = events.last().map(|(at, _)| *at).unwrap_or(0);
        events.push((end, DemoEvent::End));
        Self { events }
    }

    pub fn events(&self) -> &[(u32, DemoEvent)] {
        &self.events
    }

    pub fn duration_ms(&self) -> u32 {
        self.events.last().map(|(at, _)| *at).unwrap_or(0)
    }

    /// Scripted mutations, excluding expiries and the end marker.
    pub fn step_count(&self) -> usize {
        self.events
            .iter()
            .filter(|(_, e)| matches!(e, DemoEvent::Step(_) | DemoEvent::Notify { .. }))
            .count()
    }

    /// State after every event at or before `at_ms`, up to but not
    /// including the end marker.
    #[cfg(test)]
    pub fn state_at(&self, at_ms: u32) -> DemoState {
        let mut state = DemoState::default();
        for (at, event) in &self.events {
            if *at > at_ms || *event == DemoEvent::End {
                break;
            }
            state.apply(event);
        }
        state
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub text: &'static str,
    pub kind: NoticeKind,
    pub expires_at_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DemoState {
    pub cursor: (f64, f64),
    pub clicking: bool,
    pub active_step: usize,
    pub filters: [bool; FILTER_LABELS.len()],
    pub alerts_on: bool,
    pub notices: Vec<Notice>,
    /// Completed loops; bumped by `End`.
    pub cycle: u32,
}

impl Default for DemoState {
    fn default() -> Self {
        Self {
            cursor: (50.0, 50.0),
            clicking: false,
            active_step: 0,
            filters: [false; FILTER_LABELS.len()],
            alerts_on: false,
            notices: Vec::new(),
            cycle: 0,
        }
    }
}

impl DemoState {
    pub fn apply(&mut self, event: &DemoEvent) {
        match event {
            DemoEvent::Step(step) => match *step {
                Step::MoveCursor { x, y } => self.cursor = (x, y),
                Step::Press => self.clicking = true,
                Step::Release => self.clicking = false,
                Step::SetFilter { index, on } => {
                    if let Some(filter) = self.filters.get_mut(index) {
                        *filter = on;
                    }
                }
                Step::ToggleAlerts => self.alerts_on = !self.alerts_on,
                Step::ActivateStep(index) => self.active_step = index,
                // Compiled into DemoEvent::Notify
                Step::Notify { .. } => {}
            },
            DemoEvent::Notify {
                id,
                text,
                kind,
                expires_at_ms,
            } => self.notices.push(Notice {
                id: *id,
                text: *text,
                kind: *kind,
                expires_at_ms: *expires_at_ms,
            }),
            DemoEvent::Expire(id) => self.notices.retain(|n| n.id != *id),
            DemoEvent::End => {
                *self = Self {
                    cycle: self.cycle + 1,
                    ..Self::default()
                }
            }
            DemoEvent::Reset => {
                *self = Self {
                    cycle: self.cycle,
                    ..Self::default()
                }
            }
            DemoEvent::UserToggleFilter(index) => {
                if let Some(filter) = self.filters.get_mut(*index) {
                    *filter = !*filter;
                }
            }
        }
    }
}

impl Reducible for DemoState {
    type Action = DemoEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(&action);
        next.into()
    }
}

/// Every pending timer of one armed run. Dropping it cancels them all.
pub struct Schedule {
    timers: Vec<Timeout>,
}

impl Schedule {
    pub fn arm(timeline: &Timeline, anchor_delay_ms: u32, dispatch: Callback<DemoEvent>) -> Self {
        let timers = timeline
            .events()
            .iter()
            .map(|(at, event)| {
                let event = event.clone();
                let dispatch = dispatch.clone();
                Timeout::new(anchor_delay_ms + at, move || dispatch.emit(event))
            })
            .collect();
        Self { timers }
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Timeline {
        Timeline::compile(SCRIPT, NOTICE_TTL_MS)
    }

    #[test]
    fn step_count_and_duration_are_fixed() {
        let t = timeline();
        assert_eq!(t.step_count(), SCRIPT.len());
        // Last toast goes up at 7600 and expires one TTL later
        assert_eq!(t.duration_ms(), 7600 + NOTICE_TTL_MS);
        assert_eq!(timeline(), t);
    }

    #[test]
    fn events_are_ordered_and_end_is_last() {
        let t = timeline();
        let events = t.events();
        assert!(events.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(events.last().map(|(_, e)| e), Some(&DemoEvent::End));
        assert_eq!(events.iter().filter(|(_, e)| *e == DemoEvent::End).count(), 1);
        assert!(events.iter().all(|(at, _)| *at <= t.duration_ms()));
    }

    #[test]
    fn toasts_drain_by_end_of_run() {
        let t = timeline();
        let mid = t.state_at(4600);
        assert_eq!(mid.notices.len(), 2);
        assert_eq!(mid.notices[0].text, "38 candidates match your ICP");

        let end = t.state_at(t.duration_ms());
        assert!(end.notices.is_empty());
    }

    #[test]
    fn scripted_steps_mutate_state() {
        let t = timeline();
        let s = t.state_at(2400);
        assert_eq!(s.filters, [true, true, false, false]);
        assert!(!s.clicking);
        assert_eq!(s.cursor, (42.0, 30.0));

        let s = t.state_at(4150);
        assert!(s.alerts_on);
        assert!(s.clicking);
        assert_eq!(s.active_step, 1);
    }

    #[test]
    fn script_overwrites_user_filter_clicks() {
        let t = timeline();
        let mut state = t.state_at(100);
        state.apply(&DemoEvent::UserToggleFilter(2));
        assert!(state.filters[2]);
        state.apply(&DemoEvent::Step(Step::SetFilter { index: 2, on: false }));
        assert!(!state.filters[2]);

        // Out of range clicks are ignored
        state.apply(&DemoEvent::UserToggleFilter(FILTER_LABELS.len()));
        assert_eq!(state.filters, [false; FILTER_LABELS.len()]);
    }

    #[test]
    fn end_loops_and_reset_keeps_cycle() {
        let mut state = timeline().state_at(5000);
        state.apply(&DemoEvent::End);
        assert_eq!(state, DemoState { cycle: 1, ..DemoState::default() });

        state.apply(&DemoEvent::Step(Step::ToggleAlerts));
        state.apply(&DemoEvent::Reset);
        assert_eq!(state, DemoState { cycle: 1, ..DemoState::default() });
    }

    #[test]
    fn unordered_script_is_sorted_before_ids_are_assigned() {
        let script = [
            cue(500, Step::Notify { text: "second", kind: NoticeKind::Info }),
            cue(100, Step::Notify { text: "first", kind: NoticeKind::Info }),
        ];
        let t = Timeline::compile(&script, 1000);
        let first = t.state_at(100);
        assert_eq!(first.notices[0].id, 0);
        assert_eq!(first.notices[0].text, "first");
        assert_eq!(t.duration_ms(), 1500);
        assert!(t.state_at(1500).notices.is_empty());
    }
}
