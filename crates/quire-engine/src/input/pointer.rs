use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::coords::Vec2;

use super::types::{ButtonAction, MouseButton};

/// Default gap between a press and the next press that still counts as a double click.
pub const DEFAULT_DOUBLE_CLICK_SECS: f64 = 0.5;

/// Default pixels scrolled per wheel line.
pub const DEFAULT_SCROLL_SPEED: f32 = 10.0;

#[derive(Debug, Copy, Clone, Default)]
struct ButtonTrack {
    /// Time of the last press edge, in clock seconds.
    last_press: Option<f64>,
    last_action: ButtonAction,
    double_click_pending: bool,
    checked_at: Option<u64>,
}

/// Pointer position, button edge detection and wheel accumulation.
///
/// Raw press/release events are recorded as they arrive; widgets see a
/// per-frame [`ButtonAction`] computed by [`poll_buttons`](Self::poll_buttons)
/// or the first [`action`](Self::action) query of each frame, and cached for
/// the rest of it.
///
/// A press that is released again before the next poll is latched so the
/// click still shows up as `Down` on one frame and `Click` on the next.
#[derive(Debug)]
pub struct PointerTracker {
    position: Vec2,
    held: HashSet<MouseButton>,
    latched: HashSet<MouseButton>,
    tracks: HashMap<MouseButton, ButtonTrack>,

    frame: u64,
    now: f64,
    double_click_secs: f64,

    scroll_speed: f32,
    scroll_delta: f32,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_DOUBLE_CLICK_SECS, DEFAULT_SCROLL_SPEED)
    }

    pub fn with_settings(double_click_secs: f64, scroll_speed: f32) -> Self {
        Self {
            position: Vec2::zero(),
            held: HashSet::new(),
            latched: HashSet::new(),
            tracks: HashMap::new(),
            frame: 0,
            now: 0.0,
            double_click_secs,
            scroll_speed,
            scroll_delta: 0.0,
        }
    }

    // ── raw feed ──────────────────────────────────────────────────────────

    /// Sets the pointer position (layout space, Y up).
    #[inline]
    pub fn set_position(&mut self, pos: Vec2) {
        self.position = pos;
    }

    pub fn press(&mut self, button: MouseButton) {
        if self.held.insert(button) {
            self.latched.insert(button);
        }
    }

    pub fn release(&mut self, button: MouseButton) {
        self.held.remove(&button);
    }

    /// Releases every held button, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Accumulates wheel movement given in lines.
    #[inline]
    pub fn scroll_lines(&mut self, lines: f32) {
        self.scroll_delta += lines * self.scroll_speed;
    }

    /// Accumulates wheel movement already given in pixels.
    #[inline]
    pub fn scroll_pixels(&mut self, pixels: f32) {
        self.scroll_delta += pixels;
    }

    // ── per-frame queries ─────────────────────────────────────────────────

    /// Starts a new poll frame. `now` is monotonic clock time in seconds.
    pub fn begin_frame(&mut self, frame: u64, now: f64) {
        self.frame = frame;
        self.now = now;
    }

    /// Runs edge detection for every button with history or a pending
    /// press. Later [`action`](Self::action) queries this frame read the
    /// cached result, so a press nobody asks about is still consumed on time.
    pub fn poll_buttons(&mut self) {
        let buttons: HashSet<MouseButton> =
            self.tracks.keys().chain(&self.latched).chain(&self.held).copied().collect();
        for button in buttons {
            self.action(button);
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Wheel delta accumulated since the last drain.
    #[inline]
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Returns and resets the accumulated wheel delta.
    #[inline]
    pub fn take_scroll(&mut self) -> f32 {
        std::mem::take(&mut self.scroll_delta)
    }

    /// Edge-detected action of `button` for the current frame.
    pub fn action(&mut self, button: MouseButton) -> ButtonAction {
        if let Some(track) = self.tracks.get(&button) {
            if track.checked_at == Some(self.frame) {
                return track.last_action;
            }
        }

        let latched = self.latched.remove(&button);
        let down = latched || self.held.contains(&button);
        let mut action = if down { ButtonAction::Down } else { ButtonAction::Up };

        let now = self.now;
        let threshold = self.double_click_secs;
        let (track, fresh) = match self.tracks.entry(button) {
            Entry::Occupied(e) => (e.into_mut(), false),
            Entry::Vacant(e) => (
                e.insert(ButtonTrack { last_press: down.then_some(now), ..ButtonTrack::default() }),
                true,
            ),
        };

        // A button seen for the first time has no history to form a click from.
        if !fresh {
            match (down, track.last_action) {
                (true, ButtonAction::Down) => {}
                (true, _) => {
                    if track.last_press.is_some_and(|t| now - t < threshold) {
                        track.double_click_pending = true;
                    }
                    track.last_press = Some(now);
                }
                (false, ButtonAction::Down) => {
                    action = if std::mem::take(&mut track.double_click_pending) {
                        ButtonAction::DoubleClick
                    } else {
                        ButtonAction::Click
                    };
                }
                (false, _) => {}
            }
        }

        track.last_action = action;
        track.checked_at = Some(self.frame);
        action
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Polls the left button at `(frame, now)`.
    fn poll(p: &mut PointerTracker, frame: u64, now: f64) -> ButtonAction {
        p.begin_frame(frame, now);
        p.action(MouseButton::Left)
    }

    // ── edge detection ────────────────────────────────────────────────────

    #[test]
    fn press_then_release_yields_down_click_up() {
        let mut p = PointerTracker::new();
        assert_eq!(poll(&mut p, 0, 0.0), ButtonAction::Up);
        p.press(MouseButton::Left);
        assert_eq!(poll(&mut p, 1, 0.1), ButtonAction::Down);
        assert_eq!(poll(&mut p, 2, 0.2), ButtonAction::Down);
        p.release(MouseButton::Left);
        assert_eq!(poll(&mut p, 3, 0.3), ButtonAction::Click);
        assert_eq!(poll(&mut p, 4, 0.4), ButtonAction::Up);
    }

    #[test]
    fn action_is_cached_within_a_frame() {
        let mut p = PointerTracker::new();
        p.press(MouseButton::Left);
        assert_eq!(poll(&mut p, 0, 0.0), ButtonAction::Down);
        p.release(MouseButton::Left);
        assert_eq!(p.action(MouseButton::Left), ButtonAction::Down);
        assert_eq!(poll(&mut p, 1, 0.1), ButtonAction::Click);
    }

    #[test]
    fn press_and_release_between_polls_is_latched() {
        let mut p = PointerTracker::new();
        assert_eq!(poll(&mut p, 0, 0.0), ButtonAction::Up);
        p.press(MouseButton::Left);
        p.release(MouseButton::Left);
        assert_eq!(poll(&mut p, 1, 0.1), ButtonAction::Down);
        assert_eq!(poll(&mut p, 2, 0.2), ButtonAction::Click);
    }

    #[test]
    fn poll_buttons_consumes_presses_nobody_asked_about() {
        let mut p = PointerTracker::new();
        p.press(MouseButton::Left);
        p.release(MouseButton::Left);
        for frame in 0..3 {
            p.begin_frame(frame, frame as f64 * 0.1);
            p.poll_buttons();
        }
        p.begin_frame(3, 0.3);
        assert_eq!(p.action(MouseButton::Left), ButtonAction::Up);
    }

    #[test]
    fn poll_buttons_keeps_the_frame_cache() {
        let mut p = PointerTracker::new();
        p.press(MouseButton::Right);
        p.begin_frame(0, 0.0);
        p.poll_buttons();
        p.release(MouseButton::Right);
        assert_eq!(p.action(MouseButton::Right), ButtonAction::Down);
        p.begin_frame(1, 0.1);
        p.poll_buttons();
        assert_eq!(p.action(MouseButton::Right), ButtonAction::Click);
    }

    // ── double click ──────────────────────────────────────────────────────

    #[test]
    fn second_press_inside_threshold_is_double_click() {
        let mut p = PointerTracker::new();
        let mut actions = Vec::new();
        let script = [(true, 0.0), (false, 0.1), (true, 0.2), (false, 0.3)];
        for (frame, (pressed, now)) in script.into_iter().enumerate() {
            if pressed { p.press(MouseButton::Left) } else { p.release(MouseButton::Left) }
            actions.push(poll(&mut p, frame as u64, now));
        }
        assert_eq!(actions, vec![
            ButtonAction::Down,
            ButtonAction::Click,
            ButtonAction::Down,
            ButtonAction::DoubleClick,
        ]);
        // The second press/release pair produced no standalone click.
        assert_eq!(actions[2..].iter().filter(|a| **a == ButtonAction::Click).count(), 0);
    }

    #[test]
    fn second_press_outside_threshold_is_plain_click() {
        let mut p = PointerTracker::new();
        p.press(MouseButton::Left);
        poll(&mut p, 0, 0.0);
        p.release(MouseButton::Left);
        poll(&mut p, 1, 0.1);
        p.press(MouseButton::Left);
        poll(&mut p, 2, 0.7);
        p.release(MouseButton::Left);
        assert_eq!(poll(&mut p, 3, 0.8), ButtonAction::Click);
    }

    #[test]
    fn double_click_flag_is_consumed() {
        let mut p = PointerTracker::new();
        for (frame, (pressed, now)) in [(true, 0.0), (false, 0.1), (true, 0.2), (false, 0.3)].into_iter().enumerate() {
            if pressed { p.press(MouseButton::Left) } else { p.release(MouseButton::Left) }
            poll(&mut p, frame as u64, now);
        }
        p.press(MouseButton::Left);
        poll(&mut p, 4, 2.0);
        p.release(MouseButton::Left);
        assert_eq!(poll(&mut p, 5, 2.1), ButtonAction::Click);
    }

    // ── scroll ────────────────────────────────────────────────────────────

    #[test]
    fn scroll_accumulates_lines_times_speed() {
        let mut p = PointerTracker::new();
        p.scroll_lines(1.0);
        p.scroll_lines(0.5);
        p.scroll_pixels(3.0);
        assert_eq!(p.scroll_delta(), 18.0);
        assert_eq!(p.take_scroll(), 18.0);
        assert_eq!(p.scroll_delta(), 0.0);
    }
}
