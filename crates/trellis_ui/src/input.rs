//! Input handling for UI.
//!
//! Tracks key and pointer button state across frames and derives edge
//! events from it. Every tracker follows the same per-frame discipline:
//!
//! ```text
//! record()  ->  down()/up()/motion()...  ->  refresh()  ->  is_click()/is_release()
//! ```
//!
//! `record()` snapshots the current state, `refresh()` compares against the
//! snapshot. Calling them out of order yields stale or missing edges; nothing
//! here defends against that.
//!
//! At most ONE edge is reported per refresh cycle: the first differing key in
//! the tracker's (unspecified) iteration order. Two keys changing in the same
//! frame means one of them goes unreported.
//!
//! Every query comes in two forms. The checked form fails with
//! [`InputError::NotTracked`] for keys outside the registered set; the
//! `_unchecked` form treats unknown keys as up, unclicked and unreleased.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use trellis_core::{Point, VOID_POINT};

use crate::error::{InputError, InputResult};

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Right,
    /// First extra button.
    X1,
    /// Second extra button.
    X2,
}

impl MouseButton {
    /// Every button a [`MouseTracker`] registers.
    pub const ALL: [Self; 5] = [Self::Left, Self::Middle, Self::Right, Self::X1, Self::X2];
}

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Space bar.
    Space,
    /// Function key F1-F24.
    F(u8),
    /// A key producing a character.
    Char(char),
}

impl Key {
    /// Returns the printable character this key types, if any.
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Space => Some(' '),
            Self::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// Keys needed to type printable ASCII text and edit it.
    #[must_use]
    pub fn text_keys() -> Vec<Self> {
        let mut keys: Vec<Self> = ('!'..='~').map(Self::Char).collect();
        keys.extend([
            Self::Space,
            Self::Enter,
            Self::Backspace,
            Self::Delete,
            Self::Tab,
            Self::Escape,
            Self::Left,
            Self::Right,
            Self::Up,
            Self::Down,
            Self::Home,
            Self::End,
        ]);
        keys
    }
}

/// Direction of a detected transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Up -> down.
    Click,
    /// Down -> up.
    Release,
}

/// The single transition detected by the last `refresh()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<K> {
    /// Key that changed.
    pub key: K,
    /// Which way it changed.
    pub kind: EdgeKind,
}

/// Down/up state for a fixed set of keys, with edge detection.
#[derive(Debug, Clone)]
pub struct KeyTracker<K> {
    /// Current state.
    down: HashMap<K, bool>,
    /// Snapshot taken by `record()`.
    prev: HashMap<K, bool>,
    /// Edge found by the last `refresh()`.
    edge: Option<Edge<K>>,
}

impl<K> KeyTracker<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Creates a tracker for the given keys, all up.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        let down: HashMap<K, bool> = keys.into_iter().map(|k| (k, false)).collect();
        Self {
            prev: down.clone(),
            down,
            edge: None,
        }
    }

    /// Returns true if the key is part of the tracked set.
    #[must_use]
    pub fn is_tracked(&self, key: K) -> bool {
        self.down.contains_key(&key)
    }

    /// Number of tracked keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.down.len()
    }

    /// Returns true if no keys are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.down.is_empty()
    }

    fn slot(&mut self, key: K) -> InputResult<&mut bool> {
        self.down
            .get_mut(&key)
            .ok_or_else(|| InputError::not_tracked(&key))
    }

    /// Marks a tracked key as down.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] if the key was not registered.
    pub fn down(&mut self, key: K) -> InputResult<()> {
        *self.slot(key)? = true;
        Ok(())
    }

    /// Marks a key as down, tracking it from now on if it was unknown.
    pub fn down_unchecked(&mut self, key: K) {
        if self.down.insert(key, true).is_none() {
            tracing::trace!(?key, "tracking key first seen while unchecked");
        }
    }

    /// Marks a tracked key as up.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] if the key was not registered.
    pub fn up(&mut self, key: K) -> InputResult<()> {
        *self.slot(key)? = false;
        Ok(())
    }

    /// Marks a key as up, tracking it from now on if it was unknown.
    pub fn up_unchecked(&mut self, key: K) {
        self.down.insert(key, false);
    }

    /// Returns whether a tracked key is down.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] if the key was not registered.
    pub fn is_down(&self, key: K) -> InputResult<bool> {
        self.down
            .get(&key)
            .copied()
            .ok_or_else(|| InputError::not_tracked(&key))
    }

    /// Returns whether a key is down; unknown keys are up.
    #[must_use]
    pub fn is_down_unchecked(&self, key: K) -> bool {
        self.down.get(&key).copied().unwrap_or(false)
    }

    /// Returns whether a tracked key is up.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] if the key was not registered.
    pub fn is_up(&self, key: K) -> InputResult<bool> {
        self.is_down(key).map(|down| !down)
    }

    /// Returns whether a key is up; unknown keys are up.
    #[must_use]
    pub fn is_up_unchecked(&self, key: K) -> bool {
        !self.is_down_unchecked(key)
    }

    /// Snapshots the current state. Call before any `down`/`up` this frame.
    pub fn record(&mut self) {
        self.prev.clone_from(&self.down);
    }

    /// Detects the edge of this cycle. Call after all `down`/`up` this frame.
    ///
    /// Only keys present in the last snapshot are compared, so keys created
    /// through the unchecked API after `record()` are not seen until the
    /// next cycle. See [`refresh_unchecked`](Self::refresh_unchecked).
    pub fn refresh(&mut self) {
        let down = &self.down;
        self.edge = self.prev.iter().find_map(|(&key, &was)| {
            let now = down.get(&key).copied().unwrap_or(false);
            (now != was).then_some(Edge {
                key,
                kind: if now { EdgeKind::Click } else { EdgeKind::Release },
            })
        });
    }

    /// Like [`refresh`](Self::refresh), but scans the current state so keys
    /// that appeared since the snapshot are compared against "up".
    pub fn refresh_unchecked(&mut self) {
        let prev = &self.prev;
        self.edge = self.down.iter().find_map(|(&key, &now)| {
            let was = prev.get(&key).copied().unwrap_or(false);
            (now != was).then_some(Edge {
                key,
                kind: if now { EdgeKind::Click } else { EdgeKind::Release },
            })
        });
    }

    /// The edge detected by the last refresh.
    #[must_use]
    pub fn edge(&self) -> Option<Edge<K>> {
        self.edge
    }

    /// The key clicked this cycle, if the cycle's edge was a click.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.edge
            .filter(|e| e.kind == EdgeKind::Click)
            .map(|e| e.key)
    }

    fn has_edge(&self, key: K, kind: EdgeKind) -> bool {
        self.edge == Some(Edge { key, kind })
    }

    /// Returns whether a tracked key was clicked this cycle.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] if the key was not registered.
    pub fn is_click(&self, key: K) -> InputResult<bool> {
        if !self.is_tracked(key) {
            return Err(InputError::not_tracked(&key));
        }
        Ok(self.has_edge(key, EdgeKind::Click))
    }

    /// Returns whether a key was clicked this cycle; unknown keys were not.
    #[must_use]
    pub fn is_click_unchecked(&self, key: K) -> bool {
        self.has_edge(key, EdgeKind::Click)
    }

    /// Returns whether a tracked key was released this cycle.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] if the key was not registered.
    pub fn is_release(&self, key: K) -> InputResult<bool> {
        if !self.is_tracked(key) {
            return Err(InputError::not_tracked(&key));
        }
        Ok(self.has_edge(key, EdgeKind::Release))
    }

    /// Returns whether a key was released this cycle; unknown keys were not.
    #[must_use]
    pub fn is_release_unchecked(&self, key: K) -> bool {
        self.has_edge(key, EdgeKind::Release)
    }
}

/// Pointer state: button edges plus positions and per-frame deltas.
#[derive(Debug, Clone)]
pub struct MouseTracker {
    buttons: KeyTracker<MouseButton>,
    /// Where each button last went down, [`VOID_POINT`] while up.
    positions: HashMap<MouseButton, Point>,
    /// Current pointer position.
    cursor: Point,
    /// Pointer movement since `record()`.
    motion: Point,
    /// Wheel movement since `record()`.
    wheel: Point,
}

impl MouseTracker {
    /// Creates a tracker for every [`MouseButton`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            buttons: KeyTracker::new(MouseButton::ALL),
            positions: MouseButton::ALL.iter().map(|&b| (b, VOID_POINT)).collect(),
            cursor: Point::ZERO,
            motion: Point::ZERO,
            wheel: Point::ZERO,
        }
    }

    /// Button state.
    #[must_use]
    pub fn buttons(&self) -> &KeyTracker<MouseButton> {
        &self.buttons
    }

    /// Snapshots button state and zeroes motion and wheel deltas.
    pub fn record(&mut self) {
        self.buttons.record();
        self.motion = Point::ZERO;
        self.wheel = Point::ZERO;
    }

    /// Detects this cycle's button edge.
    pub fn refresh(&mut self) {
        self.buttons.refresh();
    }

    /// See [`KeyTracker::refresh_unchecked`].
    pub fn refresh_unchecked(&mut self) {
        self.buttons.refresh_unchecked();
    }

    /// Moves the pointer to `to`, accumulating the motion delta.
    pub fn motion(&mut self, to: Point) {
        self.motion += to - self.cursor;
        self.cursor = to;
    }

    /// Accumulates wheel movement.
    pub fn wheel_motion(&mut self, delta: Point) {
        self.wheel += delta;
    }

    /// Presses `button` at `at`.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] if the button was not registered.
    pub fn down(&mut self, button: MouseButton, at: Point) -> InputResult<()> {
        self.buttons.down(button)?;
        self.positions.insert(button, at);
        Ok(())
    }

    /// Presses `button` at `at`, tracking it if unknown.
    pub fn down_unchecked(&mut self, button: MouseButton, at: Point) {
        self.buttons.down_unchecked(button);
        self.positions.insert(button, at);
    }

    /// Releases `button`.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] if the button was not registered.
    pub fn up(&mut self, button: MouseButton) -> InputResult<()> {
        self.buttons.up(button)?;
        self.positions.insert(button, VOID_POINT);
        Ok(())
    }

    /// Releases `button`, tracking it if unknown.
    pub fn up_unchecked(&mut self, button: MouseButton) {
        self.buttons.up_unchecked(button);
        self.positions.insert(button, VOID_POINT);
    }

    /// Position where `button` went down, or [`VOID_POINT`] while it is up.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] if the button was not registered.
    pub fn at(&self, button: MouseButton) -> InputResult<Point> {
        self.positions
            .get(&button)
            .copied()
            .ok_or_else(|| InputError::not_tracked(&button))
    }

    /// Position where `button` went down; unknown buttons are void.
    #[must_use]
    pub fn at_unchecked(&self, button: MouseButton) -> Point {
        self.positions.get(&button).copied().unwrap_or(VOID_POINT)
    }

    /// Current pointer position.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Pointer movement since the last `record()`.
    #[must_use]
    pub fn motion_delta(&self) -> Point {
        self.motion
    }

    /// Wheel movement since the last `record()`.
    #[must_use]
    pub fn wheel_delta(&self) -> Point {
        self.wheel
    }

    /// True if the pointer moved this frame.
    #[must_use]
    pub fn moved(&self) -> bool {
        !self.motion.is_zero()
    }

    /// True if the pointer did not move this frame.
    #[must_use]
    pub fn unmoved(&self) -> bool {
        self.motion.is_zero()
    }

    /// True if the wheel moved this frame.
    #[must_use]
    pub fn wheel_moved(&self) -> bool {
        !self.wheel.is_zero()
    }

    /// True if the wheel did not move this frame.
    #[must_use]
    pub fn wheel_unmoved(&self) -> bool {
        self.wheel.is_zero()
    }

    /// Whether `button` is held; unknown buttons are up.
    #[must_use]
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.buttons.is_down_unchecked(button)
    }

    /// Whether `button` was clicked this cycle.
    #[must_use]
    pub fn is_click(&self, button: MouseButton) -> bool {
        self.buttons.is_click_unchecked(button)
    }

    /// Whether `button` was released this cycle.
    #[must_use]
    pub fn is_release(&self, button: MouseButton) -> bool {
        self.buttons.is_release_unchecked(button)
    }
}

impl Default for MouseTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A platform event, already decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent<K = Key> {
    /// Key pressed.
    KeyDown(K),
    /// Key released.
    KeyUp(K),
    /// Pointer button pressed.
    ButtonDown {
        /// Which button.
        button: MouseButton,
        /// Pointer position.
        at: Point,
    },
    /// Pointer button released.
    ButtonUp {
        /// Which button.
        button: MouseButton,
    },
    /// Pointer moved.
    Motion {
        /// New pointer position.
        to: Point,
    },
    /// Wheel scrolled.
    Wheel {
        /// Scroll amount.
        delta: Point,
    },
}

/// Keyboard and mouse tracked together.
///
/// `record()` and `refresh()` run the keyboard first, then the mouse.
#[derive(Debug, Clone)]
pub struct InputManager<K = Key> {
    keyboard: KeyTracker<K>,
    mouse: MouseTracker,
}

impl InputManager<Key> {
    /// Creates a manager that tracks the keys needed for text entry.
    #[must_use]
    pub fn with_text_keys() -> Self {
        Self::new(Key::text_keys())
    }
}

impl<K> InputManager<K>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Creates a manager tracking `keys` and every mouse button.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keyboard: KeyTracker::new(keys),
            mouse: MouseTracker::new(),
        }
    }

    /// Keyboard state.
    #[must_use]
    pub fn keys(&self) -> &KeyTracker<K> {
        &self.keyboard
    }

    /// Mutable keyboard state.
    pub fn keys_mut(&mut self) -> &mut KeyTracker<K> {
        &mut self.keyboard
    }

    /// Mouse state.
    #[must_use]
    pub fn pointer(&self) -> &MouseTracker {
        &self.mouse
    }

    /// Mutable mouse state.
    pub fn pointer_mut(&mut self) -> &mut MouseTracker {
        &mut self.mouse
    }

    /// Snapshots both trackers, keyboard first.
    pub fn record(&mut self) {
        self.keyboard.record();
        self.mouse.record();
    }

    /// Detects both trackers' edges, keyboard first.
    pub fn refresh(&mut self) {
        self.keyboard.refresh();
        self.mouse.refresh();
    }

    /// Unchecked refresh of both trackers, keyboard first.
    pub fn refresh_unchecked(&mut self) {
        self.keyboard.refresh_unchecked();
        self.mouse.refresh_unchecked();
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// [`InputError::NotTracked`] for keys or buttons outside the registered set.
    pub fn handle(&mut self, event: InputEvent<K>) -> InputResult<()> {
        match event {
            InputEvent::KeyDown(key) => self.keyboard.down(key),
            InputEvent::KeyUp(key) => self.keyboard.up(key),
            InputEvent::ButtonDown { button, at } => self.mouse.down(button, at),
            InputEvent::ButtonUp { button } => self.mouse.up(button),
            InputEvent::Motion { to } => {
                self.mouse.motion(to);
                Ok(())
            }
            InputEvent::Wheel { delta } => {
                self.mouse.wheel_motion(delta);
                Ok(())
            }
        }
    }

    /// Applies one event, tracking unknown keys and buttons.
    pub fn handle_unchecked(&mut self, event: InputEvent<K>) {
        match event {
            InputEvent::KeyDown(key) => self.keyboard.down_unchecked(key),
            InputEvent::KeyUp(key) => self.keyboard.up_unchecked(key),
            InputEvent::ButtonDown { button, at } => self.mouse.down_unchecked(button, at),
            InputEvent::ButtonUp { button } => self.mouse.up_unchecked(button),
            InputEvent::Motion { to } => self.mouse.motion(to),
            InputEvent::Wheel { delta } => self.mouse.wheel_motion(delta),
        }
    }

    /// Runs one full input cycle: `record()`, every event, `refresh()`.
    ///
    /// Events for untracked keys are skipped. Returns how many were skipped.
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent<K>>) -> usize {
        self.record();
        let mut skipped = 0;
        for event in events {
            if let Err(err) = self.handle(event) {
                tracing::trace!(%err, "skipping input event");
                skipped += 1;
            }
        }
        self.refresh();
        skipped
    }
}

/// Anything that exposes pointer state to widgets.
pub trait PointerInput {
    /// The pointer tracker.
    fn mouse(&self) -> &MouseTracker;
}

/// Anything that exposes text-entry keyboard state to widgets.
pub trait KeyboardInput {
    /// The keyboard tracker.
    fn keyboard(&self) -> &KeyTracker<Key>;
}

impl PointerInput for MouseTracker {
    fn mouse(&self) -> &MouseTracker {
        self
    }
}

impl<K> PointerInput for InputManager<K> {
    fn mouse(&self) -> &MouseTracker {
        &self.mouse
    }
}

impl KeyboardInput for InputManager<Key> {
    fn keyboard(&self) -> &KeyTracker<Key> {
        &self.keyboard
    }
}

impl KeyboardInput for KeyTracker<Key> {
    fn keyboard(&self) -> &KeyTracker<Key> {
        self
    }
}
