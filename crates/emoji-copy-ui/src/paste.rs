//! Shift+Insert paste injection
//!
//! After a copy, an optional "paste hack" synthesizes a Shift+Insert chord
//! so the previously focused application pastes the fresh clipboard text.
//! The chord runs from a fire-once ~1 ms timer: the minimal delay lets the
//! picker menu close and focus return to the target window first.
//!
//! The injector handle is shared across all buttons through the
//! [`PickerContext`](crate::PickerContext); the underlying virtual device is
//! only constructed on first use.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use glib::SourceId;
use thiserror::Error;

/// Injection errors
#[derive(Error, Debug)]
pub enum InjectError {
    /// The virtual keyboard device could not be created
    #[error("Failed to initialize virtual keyboard: {0}")]
    DeviceInit(String),

    /// A key event was not delivered
    #[error("Failed to deliver key event: {0}")]
    KeyDelivery(String),
}

/// Keys of the paste chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordKey {
    ShiftLeft,
    Insert,
}

/// Press/release state of an injected key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Virtual keyboard seam. One shared handle serves every button.
pub trait InputInjector {
    fn notify_key(&mut self, key: ChordKey, state: KeyState) -> Result<(), InjectError>;
}

/// Emit the full paste chord: Shift down, Insert down, Insert up, Shift up.
pub fn send_paste_chord(injector: &mut dyn InputInjector) -> Result<(), InjectError> {
    injector.notify_key(ChordKey::ShiftLeft, KeyState::Pressed)?;
    injector.notify_key(ChordKey::Insert, KeyState::Pressed)?;
    injector.notify_key(ChordKey::Insert, KeyState::Released)?;
    injector.notify_key(ChordKey::ShiftLeft, KeyState::Released)?;
    Ok(())
}

/// `enigo`-backed injector. The device is created lazily on the first chord
/// and reused afterwards.
#[derive(Default)]
pub struct EnigoInjector {
    device: Option<Enigo>,
}

impl EnigoInjector {
    pub fn new() -> Self {
        Self::default()
    }

    fn device(&mut self) -> Result<&mut Enigo, InjectError> {
        let device = match self.device.take() {
            Some(device) => device,
            None => {
                let device = Enigo::new(&Settings::default())
                    .map_err(|e| InjectError::DeviceInit(e.to_string()))?;
                tracing::debug!("Created virtual keyboard device");
                device
            }
        };
        Ok(self.device.insert(device))
    }
}

impl InputInjector for EnigoInjector {
    fn notify_key(&mut self, key: ChordKey, state: KeyState) -> Result<(), InjectError> {
        let device = self.device()?;
        let key = match key {
            ChordKey::ShiftLeft => Key::Shift,
            ChordKey::Insert => Key::Insert,
        };
        let direction = match state {
            KeyState::Pressed => Direction::Press,
            KeyState::Released => Direction::Release,
        };
        device
            .key(key, direction)
            .map_err(|e| InjectError::KeyDelivery(e.to_string()))
    }
}

/// One-shot deferred paste trigger. Each button owns its own trigger;
/// they all share the injector handle.
pub struct PasteTrigger {
    injector: Rc<RefCell<dyn InputInjector>>,
    pending: Rc<RefCell<Option<SourceId>>>,
}

impl PasteTrigger {
    pub fn new(injector: Rc<RefCell<dyn InputInjector>>) -> Self {
        Self {
            injector,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedule the chord on the main loop. A previously scheduled shot is
    /// replaced.
    pub fn schedule(&self) {
        self.cancel();
        let injector = Rc::clone(&self.injector);
        let pending = Rc::clone(&self.pending);
        let source = glib::timeout_add_local_once(Duration::from_millis(1), move || {
            pending.borrow_mut().take();
            if let Err(err) = send_paste_chord(&mut *injector.borrow_mut()) {
                tracing::error!("Paste injection failed: {}", err);
            }
        });
        self.pending.borrow_mut().replace(source);
    }

    /// Remove a pending shot from the main loop. Dropping only the handle
    /// would let the timer still fire after the button is torn down.
    pub fn cancel(&self) {
        if let Some(source) = self.pending.borrow_mut().take() {
            source.remove();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
