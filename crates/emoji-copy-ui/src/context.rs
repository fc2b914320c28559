//! Shared collaborator context
//!
//! The host picker builds one [`PickerContext`] and hands a clone of the
//! `Rc` to every button. The collaborators the host must implement are the
//! two small traits below; clipboard and injection have their own modules.

use std::cell::RefCell;
use std::rc::Rc;

use emoji_copy_core::PickerSettings;

use crate::clipboard::ClipboardProvider;
use crate::paste::InputInjector;

/// Handle on the surrounding picker menu, so replace-and-close can close it.
pub trait MenuHandle {
    fn close(&self);
}

/// Search collaborator notified with the final composed text of every copy.
pub trait SearchFeedback {
    fn shift_for(&self, text: &str);
}

/// Everything a button needs from its surroundings.
pub struct PickerContext {
    /// Shared mutable settings (GTK main thread only)
    pub settings: Rc<RefCell<PickerSettings>>,
    pub clipboard: Rc<dyn ClipboardProvider>,
    /// Shared input-injection handle used by every button's paste trigger
    pub injector: Rc<RefCell<dyn InputInjector>>,
    pub menu: Rc<dyn MenuHandle>,
    pub search: Rc<dyn SearchFeedback>,
}

impl PickerContext {
    pub fn new(
        settings: Rc<RefCell<PickerSettings>>,
        clipboard: Rc<dyn ClipboardProvider>,
        injector: Rc<RefCell<dyn InputInjector>>,
        menu: Rc<dyn MenuHandle>,
        search: Rc<dyn SearchFeedback>,
    ) -> Rc<Self> {
        Rc::new(Self {
            settings,
            clipboard,
            injector,
            menu,
            search,
        })
    }
}
