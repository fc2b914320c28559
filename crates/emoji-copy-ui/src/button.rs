//! The per-emoji button widget
//!
//! One [`EmojiButton`] is created per emoji at grid-build time and destroyed
//! when the grid is torn down or rebuilt after a settings change. Clicking
//! or pressing Enter composes the tone/gender variant and copies it; which
//! copy behavior runs is decided in [`crate::action`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{EventControllerKey, EventControllerMotion, EventSequenceState, GestureClick};

use emoji_copy_core::{compose_variant, EmojiTraits, Gender, SkinTone};

use crate::action::{action_for_key, action_for_mouse_button, CopyAction};
use crate::category::CategoryHandle;
use crate::context::PickerContext;
use crate::paste::PasteTrigger;

thread_local! {
    // Per-widget CSS names so a forced style only hits its own button.
    static NEXT_ITEM_ID: Cell<u64> = const { Cell::new(0) };
}

/// One clickable, keyboard-activatable emoji in the picker grid.
pub struct EmojiButton {
    base: String,
    keywords: Vec<String>,
    traits: EmojiTraits,
    ctx: Rc<PickerContext>,
    paste: PasteTrigger,
    widget: RefCell<Option<gtk4::Button>>,
    style: RefCell<Option<gtk4::CssProvider>>,
}

impl EmojiButton {
    /// Derive the variant traits from `keywords` and store the glyph. The
    /// widget itself is not created until [`build`](Self::build).
    pub fn new(base: impl Into<String>, keywords: Vec<String>, ctx: Rc<PickerContext>) -> Rc<Self> {
        let traits = EmojiTraits::from_keywords(&keywords);
        Rc::new(Self {
            base: base.into(),
            keywords,
            traits,
            paste: PasteTrigger::new(Rc::clone(&ctx.injector)),
            ctx,
            widget: RefCell::new(None),
            style: RefCell::new(None),
        })
    }

    /// The unmodified glyph.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn traits(&self) -> EmojiTraits {
        self.traits
    }

    /// The underlying widget, once built.
    pub fn widget(&self) -> Option<gtk4::Button> {
        self.widget.borrow().as_ref().cloned()
    }

    /// Construct the widget and wire pointer, keyboard, and hover handling.
    /// Hover swaps the category's shared label between the emoji's name
    /// (first keyword) and the category name; it is skipped when there is no
    /// category or no keywords.
    pub fn build(self: &Rc<Self>, category: Option<&Rc<CategoryHandle>>) {
        let widget = gtk4::Button::builder()
            .label(&self.base)
            .css_classes(vec!["flat", "emoji-copy-item"])
            .can_focus(true)
            .build();

        let id = NEXT_ITEM_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        widget.set_widget_name(&format!("emoji-item-{}", id));

        // Listen on every mouse button, not just the primary one.
        let click = GestureClick::new();
        click.set_button(0);
        let button = Rc::clone(self);
        click.connect_pressed(move |gesture, _n_press, _x, _y| {
            if let Some(action) = action_for_mouse_button(gesture.current_button()) {
                if button.activate(action) {
                    gesture.set_state(EventSequenceState::Claimed);
                }
            }
        });
        widget.add_controller(click);

        let key = EventControllerKey::new();
        let button = Rc::clone(self);
        key.connect_key_pressed(move |_, keyval, _keycode, modifiers| {
            match action_for_key(keyval, modifiers) {
                Some(action) if button.activate(action) => glib::Propagation::Stop,
                _ => glib::Propagation::Proceed,
            }
        });
        widget.add_controller(key);

        if let Some(category) = category {
            if !self.keywords.is_empty() {
                let motion = EventControllerMotion::new();
                let enter_cat = Rc::clone(category);
                let emoji_name = self.keywords[0].clone();
                motion.connect_enter(move |_, _x, _y| enter_cat.show_emoji_name(&emoji_name));
                let leave_cat = Rc::clone(category);
                motion.connect_leave(move |_| leave_cat.restore());
                widget.add_controller(motion);
            }
        }

        self.widget.borrow_mut().replace(widget);
        self.update_style(None);
    }

    /// Cancel any pending paste shot, unregister the style provider, and
    /// drop the widget. Buttons are rebuilt on every settings change, so a
    /// provider left on the display would pile up one stale rule per emoji
    /// per rebuild.
    pub fn destroy(&self) {
        self.paste.cancel();
        if let Some(provider) = self.style.borrow_mut().take() {
            if let Some(display) = gdk4::Display::default() {
                gtk4::style_context_remove_provider_for_display(&display, &provider);
            }
        }
        if let Some(widget) = self.widget.borrow_mut().take() {
            widget.unparent();
        }
    }

    /// Apply glyph size and color. Without `forced`, the size comes from the
    /// `emojisize` setting with a white foreground; a forced style string
    /// replaces those declarations wholesale.
    pub fn update_style(&self, forced: Option<&str>) {
        let Some(widget) = self.widget.borrow().as_ref().cloned() else {
            return;
        };
        let css = match forced {
            Some(style) => format!("button#{} {{ {} }}", widget.widget_name(), style),
            None => {
                let size = self.ctx.settings.borrow().emoji_size;
                format!(
                    "button#{} {{ font-size: {}px; color: #FFFFFF; }}",
                    widget.widget_name(),
                    size
                )
            }
        };

        let mut style = self.style.borrow_mut();
        if style.is_none() {
            let provider = gtk4::CssProvider::new();
            if let Some(display) = gdk4::Display::default() {
                gtk4::style_context_add_provider_for_display(
                    &display,
                    &provider,
                    gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
                );
            }
            *style = Some(provider);
        }
        if let Some(provider) = style.as_ref() {
            provider.load_from_string(&css);
        }
    }

    /// Compose the glyph with the current tone/gender settings and tell the
    /// search collaborator about the final text. `None` for an empty glyph,
    /// which makes every gesture a no-op.
    pub fn tagged_emoji(&self) -> Option<String> {
        if self.base.is_empty() {
            return None;
        }
        let (tone, gender) = {
            let settings = self.ctx.settings.borrow();
            (
                SkinTone::from_index(settings.skin_tone),
                Gender::from_index(settings.gender),
            )
        };
        let composed = compose_variant(&self.base, self.traits, tone, gender);
        self.ctx.search.shift_for(&composed);
        Some(composed)
    }

    /// Run one copy action. Returns whether the gesture was consumed.
    fn activate(&self, action: CopyAction) -> bool {
        let Some(emoji) = self.tagged_emoji() else {
            return false;
        };

        match action {
            CopyAction::ReplaceAndClose => {
                self.ctx.clipboard.set_text(&emoji);
                self.ctx.menu.close();
            }
            CopyAction::ReplaceAndStay => {
                self.ctx.clipboard.set_text(&emoji);
            }
            CopyAction::AppendAndStay => {
                let clipboard = Rc::clone(&self.ctx.clipboard);
                self.ctx.clipboard.read_text(Box::new(move |text| {
                    let mut combined = text.unwrap_or_default();
                    combined.push_str(&emoji);
                    clipboard.set_text(&combined);
                }));
            }
        }

        if self.ctx.settings.borrow().paste_on_select {
            self.paste.schedule();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardProvider, ReadTextCallback};
    use crate::context::{MenuHandle, SearchFeedback};
    use crate::paste::{ChordKey, InjectError, InputInjector, KeyState};
    use emoji_copy_core::PickerSettings;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct FakeClipboard {
        text: RefCell<Option<String>>,
    }

    impl ClipboardProvider for FakeClipboard {
        fn set_text(&self, text: &str) {
            self.text.borrow_mut().replace(text.to_string());
        }

        fn read_text(&self, callback: ReadTextCallback) {
            callback(self.text.borrow().clone());
        }
    }

    #[derive(Default)]
    struct FakeMenu {
        closed: Cell<u32>,
    }

    impl MenuHandle for FakeMenu {
        fn close(&self) {
            self.closed.set(self.closed.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeSearch {
        last: RefCell<Option<String>>,
    }

    impl SearchFeedback for FakeSearch {
        fn shift_for(&self, text: &str) {
            self.last.borrow_mut().replace(text.to_string());
        }
    }

    struct NullInjector;

    impl InputInjector for NullInjector {
        fn notify_key(&mut self, _: ChordKey, _: KeyState) -> Result<(), InjectError> {
            Ok(())
        }
    }

    struct Harness {
        ctx: Rc<PickerContext>,
        clipboard: Rc<FakeClipboard>,
        menu: Rc<FakeMenu>,
        search: Rc<FakeSearch>,
    }

    fn harness(settings: PickerSettings) -> Harness {
        let clipboard = Rc::new(FakeClipboard::default());
        let menu = Rc::new(FakeMenu::default());
        let search = Rc::new(FakeSearch::default());
        let ctx = PickerContext::new(
            Rc::new(RefCell::new(settings)),
            clipboard.clone(),
            Rc::new(RefCell::new(NullInjector)),
            menu.clone(),
            search.clone(),
        );
        Harness {
            ctx,
            clipboard,
            menu,
            search,
        }
    }

    fn plain_button(base: &str, h: &Harness) -> Rc<EmojiButton> {
        EmojiButton::new(base, vec!["name".to_string()], Rc::clone(&h.ctx))
    }

    #[test]
    fn test_replace_and_close_sets_clipboard_and_closes_once() {
        let h = harness(PickerSettings::default());
        let button = plain_button("🎉", &h);

        assert!(button.activate(CopyAction::ReplaceAndClose));
        assert_eq!(h.clipboard.text.borrow().as_deref(), Some("🎉"));
        assert_eq!(h.menu.closed.get(), 1);
    }

    #[test]
    fn test_replace_and_stay_keeps_menu_open() {
        let h = harness(PickerSettings::default());
        let button = plain_button("🎉", &h);

        assert!(button.activate(CopyAction::ReplaceAndStay));
        assert_eq!(h.clipboard.text.borrow().as_deref(), Some("🎉"));
        assert_eq!(h.menu.closed.get(), 0);
    }

    #[test]
    fn test_append_and_stay_concatenates_prior_text() {
        let h = harness(PickerSettings::default());
        h.clipboard.set_text("hello ");
        let button = plain_button("🎉", &h);

        assert!(button.activate(CopyAction::AppendAndStay));
        assert_eq!(h.clipboard.text.borrow().as_deref(), Some("hello 🎉"));
        assert_eq!(h.menu.closed.get(), 0);
    }

    #[test]
    fn test_append_to_empty_clipboard_is_just_the_emoji() {
        let h = harness(PickerSettings::default());
        let button = plain_button("🎉", &h);

        assert!(button.activate(CopyAction::AppendAndStay));
        assert_eq!(h.clipboard.text.borrow().as_deref(), Some("🎉"));
    }

    #[test]
    fn test_empty_base_is_a_no_op() {
        let h = harness(PickerSettings::default());
        let button = plain_button("", &h);

        assert!(!button.activate(CopyAction::ReplaceAndClose));
        assert!(h.clipboard.text.borrow().is_none());
        assert_eq!(h.menu.closed.get(), 0);
        assert!(h.search.last.borrow().is_none());
    }

    #[test]
    fn test_copied_text_carries_tone_from_settings() {
        let h = harness(PickerSettings {
            skin_tone: 3,
            ..Default::default()
        });
        let button = EmojiButton::new(
            "👍",
            vec!["thumbs up".to_string(), "HAS_TONE".to_string()],
            Rc::clone(&h.ctx),
        );

        assert!(button.activate(CopyAction::ReplaceAndStay));
        assert_eq!(h.clipboard.text.borrow().as_deref(), Some("👍\u{1F3FD}"));
    }

    #[test]
    fn test_search_is_notified_with_composed_text() {
        let h = harness(PickerSettings {
            gender: 1,
            ..Default::default()
        });
        let button = EmojiButton::new(
            "🧗",
            vec!["person climbing".to_string(), "HAS_GENDER".to_string()],
            Rc::clone(&h.ctx),
        );

        let composed = button.tagged_emoji().unwrap();
        assert_eq!(composed, "🧗\u{200D}\u{2640}\u{FE0F}");
        assert_eq!(h.search.last.borrow().as_deref(), Some(composed.as_str()));
    }

    #[test]
    fn test_traits_derived_from_keywords() {
        let h = harness(PickerSettings::default());
        let button = EmojiButton::new(
            "👩‍🚒",
            vec![
                "woman firefighter".to_string(),
                "HAS_TONE".to_string(),
                "IS_GENDERED".to_string(),
            ],
            Rc::clone(&h.ctx),
        );
        assert!(button.traits().tonable);
        assert!(button.traits().gendered);
        assert!(!button.traits().genderable);
    }

    #[test]
    fn test_destroy_before_build_is_safe() {
        let h = harness(PickerSettings::default());
        let button = plain_button("🎉", &h);
        button.destroy();
        assert!(button.widget().is_none());
    }

    #[test]
    fn test_destroy_releases_style_provider() {
        if gtk4::init().is_err() {
            // No display available; the style path never runs headless.
            return;
        }
        let h = harness(PickerSettings::default());
        let button = plain_button("🎉", &h);
        button.build(None);
        assert!(button.style.borrow().is_some());

        button.destroy();
        assert!(button.style.borrow().is_none());
        assert!(button.widget().is_none());
    }
}
