//! Skin-tone and gender composition for emoji glyphs.
//!
//! Three keyword-driven traits decide how a base glyph is modified before it
//! is copied to the clipboard:
//!
//! - *tonable*: the glyph accepts a Fitzpatrick skin-tone modifier;
//! - *genderable*: the glyph accepts a ZWJ gender sign suffix;
//! - *pre-gendered*: the glyph already starts from a 👩 or 👨 base form,
//!   which moves the skin-tone insertion point right after that person glyph
//!   instead of the end of the sequence.

/// Keyword marking a glyph that accepts a skin-tone modifier.
pub const KEYWORD_HAS_TONE: &str = "HAS_TONE";
/// Keyword marking a glyph that accepts a gender modifier suffix.
pub const KEYWORD_HAS_GENDER: &str = "HAS_GENDER";
/// Keyword marking a glyph whose base form already encodes a gender.
pub const KEYWORD_IS_GENDERED: &str = "IS_GENDERED";

/// The two person base forms a pre-gendered glyph can start from.
/// Woman is checked before man, matching the upstream picker.
const PERSON_FORMS: [&str; 2] = ["\u{1F469}", "\u{1F468}"];

/// Fitzpatrick skin-tone selection, index 0–5 in the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkinTone {
    /// No modifier (the glyph keeps its default yellow tone)
    #[default]
    Unmodified,
    /// U+1F3FB light skin tone
    Light,
    /// U+1F3FC medium-light skin tone
    MediumLight,
    /// U+1F3FD medium skin tone
    Medium,
    /// U+1F3FE medium-dark skin tone
    MediumDark,
    /// U+1F3FF dark skin tone
    Dark,
}

impl SkinTone {
    /// The codepoint appended to a tonable glyph. Empty for [`SkinTone::Unmodified`].
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Unmodified => "",
            Self::Light => "\u{1F3FB}",
            Self::MediumLight => "\u{1F3FC}",
            Self::Medium => "\u{1F3FD}",
            Self::MediumDark => "\u{1F3FE}",
            Self::Dark => "\u{1F3FF}",
        }
    }

    /// Resolve the `skin-tone` settings index. Out-of-range values degrade
    /// to [`SkinTone::Unmodified`] with a warning.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Unmodified,
            1 => Self::Light,
            2 => Self::MediumLight,
            3 => Self::Medium,
            4 => Self::MediumDark,
            5 => Self::Dark,
            other => {
                tracing::warn!("skin-tone index {} out of range, using default", other);
                Self::Unmodified
            }
        }
    }
}

/// Gender modifier selection, index 0–2 in the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    /// No modifier
    #[default]
    Unspecified,
    /// ZWJ + U+2640 female sign + VS16
    Woman,
    /// ZWJ + U+2642 male sign + VS16
    Man,
}

impl Gender {
    /// The ZWJ sequence appended to a genderable glyph. Empty for
    /// [`Gender::Unspecified`].
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Woman => "\u{200D}\u{2640}\u{FE0F}",
            Self::Man => "\u{200D}\u{2642}\u{FE0F}",
        }
    }

    /// Resolve the `gender` settings index. Out-of-range values degrade to
    /// [`Gender::Unspecified`] with a warning.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Unspecified,
            1 => Self::Woman,
            2 => Self::Man,
            other => {
                tracing::warn!("gender index {} out of range, using default", other);
                Self::Unspecified
            }
        }
    }
}

/// How a glyph reacts to tone and gender settings, derived from its keyword
/// list at button construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmojiTraits {
    /// Accepts a skin-tone modifier
    pub tonable: bool,
    /// Accepts a gender modifier suffix
    pub genderable: bool,
    /// Base form already encodes a gender (changes the tone insertion point)
    pub gendered: bool,
}

impl EmojiTraits {
    /// Scan a keyword list for the three trait markers.
    pub fn from_keywords<S: AsRef<str>>(keywords: &[S]) -> Self {
        let mut traits = Self::default();
        for keyword in keywords {
            match keyword.as_ref() {
                KEYWORD_HAS_TONE => traits.tonable = true,
                KEYWORD_HAS_GENDER => traits.genderable = true,
                KEYWORD_IS_GENDERED => traits.gendered = true,
                _ => {}
            }
        }
        traits
    }
}

/// Compose the final glyph for `base` under the given traits and settings.
///
/// A pre-gendered glyph gets the tone inserted right after its 👩/👨 person
/// form; every other tonable glyph gets the tone appended. The gender suffix
/// always goes at the end. A pre-gendered glyph that contains neither person
/// form is left unmodified (the error is logged, not surfaced — a degraded
/// glyph still pastes fine).
pub fn compose_variant(base: &str, traits: EmojiTraits, tone: SkinTone, gender: Gender) -> String {
    let mut composed = base.to_string();
    if traits.tonable {
        if traits.gendered {
            composed = tone_after_person_form(&composed, tone);
        } else {
            composed.push_str(tone.modifier());
        }
    }
    if traits.genderable {
        composed.push_str(gender.modifier());
    }
    composed
}

fn tone_after_person_form(glyph: &str, tone: SkinTone) -> String {
    for form in PERSON_FORMS {
        if let Some(start) = glyph.find(form) {
            let insert_at = start + form.len();
            let mut toned = String::with_capacity(glyph.len() + tone.modifier().len());
            toned.push_str(&glyph[..insert_at]);
            toned.push_str(tone.modifier());
            toned.push_str(&glyph[insert_at..]);
            return toned;
        }
    }
    tracing::error!(
        "pre-gendered glyph {:?} contains neither person form, leaving it unmodified",
        glyph
    );
    glyph.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL_TONES: [SkinTone; 6] = [
        SkinTone::Unmodified,
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    fn tonable() -> EmojiTraits {
        EmojiTraits {
            tonable: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_glyph_unchanged() {
        let composed = compose_variant(
            "🎉",
            EmojiTraits::default(),
            SkinTone::Dark,
            Gender::Woman,
        );
        assert_eq!(composed, "🎉");
    }

    #[test]
    fn test_tonable_appends_each_tone() {
        for tone in ALL_TONES {
            let composed = compose_variant("👍", tonable(), tone, Gender::Unspecified);
            assert_eq!(composed, format!("👍{}", tone.modifier()));
        }
    }

    #[test]
    fn test_unmodified_tone_is_empty() {
        assert_eq!(SkinTone::Unmodified.modifier(), "");
        let composed = compose_variant("👍", tonable(), SkinTone::Unmodified, Gender::Unspecified);
        assert_eq!(composed, "👍");
    }

    #[test]
    fn test_genderable_appends_each_gender() {
        let traits = EmojiTraits {
            genderable: true,
            ..Default::default()
        };
        for gender in [Gender::Unspecified, Gender::Woman, Gender::Man] {
            let composed = compose_variant("🧗", traits, SkinTone::Unmodified, gender);
            assert_eq!(composed, format!("🧗{}", gender.modifier()));
        }
    }

    #[test]
    fn test_tone_applied_before_gender_suffix() {
        let traits = EmojiTraits {
            tonable: true,
            genderable: true,
            gendered: false,
        };
        let composed = compose_variant("🧗", traits, SkinTone::Medium, Gender::Man);
        assert_eq!(composed, "🧗\u{1F3FD}\u{200D}\u{2642}\u{FE0F}");
    }

    #[test]
    fn test_pre_gendered_woman_gets_tone_after_person_form() {
        let traits = EmojiTraits {
            tonable: true,
            genderable: false,
            gendered: true,
        };
        // woman firefighter: 👩 ZWJ 🚒
        let composed = compose_variant(
            "\u{1F469}\u{200D}\u{1F692}",
            traits,
            SkinTone::Medium,
            Gender::Unspecified,
        );
        assert_eq!(composed, "\u{1F469}\u{1F3FD}\u{200D}\u{1F692}");
    }

    #[test]
    fn test_pre_gendered_man_gets_tone_after_person_form() {
        let traits = EmojiTraits {
            tonable: true,
            genderable: false,
            gendered: true,
        };
        let composed = compose_variant(
            "\u{1F468}\u{200D}\u{1F692}",
            traits,
            SkinTone::Dark,
            Gender::Unspecified,
        );
        assert_eq!(composed, "\u{1F468}\u{1F3FF}\u{200D}\u{1F692}");
    }

    #[test]
    fn test_pre_gendered_without_person_form_left_unmodified() {
        let traits = EmojiTraits {
            tonable: true,
            genderable: false,
            gendered: true,
        };
        let composed = compose_variant("🎅", traits, SkinTone::Light, Gender::Unspecified);
        assert_eq!(composed, "🎅");
    }

    #[test]
    fn test_traits_from_keywords() {
        let keywords = ["firefighter", "HAS_TONE", "IS_GENDERED"];
        let traits = EmojiTraits::from_keywords(&keywords);
        assert!(traits.tonable);
        assert!(!traits.genderable);
        assert!(traits.gendered);
    }

    #[test]
    fn test_traits_default_without_markers() {
        let traits = EmojiTraits::from_keywords(&["party popper", "celebrate"]);
        assert_eq!(traits, EmojiTraits::default());
    }

    #[test]
    fn test_out_of_range_indices_degrade_to_default() {
        assert_eq!(SkinTone::from_index(9), SkinTone::Unmodified);
        assert_eq!(Gender::from_index(7), Gender::Unspecified);
    }

    #[test]
    fn test_index_mapping_matches_settings_order() {
        assert_eq!(SkinTone::from_index(3), SkinTone::Medium);
        assert_eq!(Gender::from_index(1), Gender::Woman);
        assert_eq!(Gender::from_index(2), Gender::Man);
    }
}
