use crate::foundation::core::Rng64;

/// Locale whose caption set backs every unknown locale.
pub const DEFAULT_LOCALE: &str = "en";

const EN: &[&str] = &[
    "What a beautiful moment!",
    "Keep smiling, you look amazing!",
    "This memory will last forever!",
    "Pure joy captured in time!",
    "Treasure this precious moment!",
];

const ZH: &[&str] = &[
    "美好的瞬间！",
    "保持微笑，你真棒！",
    "珍贵的回忆！",
    "时光定格在此刻！",
    "愿这份美好永存！",
];

const ES: &[&str] = &[
    "¡Qué momento tan hermoso!",
    "¡Sigue sonriendo!",
    "¡Un recuerdo precioso!",
    "¡Alegría pura capturada!",
    "¡Atesora este momento!",
];

const FR: &[&str] = &[
    "Quel beau moment!",
    "Continue de sourire!",
    "Un souvenir précieux!",
    "Pure joie capturée!",
    "Chéris ce moment!",
];

const DE: &[&str] = &[
    "Was für ein schöner Moment!",
    "Bleib lächelnd!",
    "Eine wertvolle Erinnerung!",
    "Pure Freude eingefangen!",
    "Schätze diesen Moment!",
];

const JA: &[&str] = &[
    "素敵な瞬間！",
    "笑顔でいてね！",
    "大切な思い出！",
    "喜びの瞬間！",
    "この瞬間を大切に！",
];

const TABLE: &[(&str, &[&str])] = &[
    ("en", EN),
    ("zh", ZH),
    ("es", ES),
    ("fr", FR),
    ("de", DE),
    ("ja", JA),
];

/// Picks one caption per capture, uniformly from a fixed per-locale set.
///
/// Locale tags are reduced to their primary subtag (`"zh-CN"` behaves as
/// `"zh"`); unknown locales fall back to the [`DEFAULT_LOCALE`] set, which is
/// a documented fallback rather than an error. Selection is driven by a
/// session-seeded [`Rng64`], so a fixed seed reproduces the same captions.
/// No state beyond the generator is kept; repeats are possible.
#[derive(Clone, Debug)]
pub struct CaptionProvider {
    rng: Rng64,
}

impl CaptionProvider {
    /// Build a provider from the session seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
        }
    }

    /// One caption for `locale`.
    pub fn caption(&mut self, locale: &str) -> &'static str {
        let set = caption_set(locale);
        let idx = (self.rng.next_u64() % set.len() as u64) as usize;
        set[idx]
    }
}

fn caption_set(locale: &str) -> &'static [&'static str] {
    let primary = locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase();
    TABLE
        .iter()
        .find(|(tag, _)| *tag == primary)
        .map(|(_, set)| *set)
        .unwrap_or(EN)
}

#[cfg(test)]
#[path = "../../tests/unit/caption/provider.rs"]
mod tests;
