use super::*;

#[test]
fn unknown_locale_falls_back_to_default_set() {
    let mut provider = CaptionProvider::new(7);
    for _ in 0..32 {
        let caption = provider.caption("xx");
        assert!(EN.contains(&caption), "unexpected caption: {caption}");
    }
}

#[test]
fn known_locales_draw_from_their_own_set() {
    for (tag, set) in [("zh", ZH), ("es", ES), ("fr", FR), ("de", DE), ("ja", JA)] {
        let mut provider = CaptionProvider::new(1);
        for _ in 0..16 {
            let caption = provider.caption(tag);
            assert!(set.contains(&caption), "{tag}: unexpected caption {caption}");
        }
    }
}

#[test]
fn region_tags_reduce_to_primary_subtag() {
    let mut provider = CaptionProvider::new(9);
    assert!(ZH.contains(&provider.caption("zh-CN")));
    assert!(ZH.contains(&provider.caption("zh_TW")));
    assert!(EN.contains(&provider.caption("EN_us")));
}

#[test]
fn fixed_seed_reproduces_choices() {
    let mut a = CaptionProvider::new(123);
    let mut b = CaptionProvider::new(123);
    for _ in 0..16 {
        assert_eq!(a.caption("fr"), b.caption("fr"));
    }
}

#[test]
fn empty_locale_uses_default_set() {
    let mut provider = CaptionProvider::new(0);
    assert!(EN.contains(&provider.caption("")));
}
