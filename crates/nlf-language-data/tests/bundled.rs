use nlf_language_data::{LanguageCatalog, StringKey};

#[test]
fn bundled_catalog_loads_complete_records() {
    let catalog = LanguageCatalog::bundled().expect("bundled catalog should parse");
    assert!(catalog.contains("English"));
    for (name, record) in catalog.iter() {
        assert!(record.id > 0, "{name} has no locale id");
        for (key, value) in record.strings.iter() {
            assert!(!value.is_empty(), "{name}.{key} is empty");
        }
    }
}

#[test]
fn bundled_catalog_matches_known_locale_data() {
    let catalog = LanguageCatalog::bundled().expect("bundled catalog");

    let english = catalog.lookup("English").expect("english");
    assert_eq!(english.id, 1033);
    assert_eq!(english.code_page, None);
    assert!(!english.rtl);
    assert_eq!(&english.strings[StringKey::Branding], "Nullsoft Install System %s");
    assert_eq!(&english.strings[StringKey::Kilo], "\" K\"");

    let arabic = catalog.lookup("Arabic").expect("arabic");
    assert_eq!(arabic.id, 1025);
    assert_eq!(arabic.code_page, Some(1256));
    assert!(arabic.rtl);

    let japanese = catalog.lookup("Japanese").expect("japanese");
    assert_eq!(japanese.id, 1041);
    assert_eq!(japanese.font.name.as_deref(), Some("ＭＳ Ｐゴシック"));
    assert_eq!(japanese.font.size, Some(9));
    assert_eq!(japanese.code_page, Some(932));
}

#[test]
fn bundled_catalog_covers_every_nsis_language() {
    let catalog = LanguageCatalog::bundled().expect("bundled catalog");
    assert_eq!(catalog.len(), 68);

    let chinese = catalog.lookup("SimpChinese").expect("simplified chinese");
    assert_eq!(chinese.id, 2052);
    assert_eq!(chinese.long.as_deref(), Some("Chinese (Simplified)"));
    assert_eq!(chinese.code_page, Some(936));
    assert_eq!(chinese.fallback, None);

    let hebrew = catalog.lookup("Hebrew").expect("hebrew");
    assert_eq!(hebrew.id, 1037);
    assert_eq!(hebrew.code_page, Some(1255));
    assert!(hebrew.rtl);

    let spanish = catalog.lookup("Spanish").expect("spanish");
    assert_eq!(spanish.id, 1034);
    assert_eq!(&spanish.strings[StringKey::CancelBtn], "Cancelar");

    let russian = catalog.lookup("Russian").expect("russian");
    assert_eq!(russian.id, 1049);
    assert_eq!(russian.code_page, Some(1251));
    assert!(russian.strings[StringKey::Kilo].starts_with("\" "));

    let mut ids: Vec<u32> = catalog.iter().map(|(_, record)| record.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), catalog.len(), "locale ids must be unique");
}

#[test]
fn untranslated_languages_borrow_their_fallback_strings() {
    let catalog = LanguageCatalog::bundled().expect("bundled catalog");
    let english = catalog.lookup("English").expect("english");

    let slovak = catalog.lookup("Slovak").expect("slovak");
    assert_eq!(slovak.id, 1051);
    assert_eq!(slovak.fallback.as_deref(), Some("English"));
    assert_eq!(slovak.strings, english.strings);

    let international = catalog.lookup("SpanishInternational").expect("spanish (intl)");
    let spanish = catalog.lookup("Spanish").expect("spanish");
    assert_eq!(international.id, 3082);
    assert_eq!(international.fallback.as_deref(), Some("Spanish"));
    assert_eq!(international.strings, spanish.strings);
}

#[test]
fn bundled_choices_are_sorted_by_display_name() {
    let catalog = LanguageCatalog::bundled().expect("bundled catalog");
    let choices = catalog.choices();
    let displays: Vec<String> = choices
        .iter()
        .map(|choice| choice.display.to_lowercase())
        .collect();
    let mut sorted = displays.clone();
    sorted.sort();
    assert_eq!(displays, sorted);

    let keys: Vec<&str> = choices.iter().map(|choice| choice.key.as_str()).collect();
    let catalan = keys.iter().position(|key| *key == "Catalan").expect("catalan");
    assert_eq!(&keys[catalan..catalan + 3], ["Catalan", "SimpChinese", "TradChinese"]);
}
