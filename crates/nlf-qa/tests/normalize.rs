use nlf_qa::normalize;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "[a-zA-Z0-9 _.-]{0,24}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(once.as_str()), once);
    }

    #[test]
    fn normalized_names_contain_no_separators(raw in "[a-zA-Z ]{1,24}") {
        let name = normalize(&raw);
        prop_assert!(name.as_str().chars().all(char::is_alphabetic));
    }

    #[test]
    fn unicode_letters_stay_idempotent(raw in "[a-zA-Zàéîöüçñßæø ]{0,16}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(once.as_str()), once);
    }
}

#[test]
fn known_labels() {
    for (raw, expected) in [
        ("My Language", "MyLanguage"),
        ("test-language", "TestLanguage"),
        ("awesome_lang", "AwesomeLang"),
        ("SHOUTING CASE", "ShoutingCase"),
        ("français", "Français"),
        ("RTL Test", "RtlTest"),
    ] {
        assert_eq!(normalize(raw).as_str(), expected, "{raw}");
    }
}
