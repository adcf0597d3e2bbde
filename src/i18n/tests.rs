use super::*;

fn translator(tag: &str) -> Translator {
    Translator::new(Arc::new(LocalizationTable::builtin()), Some(tag), Locale::En)
}

#[test]
fn test_builtin_table_validates() {
    let table = LocalizationTable::builtin();
    assert!(table.validate(Locale::En).is_ok());
    assert!(table.validate(Locale::Es).is_ok());
}

#[test]
fn test_all_keys_non_empty_for_every_locale() {
    let table = LocalizationTable::builtin();
    for locale in Locale::ALL {
        for key in MessageKey::ALL {
            let val = table
                .get(locale, key)
                .unwrap_or_else(|| panic!("{} missing for {locale}", key.as_str()));
            assert!(!val.trim().is_empty(), "{} blank for {locale}", key.as_str());
        }
    }
}

#[test]
fn test_unsupported_locale_matches_default() {
    for key in MessageKey::ALL {
        assert_eq!(
            translator("fr-FR").resolve(key, &["X"]).unwrap(),
            translator("en-US").resolve(key, &["X"]).unwrap(),
            "key {} should fall back to English",
            key.as_str()
        );
    }
}

#[test]
fn test_spanish_prefix_match() {
    let t = translator("es-MX");
    assert_eq!(t.locale(), Locale::Es);
    assert_eq!(t.t(MessageKey::Goodbye).unwrap(), "¡Adiós Arlette!");
    assert_eq!(translator("es-ES").t(MessageKey::Goodbye).unwrap(), "¡Adiós Arlette!");
}

#[test]
fn test_english_strings() {
    let t = translator("en-GB");
    assert_eq!(t.t(MessageKey::Goodbye).unwrap(), "Goodbye!");
    assert_eq!(
        t.t(MessageKey::Help).unwrap(),
        "You can say: tell me about basketball. How can I help?"
    );
    assert_eq!(t.t(MessageKey::GetFact).unwrap(), "A fun fact is Arlette... ");
}

#[test]
fn test_positional_argument_substitution() {
    assert_eq!(
        translator("en-US")
            .resolve(MessageKey::Reflector, &["FooIntent"])
            .unwrap(),
        "You just triggered FooIntent"
    );
    assert_eq!(
        translator("es-US")
            .resolve(MessageKey::Reflector, &["FooIntent"])
            .unwrap(),
        "Acabas de activar FooIntent"
    );
}

#[test]
fn test_missing_key_falls_back_to_default_locale() {
    const EN: &[(MessageKey, &str)] = &[(MessageKey::Help, "help me")];
    const ES: &[(MessageKey, &str)] = &[(MessageKey::Goodbye, "adiós")];
    let table = Arc::new(LocalizationTable::from_entries(&[
        (Locale::En, EN),
        (Locale::Es, ES),
    ]));
    let t = Translator::new(table, Some("es-ES"), Locale::En);
    assert_eq!(t.t(MessageKey::Goodbye).unwrap(), "adiós");
    assert_eq!(t.t(MessageKey::Help).unwrap(), "help me");
}

#[test]
fn test_missing_everywhere_is_error() {
    const EN: &[(MessageKey, &str)] = &[(MessageKey::Help, "help me")];
    let table = Arc::new(LocalizationTable::from_entries(&[(Locale::En, EN)]));
    let t = Translator::new(table.clone(), Some("es-ES"), Locale::En);
    let err = t.t(MessageKey::Welcome).unwrap_err();
    assert!(
        matches!(err, SkillError::MissingTranslation { ref key, ref locale, .. }
            if key == "WELCOME_MSG" && locale == "es"),
        "unexpected error: {err}"
    );
    assert!(matches!(
        table.validate(Locale::En),
        Err(SkillError::MissingTranslation { .. })
    ));
}

#[test]
fn test_blank_template_fails_validation() {
    let mut rows: Vec<(MessageKey, &'static str)> =
        MessageKey::ALL.iter().map(|k| (*k, "text")).collect();
    rows[0].1 = "   ";
    let rows: &'static [(MessageKey, &'static str)] = Box::leak(rows.into_boxed_slice());
    let table = LocalizationTable::from_entries(&[(Locale::En, rows)]);
    assert!(matches!(
        table.validate(Locale::En),
        Err(SkillError::Config(_))
    ));
}

#[test]
fn test_format_positional() {
    assert_eq!(format_positional("plain", &["x"]), "plain");
    assert_eq!(format_positional("%s and %s", &["a", "b"]), "a and b");
    assert_eq!(format_positional("%2$s before %1$s", &["a", "b"]), "b before a");
    assert_eq!(format_positional("100%% sure, %s", &["yes"]), "100% sure, yes");
    assert_eq!(format_positional("missing: [%s]", &[]), "missing: []");
    assert_eq!(format_positional("extra %s", &["a", "b"]), "extra a");
    assert_eq!(format_positional("odd %d %", &["a"]), "odd %d %");
    assert_eq!(format_positional("%0$s", &["a"]), "%0$s");
}
