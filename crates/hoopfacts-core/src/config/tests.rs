use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.skill.name, "Basketball Curiosities");
    assert_eq!(cfg.skill.default_locale, "en");
    assert_eq!(cfg.skill.fact_intent, "FrasesIntent");
    assert!(cfg.skill.validate_on_start);
    assert_eq!(cfg.logging.level, "info");
    assert!(cfg.logging.dir.is_empty());
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let toml_str = r#"
        [skill]
        default_locale = "es"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.skill.fallback_locale().unwrap(), Locale::Es);
    assert_eq!(cfg.skill.fact_intent, "FrasesIntent");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn test_empty_toml_is_default() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.skill.name, "Basketball Curiosities");
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_unsupported_default_locale_rejected() {
    let toml_str = r#"
        [skill]
        default_locale = "fr"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(
        matches!(err, SkillError::Config(ref m) if m.contains("fr")),
        "unexpected error: {err}"
    );
}

#[test]
fn test_empty_fact_intent_rejected() {
    let toml_str = r#"
        [skill]
        fact_intent = "  "
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert!(matches!(cfg.validate(), Err(SkillError::Config(_))));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__hoopfacts_missing__.toml").unwrap();
    assert_eq!(cfg.skill.fact_intent, "FrasesIntent");
}

#[test]
fn test_load_from_file() {
    let dir = std::env::temp_dir().join(format!("__hoopfacts_cfg_{}__", std::process::id()));
    let _ = std::fs::create_dir_all(&dir);
    let path = dir.join("hoopfacts.toml");
    std::fs::write(
        &path,
        "[skill]\nfact_intent = \"BasketFactIntent\"\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.skill.fact_intent, "BasketFactIntent");
    assert_eq!(cfg.logging.level, "debug");

    std::fs::write(&path, "[skill\nbroken").unwrap();
    assert!(matches!(
        load(path.to_str().unwrap()),
        Err(SkillError::Config(_))
    ));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_shellexpand_leaves_plain_paths() {
    assert_eq!(shellexpand("/var/log/hoopfacts"), "/var/log/hoopfacts");
    assert_eq!(shellexpand("logs"), "logs");
}
