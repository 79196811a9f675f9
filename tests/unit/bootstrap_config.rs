use super::*;
use crate::core::types::LanguageCode;

fn parse_config(toml_str: &str) -> Config {
    toml::from_str::<Config>(toml_str).unwrap()
}

const MINIMAL: &str = r#"
    [database]
    db_file = "bot.db"

    [telegram]
    bot_token = "token"
    admin_chat_id = 1

    [general]
"#;

#[test]
fn defaults_are_applied() {
    let cfg = parse_config(MINIMAL);
    assert_eq!(cfg.general.default_lang, LanguageCode::Ru);
    assert_eq!(cfg.general.log_level, LogLevelConfig::Info);
    assert_eq!(cfg.operational_parameters.timezone, chrono_tz::Europe::Berlin);
    assert_eq!(cfg.operational_parameters.scheduler_tick, 60);
}

#[test]
fn operational_parameters_override() {
    let cfg = parse_config(
        r#"
        [general]
        default_lang = "en"
        log_level = "debug"

        [database]
        db_file = "bot.db"

        [telegram]
        bot_token = "token"
        admin_chat_id = 99

        [operational_parameters]
        timezone = "Europe/Moscow"
        scheduler_tick_seconds = 30
        "#,
    );
    assert_eq!(cfg.general.default_lang, LanguageCode::En);
    assert_eq!(cfg.general.log_level, LogLevelConfig::Debug);
    assert_eq!(cfg.telegram.admin_chat_id, 99);
    assert_eq!(cfg.operational_parameters.timezone, chrono_tz::Europe::Moscow);
    assert_eq!(cfg.operational_parameters.scheduler_tick, 30);
}

#[test]
fn unknown_timezone_is_rejected() {
    let result = toml::from_str::<Config>(
        r#"
        [general]

        [database]
        db_file = "bot.db"

        [telegram]
        bot_token = "token"
        admin_chat_id = 1

        [operational_parameters]
        timezone = "Mars/Olympus"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn missing_token_is_rejected() {
    let result = toml::from_str::<Config>(
        r#"
        [general]

        [database]
        db_file = "bot.db"

        [telegram]
        admin_chat_id = 1
        "#,
    );
    assert!(result.is_err());
}
