use super::*;

use error::SettingsError;

mod from_json {
    use super::*;

    #[test]
    fn loads_all_fields_verbatim() {
        let raw = r#"{"url":"https://ci.example/job/x/lastBuild/api/json","user":"bob","password":"secret"}"#;

        let settings = Settings::from_json(raw).expect("settings must parse");

        assert_eq!(
            settings.url(),
            "https://ci.example/job/x/lastBuild/api/json"
        );
        assert_eq!(settings.user(), "bob");
        assert_eq!(settings.password(), "secret");
    }

    #[test]
    fn ignores_unknown_fields() {
        let raw = r#"{"url":"u","user":"a","password":"b","theme":"dark"}"#;

        let settings = Settings::from_json(raw).expect("settings must parse");
        assert_eq!(settings.user(), "a");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Settings::from_json("not json").expect_err("parse must fail");
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        let err = Settings::from_json(r#"{"url":"u"}"#).expect_err("parse must fail");
        assert!(matches!(err, SettingsError::Json(_)));
    }
}

mod from_file {
    use super::*;

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("definitely/not/here/settings.json");

        let err = Settings::from_file(path).expect_err("load must fail");
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
