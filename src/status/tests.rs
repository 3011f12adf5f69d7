use super::*;

mod build_result {
    use super::*;

    #[test]
    fn recognizes_success() {
        assert_eq!(BuildResult::from("SUCCESS"), BuildResult::Success);
    }

    #[test]
    fn recognizes_failure() {
        assert_eq!(BuildResult::from("FAILURE"), BuildResult::Failure);
    }

    #[test]
    fn other_strings_stay_verbatim() {
        assert_eq!(
            BuildResult::from("UNSTABLE"),
            BuildResult::Other("UNSTABLE".to_string())
        );
        assert_eq!(
            BuildResult::from("ABORTED"),
            BuildResult::Other("ABORTED".to_string())
        );
    }

    #[test]
    fn empty_string_is_other() {
        assert_eq!(
            BuildResult::from(String::new()),
            BuildResult::Other(String::new())
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            BuildResult::from("success"),
            BuildResult::Other("success".to_string())
        );
    }

    #[test]
    fn displays_the_reported_string() {
        assert_eq!(BuildResult::Success.to_string(), "SUCCESS");
        assert_eq!(BuildResult::Failure.to_string(), "FAILURE");
        assert_eq!(
            BuildResult::Other("UNSTABLE".to_string()).to_string(),
            "UNSTABLE"
        );
    }
}

mod build_status {
    use super::*;

    #[test]
    fn parses_a_full_payload() {
        let raw = r##"{"displayName":"#128","result":"FAILURE"}"##;

        let status = serde_json::from_str::<BuildStatus>(raw)
            .expect("payload should deserialize");

        assert_eq!(status.display_name(), "#128");
        assert_eq!(status.result(), &BuildResult::Failure);
    }

    #[test]
    fn empty_result_is_other() {
        let raw = r##"{"displayName":"#129","result":""}"##;

        let status = serde_json::from_str::<BuildStatus>(raw)
            .expect("payload should deserialize");

        assert_eq!(status.result(), &BuildResult::Other(String::new()));
    }

    #[test]
    fn null_result_is_other() {
        let raw = r##"{"displayName":"#130","result":null}"##;

        let status = serde_json::from_str::<BuildStatus>(raw)
            .expect("payload should deserialize");

        assert_eq!(status.result(), &BuildResult::Other(String::new()));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let status = serde_json::from_str::<BuildStatus>("{}")
            .expect("payload should deserialize");

        assert_eq!(status.display_name(), "");
        assert_eq!(status.result(), &BuildResult::Other(String::new()));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = r##"{
            "displayName": "#131",
            "result": "SUCCESS",
            "building": false,
            "duration": 421337
        }"##;

        let status = serde_json::from_str::<BuildStatus>(raw)
            .expect("payload should deserialize");

        assert_eq!(status.display_name(), "#131");
        assert_eq!(status.result(), &BuildResult::Success);
    }

    #[test]
    fn non_json_body_fails() {
        let raw = "<html><body>401 Unauthorized</body></html>";

        serde_json::from_str::<BuildStatus>(raw)
            .expect_err("an html error page should not deserialize");
    }
}
