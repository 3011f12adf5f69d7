use super::*;

mod mapping {
    use super::*;

    #[test]
    fn success_maps_to_green() {
        let result = BuildResult::Success;
        assert_eq!(IndicatorCommand::from(&result), IndicatorCommand::Green);
    }

    #[test]
    fn failure_maps_to_red() {
        let result = BuildResult::Failure;
        assert_eq!(IndicatorCommand::from(&result), IndicatorCommand::Red);
    }

    #[test]
    fn other_results_map_to_amber() {
        for raw in ["UNSTABLE", "ABORTED", "NOT_BUILT", "anything"] {
            let result = BuildResult::Other(raw.to_string());
            assert_eq!(IndicatorCommand::from(&result), IndicatorCommand::Amber);
        }
    }

    #[test]
    fn empty_result_maps_to_amber() {
        let result = BuildResult::Other(String::new());
        assert_eq!(IndicatorCommand::from(&result), IndicatorCommand::Amber);
    }
}

mod wire_form {
    use super::*;

    #[test]
    fn commands_have_fixed_wire_bytes() {
        assert_eq!(IndicatorCommand::Green.as_bytes(), b"0F0\n");
        assert_eq!(IndicatorCommand::Red.as_bytes(), b"F00\n");
        assert_eq!(IndicatorCommand::Amber.as_bytes(), b"FF0\n");
    }

    #[test]
    fn commands_are_newline_terminated_ascii() {
        for command in [
            IndicatorCommand::Green,
            IndicatorCommand::Red,
            IndicatorCommand::Amber,
        ] {
            let bytes = command.as_bytes();
            assert!(bytes.is_ascii());
            assert_eq!(bytes[3], b'\n');
        }
    }

    #[test]
    fn displays_the_color_name() {
        assert_eq!(IndicatorCommand::Green.to_string(), "green");
        assert_eq!(IndicatorCommand::Red.to_string(), "red");
        assert_eq!(IndicatorCommand::Amber.to_string(), "amber");
    }
}
