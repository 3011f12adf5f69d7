use super::*;

mod select_device_name {
    use super::*;

    #[test]
    fn picks_first_matching_name_in_listing_order() {
        let names = ["ttyUSB3", "ttyACM0"];
        assert_eq!(select_device_name(names), Some("ttyUSB3"));
    }

    #[test]
    fn skips_non_matching_names() {
        let names = ["ttyACM0", "sda1", "ttyUSB0"];
        assert_eq!(select_device_name(names), Some("ttyUSB0"));
    }

    #[test]
    fn recognizes_apple_style_adapters() {
        let names = ["tty.Bluetooth-Incoming-Port", "tty.usbserial-AQ0445MZ"];
        assert_eq!(select_device_name(names), Some("tty.usbserial-AQ0445MZ"));
    }

    #[test]
    fn returns_none_without_any_match() {
        let names = ["ttyS0", "ttyACM0", "null"];
        assert_eq!(select_device_name(names), None);
    }

    #[test]
    fn returns_none_for_an_empty_listing() {
        assert_eq!(select_device_name(Vec::<String>::new()), None);
    }
}

mod locate {
    use super::*;

    #[test]
    fn returns_full_path_of_first_match() {
        let dir = std::env::temp_dir().join("buildlamp-locate-match");
        fs::create_dir_all(&dir).expect("temp dir must be created");
        fs::write(dir.join("ttyACM0"), b"").expect("entry must be created");
        fs::write(dir.join("ttyUSB3"), b"").expect("entry must be created");

        let path = locate(&dir).expect("device must be found");
        assert_eq!(path, dir.join("ttyUSB3"));
    }

    #[test]
    fn no_matching_entry_is_no_device_found() {
        let dir = std::env::temp_dir().join("buildlamp-locate-no-match");
        fs::create_dir_all(&dir).expect("temp dir must be created");
        fs::write(dir.join("ttyS0"), b"").expect("entry must be created");

        let err = locate(&dir).expect_err("locate must fail");
        assert!(matches!(err, DeviceError::NoDeviceFound { .. }));
    }

    #[test]
    fn unreadable_directory_is_fatal() {
        let err = locate(Path::new("definitely/not/here")).expect_err("locate must fail");
        assert!(matches!(err, DeviceError::DirUnreadable { .. }));
    }
}
