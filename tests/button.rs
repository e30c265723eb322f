mod tests {
    use motion_saber::LatchedButton;

    #[test]
    fn test_fires_once_per_hold() {
        let mut button = LatchedButton::new();
        assert!(button.update(true));
        // held across further polls: no repeat fire
        assert!(!button.update(true));
        assert!(!button.update(true));
    }

    #[test]
    fn test_rearms_on_release() {
        let mut button = LatchedButton::new();
        assert!(button.update(true));
        assert!(!button.update(false));
        assert!(button.update(true));
    }

    #[test]
    fn test_released_never_fires() {
        let mut button = LatchedButton::new();
        assert!(!button.update(false));
        assert!(!button.update(false));
    }
}
