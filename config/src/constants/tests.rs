//! Tests for the validated cutter configuration.

use super::*;

/// Ensures default settings are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::CutterConfig;
/// let cfg = CutterConfig::default();
/// assert!(cfg.cap_tolerance > 0.0);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = CutterConfig::default();
    assert!(cfg.cap_tolerance > 0.0);
    assert!(cfg.segments >= MIN_SEGMENTS);
    assert_eq!(CutterConfig::new(cfg.segments, cfg.cap_tolerance), Ok(cfg));
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::CutterConfig;
/// assert!(CutterConfig::new(24, 0.0).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        CutterConfig::new(24, 0.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        CutterConfig::new(2, 0.01).unwrap_err(),
        ConfigError::InvalidSegments(2)
    );
    assert!(CutterConfig::new(24, f64::NAN).is_err());
}

#[test]
fn error_messages_name_the_field() {
    assert!(ConfigError::InvalidSegments(1).to_string().contains("segments"));
    assert!(ConfigError::InvalidTolerance(-1.0)
        .to_string()
        .contains("cap_tolerance"));
}
