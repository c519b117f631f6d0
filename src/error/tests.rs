// envalid-unused: Unused Environment Variable Detector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvalidError, EnvalidResult, KeysError, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "output_log_level".to_string(),
        message: "log level must be 0-6, got 9".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'output_log_level' in section '[global]': log level must be 0-6, got 9"
    );
}

#[test]
fn test_keys_error_boxes_into_top_level() {
    let err: EnvalidError = KeysError::NotAnObject { kind: "array" }.into();
    assert!(matches!(err, EnvalidError::Keys(_)));
    insta::assert_snapshot!(err.to_string(), @"keys error: expected a key-bearing object, got array");
}

#[test]
fn test_bail_out_message() {
    let err = bail_out("3 unused environment variable(s)");
    insta::assert_snapshot!(err.to_string(), @"fatal error: 3 unused environment variable(s)");
}

#[test]
fn test_envalid_error_size() {
    // Bailed holds a Box<str>, 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<EnvalidError>();
    assert!(size <= 24, "EnvalidError is {size} bytes, expected <= 24");
}

#[test]
fn test_envalid_result_size() {
    let size = std::mem::size_of::<EnvalidResult<()>>();
    assert!(size <= 24, "EnvalidResult<()> is {size} bytes, expected <= 24");
}
