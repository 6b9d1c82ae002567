//! Tests for log level functionality.

use zlog::Level;
use zlog::level::{DEBUG, ERROR, FATAL, INFO, SILENCE, TRACE, VERBOSE, WARNING};

#[test]
fn level_ordering() {
    assert!(Level::Verbose < Level::Trace);
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Error);
    assert!(Level::Error < Level::Fatal);
    assert!(Level::Fatal < Level::Silence);
}

#[test]
fn constants_follow_ordinals() {
    let constants = [VERBOSE, TRACE, DEBUG, INFO, WARNING, ERROR, FATAL, SILENCE];
    for (ordinal, level) in constants.into_iter().enumerate() {
        assert_eq!(level as usize, ordinal);
    }
}

#[test]
fn level_display() {
    assert_eq!(Level::Verbose.to_string(), "VERBOSE");
    assert_eq!(Level::Warning.to_string(), "WARNING");
    assert_eq!(Level::Fatal.to_string(), "FATAL");
    assert_eq!(zlog::LEVEL_NAMES[Level::Error as usize], "ERROR");
}

#[test]
fn level_from_str() {
    assert_eq!("verbose".parse::<Level>().unwrap(), Level::Verbose);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("silence".parse::<Level>().unwrap(), Level::Silence);
}

#[test]
fn level_from_str_invalid() {
    let err = "invalid".parse::<Level>().unwrap_err();
    assert!(err.to_string().contains("invalid"));
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Verbose);
}
