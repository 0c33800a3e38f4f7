use std::time::Duration;

use clap::Parser;
use coin_dash::config::Config;
use coin_dash::GameError;

#[test]
fn defaults_match_the_classic_arena() {
    let c = Config::try_parse_from(["coin_dash"]).unwrap();
    assert_eq!((c.width, c.height), (400, 300));
    assert_eq!(c.frame_period().unwrap(), Duration::from_millis(33));
    assert!(c.seed.is_none());
    assert!(c.log_file.is_none());
}

#[test]
fn flags_override_defaults() {
    let c = Config::try_parse_from([
        "coin_dash",
        "--width",
        "600",
        "--height",
        "400",
        "--seed",
        "9",
        "--frame-ms",
        "50",
    ])
    .unwrap();
    assert_eq!((c.width, c.height), (600, 400));
    assert_eq!(c.seed, Some(9));
    assert_eq!(c.frame_period().unwrap(), Duration::from_millis(50));
}

#[test]
fn grid_rounds_partial_cells_up() {
    let c = Config {
        width: 405,
        height: 300,
        ..Config::default()
    };
    assert_eq!(c.grid_size().unwrap(), (41, 15));
}

#[test]
fn huge_cells_cover_the_arena_in_one_cell() {
    let c = Config {
        cell_width: i32::MAX,
        cell_height: i32::MAX,
        ..Config::default()
    };
    assert_eq!(c.grid_size().unwrap(), (1, 1));
    assert!(c.validate(80, 24).is_ok());
}

#[test]
fn huge_arena_with_matching_cells_validates() {
    let c = Config {
        width: 2_000_000_000,
        cell_width: 100_000_000,
        ..Config::default()
    };
    assert_eq!(c.grid_size().unwrap(), (20, 15));
    assert!(c.validate(200, 100).is_ok());
}

#[test]
fn default_arena_fits_a_classic_terminal() {
    assert!(Config::default().validate(80, 24).is_ok());
}

#[test]
fn small_terminal_is_rejected() {
    let err = Config::default().validate(30, 24).unwrap_err();
    assert!(matches!(
        err,
        GameError::TerminalTooSmall { need_cols: 42, need_rows: 19, .. }
    ));
}

#[test]
fn invalid_settings_are_rejected() {
    let tiny = Config {
        width: 10,
        ..Config::default()
    };
    assert!(matches!(tiny.bounds(), Err(GameError::ArenaTooSmall { .. })));

    let zero_cell = Config {
        cell_width: 0,
        ..Config::default()
    };
    assert!(matches!(
        zero_cell.grid_size(),
        Err(GameError::ZeroCellSize { .. })
    ));

    let slow = Config {
        frame_ms: 0,
        ..Config::default()
    };
    assert!(matches!(
        slow.frame_period(),
        Err(GameError::FramePeriodOutOfRange(0))
    ));
}
