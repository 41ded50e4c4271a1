use std::path::{Path, PathBuf};

use luxmon_settings::settings::{DEFAULT_DATA_FORMAT, DEFAULT_FILE_NAME, DEFAULT_FIXED_COLUMNS};
use luxmon_settings::{dialog, Locale, Settings};
use pretty_assertions::assert_eq;

#[test]
fn default_record_has_literal_defaults() {
    let s = Settings::default();

    assert_eq!(s.window_top, 0);
    assert_eq!(s.window_left, 0);
    assert_eq!(s.window_width, 950);
    assert_eq!(s.window_height, 650);

    assert_eq!(s.location_id, 0);
    assert_eq!(s.sensor_count, 1);
    assert_eq!(s.baud_rate, 9600);
    assert_eq!(s.data_bits, 7);
    assert_eq!(s.stop_bits, 0);
    assert_eq!(s.parity, 2);
    assert_eq!(s.flow_control, 0);
    assert_eq!(s.char_on, 11);
    assert_eq!(s.char_off, 13);
    assert_eq!(s.sample_frequency, 2.0);

    assert_eq!(s.array_points, 7200);
    assert_eq!(s.window_points, 20);
    assert!(s.show_illuminance);
    assert!(s.show_distribution);
    assert!(s.show_average);
    assert!(s.show_ratios);
    assert!(s.distribution_is_radar);
    assert_eq!(s.px_between_legends, 10);

    assert!(s.remember_dialog_path);
    assert_eq!(s.default_save_path, dialog::desktop_dir());
    assert_eq!(s.user_save_path, dialog::desktop_dir());
    assert_eq!(s.default_open_path, dialog::examples_dir_beside_exe());
    assert_eq!(s.user_open_path, dialog::examples_dir_beside_exe());

    assert_eq!(s.file_name, PathBuf::from(DEFAULT_FILE_NAME));
    assert_eq!(s.install_path, PathBuf::new());
    assert_eq!(s.fixed_columns, DEFAULT_FIXED_COLUMNS);
    assert_eq!(s.data_format, DEFAULT_DATA_FORMAT);
    assert!(s.icons.is_empty());

    // The default locale comes from the environment; it must at least
    // round-trip through its own canonical name.
    let name = s.locale_name().to_string();
    assert_eq!(Locale::resolve(&name).unwrap(), s.locale);
}

#[test]
fn reinitialize_resets_runtime_fields_regardless_of_prior_state() {
    let mut s = Settings::default();
    s.file_name = PathBuf::from("elsewhere.json");
    s.install_path = PathBuf::from("/nonexistent/previous");
    s.fixed_columns = 42;
    s.data_format = "0.000000".to_string();

    let install = Path::new("/nonexistent/install-dir");
    s.reinitialize_runtime_fields(Some(install));

    assert_eq!(s.file_name, PathBuf::from(DEFAULT_FILE_NAME));
    assert_eq!(s.install_path, install.to_path_buf());
    assert_eq!(s.fixed_columns, DEFAULT_FIXED_COLUMNS);
    assert_eq!(s.data_format, DEFAULT_DATA_FORMAT);
}

#[test]
fn reinitialize_without_install_dir_leaves_path_empty() {
    let mut s = Settings::default();
    s.install_path = PathBuf::from("/nonexistent/previous");
    s.reinitialize_runtime_fields(None);
    assert_eq!(s.install_path, PathBuf::new());
}

#[test]
fn with_install_dir_skips_missing_icons_silently() {
    let s = Settings::with_install_dir("/nonexistent/install-dir");
    assert_eq!(s.install_path, PathBuf::from("/nonexistent/install-dir"));
    assert!(s.icons.is_empty());
    // Everything else stays at the factory defaults.
    assert_eq!(s.baud_rate, 9600);
    assert_eq!(s.window_width, 950);
}

#[test]
fn locale_accessor_pair() {
    let mut s = Settings::default();
    s.set_locale_name("fr_fr").unwrap();
    assert_eq!(s.locale_name(), "fr-FR");
    assert_eq!(s.milliseconds_format(), "$1,fff");

    // An invalid name fails and leaves the locale untouched.
    assert!(s.set_locale_name("no-such-locale-at-all").is_err());
    assert_eq!(s.locale_name(), "fr-FR");
}

#[test]
fn milliseconds_format_follows_locale_changes_without_caching() {
    let mut s = Settings::default();
    s.set_locale_name("en-US").unwrap();
    assert_eq!(s.milliseconds_format(), "$1.fff");
    s.set_locale_name("de-DE").unwrap();
    assert_eq!(s.milliseconds_format(), "$1,fff");
}
