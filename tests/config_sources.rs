use std::fs;
use tempfile::TempDir;
use zlog::{ColorMode, Config, Error, Level, LevelLogger};

#[test]
fn load_with_sources_merges_module_tables() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    let child_path = tmp_dir.path().join("child.toml");

    let base_content = format!(
        r#"
source = "{}"

[general]
level = "info"

[modules]
"app::net" = "error"
"#,
        child_path.display()
    );
    fs::write(&base_path, base_content).unwrap();

    fs::write(
        &child_path,
        r#"
[general]
level = "fatal"

[modules]
"app::net" = "verbose"
"app::db" = "silence"
"#,
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.parse_level(), Level::Info);
    assert_eq!(config.modules.get("app::net").unwrap(), "error");
    assert_eq!(config.modules.get("app::db").unwrap(), "silence");
}

#[test]
fn relative_sources_resolve_against_the_including_file() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    fs::write(&base_path, "source = \"extra.toml\"\n").unwrap();
    fs::write(
        tmp_dir.path().join("extra.toml"),
        "[modules]\n\"app::ui\" = \"warning\"\n",
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.modules.get("app::ui").unwrap(), "warning");
}

#[test]
fn load_with_missing_source_is_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");

    let base_content = format!(
        r#"
source = "{}"

[modules]
"app::net" = "error"
"#,
        tmp_dir.path().join("missing.toml").display()
    );
    fs::write(&base_path, base_content).unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert!(config.modules.contains_key("app::net"));
}

#[test]
fn load_with_cyclic_sources_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let a_path = tmp_dir.path().join("a.toml");
    let b_path = tmp_dir.path().join("b.toml");

    let a_content = format!(r#"source = "{}""#, b_path.display());
    let b_content = format!(r#"source = "{}""#, a_path.display());
    fs::write(&a_path, a_content).unwrap();
    fs::write(&b_path, b_content).unwrap();

    let err = Config::load_from(&a_path).unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(_)));
}

#[test]
fn shared_source_through_two_branches_is_not_a_cycle() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path();
    fs::write(dir.join("a.toml"), "source = \"b.toml\"\nsource = \"c.toml\"\n").unwrap();
    fs::write(
        dir.join("b.toml"),
        "source = \"d.toml\"\n[modules]\n\"app::b\" = \"info\"\n",
    )
    .unwrap();
    fs::write(
        dir.join("c.toml"),
        "source = \"d.toml\"\n[modules]\n\"app::c\" = \"error\"\n",
    )
    .unwrap();
    fs::write(dir.join("d.toml"), "[modules]\n\"app::d\" = \"trace\"\n").unwrap();

    let config = Config::load_from(&dir.join("a.toml")).unwrap();
    assert_eq!(config.modules.get("app::b").unwrap(), "info");
    assert_eq!(config.modules.get("app::c").unwrap(), "error");
    assert_eq!(config.modules.get("app::d").unwrap(), "trace");
}

#[test]
fn cycle_below_the_root_still_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path();
    fs::write(dir.join("root.toml"), "source = \"x.toml\"\n").unwrap();
    fs::write(dir.join("x.toml"), "source = \"y.toml\"\n").unwrap();
    fs::write(dir.join("y.toml"), "source = \"x.toml\"\n").unwrap();

    let err = Config::load_from(&dir.join("root.toml")).unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(path) if path.ends_with("x.toml")));
}

#[test]
fn included_general_section_is_ignored() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path();
    fs::write(dir.join("base.toml"), "source = \"child.toml\"\n").unwrap();
    fs::write(
        dir.join("child.toml"),
        "[general]\nlevel = \"error\"\ncolors = \"never\"\n[output]\ntimestamp = false\n",
    )
    .unwrap();

    let config = Config::load_from(&dir.join("base.toml")).unwrap();
    assert_eq!(config.parse_level(), Level::Verbose);
    assert_eq!(config.parse_color_mode(), ColorMode::Always);
    assert!(config.output.timestamp);
}

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.parse_level(), Level::Verbose);
    assert_eq!(config.parse_color_mode(), ColorMode::Always);
    assert!(config.output.timestamp);
    assert!(config.modules.is_empty());
}

#[test]
fn syntax_errors_surface_as_parse_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("broken.toml");
    fs::write(&path, "[general\nlevel = ").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn invalid_values_fall_back_and_are_reported() {
    let config = Config::parse(
        r#"
[general]
level = "loud"
colors = "rainbow"

[modules]
"app::ok" = "debug"
"app::bad" = "sometimes"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_level(), Level::Verbose);
    assert_eq!(config.parse_color_mode(), ColorMode::Always);

    let modules = config.module_levels();
    assert_eq!(modules.levels, [("app::ok".to_string(), Level::Debug)]);
    assert_eq!(modules.rejected, ["app::bad"]);
}

#[test]
fn logger_from_loaded_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("zlog.toml");
    fs::write(
        &path,
        r#"
[general]
level = "error"
colors = "never"

[modules]
"app::net" = "trace"
"#,
    )
    .unwrap();

    let logger = LevelLogger::from_config(&Config::load_from(&path).unwrap());
    assert_eq!(logger.global_level(), Level::Error);
    assert_eq!(logger.color_mode(), ColorMode::Never);
    assert_eq!(logger.effective_level("app::net"), Level::Trace);
    assert_eq!(logger.effective_level("app::db"), Level::Error);
}

#[test]
fn validate_rejects_what_the_lenient_path_skips() {
    let good = Config::parse(
        r#"
[general]
level = "warn"
colors = "auto"

[modules]
"app::net" = "off"
"#,
    )
    .unwrap();
    assert!(good.validate().is_ok());

    let bad_global = Config::parse("[general]\nlevel = \"loud\"\n").unwrap();
    let err = bad_global.validate().unwrap_err();
    assert!(matches!(err, Error::InvalidLevel(_)));
    assert!(err.to_string().contains("loud"));

    let bad_colors = Config::parse("[general]\ncolors = \"rainbow\"\n").unwrap();
    assert!(matches!(
        bad_colors.validate().unwrap_err(),
        Error::InvalidColorMode(mode) if mode == "rainbow"
    ));

    let bad_module = Config::parse("[modules]\n\"app::db\" = \"sometimes\"\n").unwrap();
    let err = bad_module.validate().unwrap_err();
    assert!(matches!(&err, Error::InvalidLevel(msg) if msg.starts_with("app::db: ")));
}
