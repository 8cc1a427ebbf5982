use scrub::cleaner::CleanupEngine;
use scrub::config::Config;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const APP_JS: &str = "\
function init() {
  console.log(\"booting\", state(now()));
  el.classList.add('used');
}
";

const COMPONENT_JSX: &str = "\
export const Card = () => <div className=\"card used\">hi</div>;
";

const STYLES_CSS: &str = "\
.used { color: red; }
.unused {
  color: blue;
  border: 1px solid black;
}
.card { padding: 4px; }
.a.b { margin: 0; }
";

fn write_fixture_project() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("components")).unwrap();
    fs::create_dir_all(src.join("node_modules").join("pkg")).unwrap();

    fs::write(src.join("app.js"), APP_JS).unwrap();
    fs::write(src.join("components").join("card.jsx"), COMPONENT_JSX).unwrap();
    fs::write(src.join("styles.css"), STYLES_CSS).unwrap();
    fs::write(
        src.join("node_modules").join("pkg").join("vendored.js"),
        "console.log('vendored');\n",
    )
    .unwrap();

    dir
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn cleans_a_fixture_project_end_to_end() {
    let project = write_fixture_project();
    let src = project.path().join("src");

    let stats = CleanupEngine::new(Config::default()).clean(project.path());

    assert!(stats.errors.is_empty(), "unexpected errors: {:?}", stats.errors);

    // Debug call stripped, class reference kept.
    let app = read(&src.join("app.js"));
    assert!(!app.contains("console.log"));
    assert!(app.contains("classList.add('used')"));
    assert_eq!(stats.console_logs_removed, 1);

    // Unused rule dropped over its full span; used, referenced-by-attribute,
    // and compound rules survive.
    let css = read(&src.join("styles.css"));
    assert!(css.contains(".used"));
    assert!(css.contains(".card"));
    assert!(css.contains(".a.b"));
    assert!(!css.contains(".unused"));
    assert!(!css.contains("border"));
    assert_eq!(stats.css_classes_removed, 1);

    // app.js and styles.css changed; card.jsx was scanned but untouched.
    assert_eq!(stats.files_processed, 2);

    // Ignored directories are never rewritten.
    let vendored = read(&src.join("node_modules").join("pkg").join("vendored.js"));
    assert_eq!(vendored, "console.log('vendored');\n");
}

#[test]
fn second_run_finds_nothing_left_to_do() {
    let project = write_fixture_project();

    let first = CleanupEngine::new(Config::default()).clean(project.path());
    assert_eq!(first.files_processed, 2);

    let second = CleanupEngine::new(Config::default()).clean(project.path());
    assert_eq!(second.files_processed, 0);
    assert_eq!(second.console_logs_removed, 0);
    assert_eq!(second.css_classes_removed, 0);
    assert!(second.errors.is_empty());
}

#[test]
fn dry_run_reports_without_writing() {
    let project = write_fixture_project();
    let src = project.path().join("src");

    let stats = CleanupEngine::new(Config::default())
        .dry_run(true)
        .clean(project.path());

    assert_eq!(stats.console_logs_removed, 1);
    assert_eq!(stats.css_classes_removed, 1);
    assert_eq!(stats.files_processed, 2);

    // Nothing on disk moved.
    assert_eq!(read(&src.join("app.js")), APP_JS);
    assert_eq!(read(&src.join("styles.css")), STYLES_CSS);
}

#[test]
fn class_delta_matches_reextracted_sets() {
    let project = write_fixture_project();
    let src = project.path().join("src");

    let before = scrub::styles::extract_classes(STYLES_CSS);
    let stats = CleanupEngine::new(Config::default()).clean(project.path());
    let after = scrub::styles::extract_classes(&read(&src.join("styles.css")));

    assert!(after.len() <= before.len());
    assert_eq!(
        stats.css_classes_removed,
        (before.len() - after.len()) as u64
    );
}

#[test]
fn nonexistent_root_yields_single_fatal_error() {
    let stats = CleanupEngine::new(Config::default()).clean("/no/such/project/root");

    assert_eq!(stats.errors.len(), 1);
    assert_eq!(stats.errors[0].code, "INVALID_PROJECT_PATH");
    assert_eq!(stats.files_processed, 0);
    assert!(stats.warnings.is_empty());
}

#[test]
fn project_without_src_yields_warning_only() {
    let dir = tempfile::tempdir().unwrap();

    let stats = CleanupEngine::new(Config::default()).clean(dir.path());

    assert!(stats.errors.is_empty());
    assert_eq!(stats.warnings.len(), 1);
    assert_eq!(stats.warnings[0].code, "SRC_DIR_MISSING");
}

#[test]
fn custom_debug_function_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("app.ts"), "logger.debug('x');\nrun();\n").unwrap();

    let config = Config {
        debug_fn: "logger.debug".to_string(),
        ..Config::default()
    };
    let stats = CleanupEngine::new(config).clean(dir.path());

    assert_eq!(stats.console_logs_removed, 1);
    assert!(!read(&src.join("app.ts")).contains("logger.debug"));
}
