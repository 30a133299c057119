use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use react_forge::error::{Error, Result};
use react_forge::renderer::MiniJinjaRenderer;
use react_forge::runner::CommandRunner;
use react_forge::scaffold::{Mode, Scaffolder};
use react_forge::templates;
use test_log::test;
use walkdir::WalkDir;

/// A single recorded external command call.
#[derive(Debug, Clone, PartialEq)]
struct Invocation {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

/// Runner that records every call and reports success, so tests can assert
/// on the exact argument lists without spawning real processes.
#[derive(Default)]
struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], working_dir: &Path) -> Result<()> {
        self.invocations.borrow_mut().push(Invocation {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            cwd: working_dir.to_path_buf(),
        });
        Ok(())
    }
}

/// Runner whose first call fails, simulating a broken installer.
#[cfg(unix)]
struct FailingRunner;

#[cfg(unix)]
impl CommandRunner for FailingRunner {
    fn run(&self, program: &str, _args: &[&str], _working_dir: &Path) -> Result<()> {
        use std::os::unix::process::ExitStatusExt;
        Err(Error::CommandFailedError {
            command: program.to_string(),
            status: std::process::ExitStatus::from_raw(256),
        })
    }
}

/// Lists all files below `root` as sorted slash-separated relative paths.
fn collect_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}

fn read_manifest(target: &Path) -> serde_json::Value {
    let content = fs::read_to_string(target.join("package.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn new_project_writes_the_expected_tree() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let target = tmp_dir.path().join("my-app");
    let engine = MiniJinjaRenderer::new();
    let runner = RecordingRunner::default();

    let scaffolder =
        Scaffolder::new(&engine, &runner, target.clone(), "my-app", Mode::NewProject);
    scaffolder.scaffold().unwrap();

    assert_eq!(
        collect_files(&target),
        [
            ".babelrc",
            ".eslintrc",
            ".gitignore",
            ".travis.yml",
            "__mocks__/fileMock.js",
            "package.json",
            "src/index.html",
            "src/index.js",
            "src/setupTests.js",
            "webpack.config.js",
        ]
    );

    let manifest = read_manifest(&target);
    assert_eq!(manifest["name"], "my-app");
    assert_eq!(manifest["version"], "1.0.0");
    assert_eq!(manifest["license"], "ISC");
    assert_eq!(manifest["main"], "src/index.js");
}

#[test]
fn new_project_runs_install_and_git_init_in_order() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let target = tmp_dir.path().join("my-app");
    let engine = MiniJinjaRenderer::new();
    let runner = RecordingRunner::default();

    Scaffolder::new(&engine, &runner, target.clone(), "my-app", Mode::NewProject)
        .scaffold()
        .unwrap();

    let invocations = runner.invocations.borrow();
    assert_eq!(invocations.len(), 3);

    assert_eq!(invocations[0].program, "npm");
    assert_eq!(invocations[0].args[..2], ["i", "-D"]);
    assert!(invocations[0].args.contains(&"webpack".to_string()));
    assert!(invocations[0].args.contains(&"jest".to_string()));
    assert!(!invocations[0].args.contains(&"postcss-import".to_string()));

    assert_eq!(invocations[1].program, "npm");
    assert_eq!(invocations[1].args, ["i", "react", "react-dom"]);

    assert_eq!(invocations[2].program, "git");
    assert_eq!(invocations[2].args, ["init"]);

    for invocation in invocations.iter() {
        assert_eq!(invocation.cwd, target);
    }
}

#[test]
fn existing_target_directory_aborts_before_any_write() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let target = tmp_dir.path().join("taken");
    fs::create_dir(&target).unwrap();
    let engine = MiniJinjaRenderer::new();
    let runner = RecordingRunner::default();

    let err = Scaffolder::new(&engine, &runner, target.clone(), "taken", Mode::NewProject)
        .scaffold()
        .unwrap_err();

    match err {
        Error::TargetDirectoryExistsError { target_dir } => {
            assert!(target_dir.ends_with("taken"));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(collect_files(&target).is_empty());
    assert!(runner.invocations.borrow().is_empty());
}

#[test]
fn generated_manifest_maps_styles_and_assets_to_mocks() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let target = tmp_dir.path().join("my-app");
    let engine = MiniJinjaRenderer::new();
    let runner = RecordingRunner::default();

    Scaffolder::new(&engine, &runner, target.clone(), "my-app", Mode::NewProject)
        .scaffold()
        .unwrap();

    let manifest = read_manifest(&target);
    let mapper = manifest["jest"]["moduleNameMapper"].as_object().unwrap();

    assert_eq!(mapper[r"\.(css)$"], "identity-obj-proxy");

    let (asset_pattern, asset_mock) =
        mapper.iter().find(|(key, _)| key.contains("woff2")).unwrap();
    assert_eq!(*asset_mock, "<rootDir>/__mocks__/fileMock.js");
    for extension in [
        "jpg", "jpeg", "png", "gif", "eot", "otf", "webp", "svg", "ttf", "woff",
        "woff2", "mp4", "webm", "wav", "mp3", "m4a", "aac", "oga",
    ] {
        assert!(
            asset_pattern.contains(extension),
            "pattern is missing the {extension} extension"
        );
    }
}

#[test]
fn html_title_is_the_project_name() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let target = tmp_dir.path().join("hello-title");
    let engine = MiniJinjaRenderer::new();
    let runner = RecordingRunner::default();

    Scaffolder::new(&engine, &runner, target.clone(), "hello-title", Mode::NewProject)
        .scaffold()
        .unwrap();

    let html = fs::read_to_string(target.join("src/index.html")).unwrap();
    assert!(html.contains("<title>hello-title</title>"));
    assert!(html.contains(r#"<div id="root"></div>"#));
}

#[test]
fn in_place_scaffold_wires_component_and_records_baseline_last() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let target = tmp_dir.path().to_path_buf();
    let engine = MiniJinjaRenderer::new();
    let runner = RecordingRunner::default();

    Scaffolder::new(&engine, &runner, target.clone(), "in-place", Mode::InPlace)
        .scaffold()
        .unwrap();

    let files = collect_files(&target);
    assert!(files.contains(&"src/components/App.js".to_string()));
    assert!(files.contains(&"src/components/App.test.js".to_string()));
    assert!(!files.contains(&".gitignore".to_string()));

    let invocations = runner.invocations.borrow();
    assert_eq!(invocations.len(), 4);

    // The extra CSS plugins only join the dev install in place.
    assert!(invocations[0].args.contains(&"postcss-import".to_string()));
    assert!(invocations[0].args.contains(&"postcss-preset-env".to_string()));

    // The baseline test run comes after git init, as the very last step.
    assert_eq!(invocations[2].program, "git");
    assert_eq!(invocations[2].args, ["init"]);
    assert_eq!(invocations[3].program, "npm");
    assert_eq!(invocations[3].args, ["test"]);
}

#[test]
fn in_place_rerun_overwrites_the_root_component() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let target = tmp_dir.path().to_path_buf();
    let engine = MiniJinjaRenderer::new();
    let runner = RecordingRunner::default();

    let components_dir = target.join("src/components");
    fs::create_dir_all(&components_dir).unwrap();
    fs::write(components_dir.join("App.js"), "sentinel").unwrap();
    fs::write(components_dir.join("App.test.js"), "sentinel").unwrap();

    Scaffolder::new(&engine, &runner, target.clone(), "rerun", Mode::InPlace)
        .scaffold()
        .unwrap();

    assert_eq!(
        fs::read_to_string(components_dir.join("App.js")).unwrap(),
        templates::APP_JS
    );
    assert_eq!(
        fs::read_to_string(components_dir.join("App.test.js")).unwrap(),
        templates::APP_TEST_JS
    );
}

#[cfg(unix)]
#[test]
fn failed_install_aborts_the_remaining_pipeline() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let target = tmp_dir.path().join("doomed");
    let engine = MiniJinjaRenderer::new();
    let runner = FailingRunner;

    let err = Scaffolder::new(&engine, &runner, target.clone(), "doomed", Mode::NewProject)
        .scaffold()
        .unwrap_err();

    match err {
        Error::CommandFailedError { command, .. } => assert_eq!(command, "npm"),
        other => panic!("unexpected error: {other}"),
    }

    // The manifest was written before the install step failed; nothing after
    // the failing step exists.
    assert!(target.join("package.json").exists());
    assert!(!target.join("webpack.config.js").exists());
    assert!(!target.join("src").exists());
}
