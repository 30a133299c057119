//! Core scaffolding orchestration.
//!
//! The pipeline is a fixed ordered sequence of steps against the target
//! directory. Each step either writes files with deterministic content or
//! invokes an external command and waits for it. The first failing step
//! aborts the run; there is no rollback of files already written.

use std::path::{Path, PathBuf};

use log::info;
use serde_json::json;

use crate::{
    constants::{
        BABEL_CONFIG_FILENAME, COMPONENTS_DIR, ESLINT_CONFIG_FILENAME,
        GITIGNORE_FILENAME, MANIFEST_FILENAME, MOCKS_DIR, SRC_DIR,
        TRAVIS_CONFIG_FILENAME, WEBPACK_CONFIG_FILENAME,
    },
    deps::{DEPENDENCIES, DEV_DEPENDENCIES, IN_PLACE_EXTRA_DEV_DEPENDENCIES},
    error::Result,
    ioutils::{create_dir_all, create_new_dir, write_file},
    manifest::Manifest,
    renderer::TemplateRenderer,
    runner::CommandRunner,
    templates,
};

/// Which flavor of scaffold run is being performed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Scaffold into a freshly created directory.
    NewProject,
    /// Scaffold into the current directory, wire up a sample component and
    /// record a snapshot baseline.
    InPlace,
}

/// Executes the setup steps in a fixed order against the target directory.
pub struct Scaffolder<'a> {
    engine: &'a dyn TemplateRenderer,
    runner: &'a dyn CommandRunner,
    target_dir: PathBuf,
    project_name: String,
    mode: Mode,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        runner: &'a dyn CommandRunner,
        target_dir: PathBuf,
        project_name: &str,
        mode: Mode,
    ) -> Self {
        Self { engine, runner, target_dir, project_name: project_name.to_string(), mode }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Runs the whole pipeline.
    ///
    /// For a new project the directory-exists check precedes every write, so
    /// rerunning against an existing directory fails without touching it.
    /// In-place runs overwrite generated files silently.
    pub fn scaffold(&self) -> Result<()> {
        if self.mode == Mode::NewProject {
            create_new_dir(&self.target_dir)?;
        }

        self.write_manifest()?;
        self.install_dependencies()?;
        self.write_webpack_config()?;
        self.write_babel_config()?;
        self.write_eslint_config()?;
        self.write_sources()?;
        if self.mode == Mode::InPlace {
            self.write_root_component()?;
        }
        self.write_file_mock()?;
        if self.mode == Mode::NewProject {
            self.write_gitignore()?;
        }
        self.write_travis_config()?;
        self.init_git()?;
        if self.mode == Mode::InPlace {
            self.run_test_baseline()?;
        }

        Ok(())
    }

    fn write_manifest(&self) -> Result<()> {
        info!("Setting up package.json");
        let manifest = Manifest::new(&self.project_name);
        write_file(&manifest.to_json()?, self.target_dir.join(MANIFEST_FILENAME))
    }

    fn install_dependencies(&self) -> Result<()> {
        let mut dev_packages: Vec<&str> = DEV_DEPENDENCIES.to_vec();
        if self.mode == Mode::InPlace {
            dev_packages.extend_from_slice(IN_PLACE_EXTRA_DEV_DEPENDENCIES);
        }

        info!("Installing devDependencies");
        let mut args = vec!["i", "-D"];
        args.extend_from_slice(&dev_packages);
        self.runner.run("npm", &args, &self.target_dir)?;

        info!("Installing dependencies");
        let mut args = vec!["i"];
        args.extend_from_slice(DEPENDENCIES);
        self.runner.run("npm", &args, &self.target_dir)
    }

    fn write_webpack_config(&self) -> Result<()> {
        info!("Setting up webpack.config.js");
        write_file(templates::WEBPACK_CONFIG, self.target_dir.join(WEBPACK_CONFIG_FILENAME))
    }

    fn write_babel_config(&self) -> Result<()> {
        info!("Setting up .babelrc");
        let content = serde_json::to_string_pretty(&templates::babel_config())?;
        write_file(&content, self.target_dir.join(BABEL_CONFIG_FILENAME))
    }

    fn write_eslint_config(&self) -> Result<()> {
        info!("Setting up .eslintrc");
        let content = serde_json::to_string_pretty(&templates::eslint_config())?;
        write_file(&content, self.target_dir.join(ESLINT_CONFIG_FILENAME))
    }

    fn write_sources(&self) -> Result<()> {
        info!("Setting up src");
        let src_dir = self.target_dir.join(SRC_DIR);
        create_dir_all(&src_dir)?;

        info!("Setting up index.js");
        write_file(templates::INDEX_JS, src_dir.join("index.js"))?;

        info!("Setting up index.html");
        let html = self
            .engine
            .render(templates::INDEX_HTML, &json!({ "project_name": self.project_name }))?;
        write_file(&html, src_dir.join("index.html"))?;

        info!("Setting up enzyme tests");
        write_file(templates::SETUP_TESTS_JS, src_dir.join("setupTests.js"))
    }

    fn write_root_component(&self) -> Result<()> {
        info!("Setting up the App component");
        let components_dir = self.target_dir.join(SRC_DIR).join(COMPONENTS_DIR);
        create_dir_all(&components_dir)?;
        write_file(templates::APP_JS, components_dir.join("App.js"))?;
        write_file(templates::APP_TEST_JS, components_dir.join("App.test.js"))
    }

    fn write_file_mock(&self) -> Result<()> {
        info!("Setting up file mocks");
        let mocks_dir = self.target_dir.join(MOCKS_DIR);
        create_dir_all(&mocks_dir)?;
        write_file(templates::FILE_MOCK_JS, mocks_dir.join("fileMock.js"))
    }

    fn write_gitignore(&self) -> Result<()> {
        info!("Setting up .gitignore");
        write_file(templates::GITIGNORE, self.target_dir.join(GITIGNORE_FILENAME))
    }

    fn write_travis_config(&self) -> Result<()> {
        info!("Setting up .travis.yml");
        write_file(templates::TRAVIS_YML, self.target_dir.join(TRAVIS_CONFIG_FILENAME))
    }

    fn init_git(&self) -> Result<()> {
        info!("Initializing git");
        self.runner.run("git", &["init"], &self.target_dir)
    }

    fn run_test_baseline(&self) -> Result<()> {
        info!("Recording the snapshot baseline");
        self.runner.run("npm", &["test"], &self.target_dir)
    }
}
