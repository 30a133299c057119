//! Typed model of the generated package.json.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;

/// Jest substitute for style-sheet imports.
pub const STYLE_SHEET_MOCK: &str = "identity-obj-proxy";

/// Jest substitute for binary asset imports.
pub const BINARY_ASSET_MOCK: &str = "<rootDir>/__mocks__/fileMock.js";

/// Import pattern matched against style sheets.
pub const STYLE_SHEET_PATTERN: &str = r"\.(css)$";

/// Import pattern matched against binary assets.
pub const BINARY_ASSET_PATTERN: &str =
    r"\.(jpg|jpeg|png|gif|eot|otf|webp|svg|ttf|woff|woff2|mp4|webm|wav|mp3|m4a|aac|oga)$";

/// Jest configuration block embedded in the manifest.
///
/// Routes style-sheet imports to `identity-obj-proxy` and binary asset
/// imports to the generated file mock so component tests never load real
/// assets.
#[derive(Serialize, Debug)]
pub struct JestConfig {
    #[serde(rename = "setupFilesAfterEnv")]
    setup_files_after_env: Vec<&'static str>,
    #[serde(rename = "snapshotSerializers")]
    snapshot_serializers: Vec<&'static str>,
    #[serde(rename = "moduleNameMapper")]
    module_name_mapper: IndexMap<&'static str, &'static str>,
}

/// The project manifest written as package.json.
///
/// Keys are fixed; only `name` varies per run. `dependencies` and
/// `devDependencies` start empty and are filled in by npm during install.
#[derive(Serialize, Debug)]
pub struct Manifest {
    name: String,
    version: &'static str,
    description: &'static str,
    main: &'static str,
    jest: JestConfig,
    scripts: IndexMap<&'static str, &'static str>,
    keywords: Vec<&'static str>,
    author: &'static str,
    license: &'static str,
    dependencies: IndexMap<String, String>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: IndexMap<String, String>,
}

impl Manifest {
    pub fn new(name: &str) -> Self {
        let mut module_name_mapper = IndexMap::new();
        module_name_mapper.insert(STYLE_SHEET_PATTERN, STYLE_SHEET_MOCK);
        module_name_mapper.insert(BINARY_ASSET_PATTERN, BINARY_ASSET_MOCK);

        let mut scripts = IndexMap::new();
        scripts.insert("test", "jest --verbose");
        scripts.insert("test:watch", "npm run test -- --watch");
        scripts.insert(
            "start",
            "webpack-dev-server --hot --mode development --devtool eval-source-map",
        );
        scripts.insert("build", "webpack -p --devtool source-map");

        Self {
            name: name.to_string(),
            version: "1.0.0",
            description: "",
            main: "src/index.js",
            jest: JestConfig {
                setup_files_after_env: vec!["<rootDir>src/setupTests.js"],
                snapshot_serializers: vec!["enzyme-to-json/serializer"],
                module_name_mapper,
            },
            scripts,
            keywords: vec![],
            author: "",
            license: "ISC",
            dependencies: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
        }
    }

    /// Serializes with two-space indentation, the way npm writes manifests.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
