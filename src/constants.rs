//! Constants used throughout the scaffolder

/// Project manifest file name
pub const MANIFEST_FILENAME: &str = "package.json";

/// webpack configuration file name
pub const WEBPACK_CONFIG_FILENAME: &str = "webpack.config.js";

/// Babel configuration file name
pub const BABEL_CONFIG_FILENAME: &str = ".babelrc";

/// ESLint configuration file name
pub const ESLINT_CONFIG_FILENAME: &str = ".eslintrc";

/// Ignore file name
pub const GITIGNORE_FILENAME: &str = ".gitignore";

/// CI configuration file name
pub const TRAVIS_CONFIG_FILENAME: &str = ".travis.yml";

/// Source directory of the generated project
pub const SRC_DIR: &str = "src";

/// Jest mock directory of the generated project
pub const MOCKS_DIR: &str = "__mocks__";

/// Component directory under src, created for in-place scaffolds
pub const COMPONENTS_DIR: &str = "components";
