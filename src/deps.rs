//! Static npm package lists installed into every generated project.

/// Runtime dependencies.
pub const DEPENDENCIES: &[&str] = &["react", "react-dom"];

/// Development dependencies, in the order npm receives them.
pub const DEV_DEPENDENCIES: &[&str] = &[
    "@babel/core",
    "@babel/plugin-proposal-class-properties",
    "@babel/preset-env",
    "@babel/preset-react",
    "autoprefixer",
    "babel-eslint",
    "babel-loader",
    "clean-webpack-plugin",
    "css-loader",
    "enzyme",
    "enzyme-adapter-react-16",
    "enzyme-to-json",
    "eslint",
    "eslint-plugin-babel",
    "eslint-plugin-react",
    "file-loader",
    "html-webpack-plugin",
    "identity-obj-proxy",
    "jest",
    "postcss-loader",
    "postcss-nested",
    "prop-types",
    "style-loader",
    "url-loader",
    "webpack",
    "webpack-cli",
    "webpack-dev-server",
];

/// Extra CSS-processing plugins appended to the development list when
/// scaffolding in place.
pub const IN_PLACE_EXTRA_DEV_DEPENDENCIES: &[&str] =
    &["postcss-import", "postcss-preset-env"];
