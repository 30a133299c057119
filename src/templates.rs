//! Static content of the generated project files.
//!
//! Everything here is written verbatim into the target directory, except
//! `INDEX_HTML` which interpolates the project name into the document title.

use serde_json::json;

/// webpack configuration: hashed bundle output, dev server on port 7890 with
/// history-API fallback, babel/css/url loader rules.
pub const WEBPACK_CONFIG: &str = r#"const HtmlPlugin = require('html-webpack-plugin');
const { CleanWebpackPlugin } = require('clean-webpack-plugin');

// eslint-disable-next-line
module.exports = {
  entry: './src/index.js',
  output: {
    filename: 'bundle.[hash].js'
  },
  devServer: {
    port: 7890,
    historyApiFallback: true
  },
  plugins: [
    new HtmlPlugin({ template: './src/index.html' }),
    new CleanWebpackPlugin()
  ],
  module: {
    rules: [
      {
        test: /\.js$/,
        exclude: /node_modules/,
        use: {
          loader: 'babel-loader',
          options: {
            cacheDirectory: true
          }
        }
      },
      {
        test: /\.css$/,
        use: [
          {
            loader: 'style-loader',
            options: { sourceMap: true }
          },
          {
            loader: 'css-loader',
            options: {
              sourceMap: true,
              modules: true,
              importLoaders: 1
            }
          },
          {
            loader: 'postcss-loader',
            options: {
              sourceMap: true,
              plugins: [
                require('autoprefixer')(),
                require('postcss-nested')()
              ]
            }
          }
        ]
      },
      {
        test: /\.(jpeg|jpg|png|svg)$/,
        use: {
          loader: 'url-loader',
          options: { limit: 1000 },
        },
      }
    ]
  }
};
"#;

/// Entry script: renders the root component into the `#root` DOM node.
pub const INDEX_JS: &str = r#"import React from 'react';
import { render } from 'react-dom';
import App from './components/App';

render(
  <App />,
  document.getElementById('root')
);
"#;

/// HTML entry page. `project_name` becomes the document title.
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">

<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta http-equiv="X-UA-Compatible" content="ie=edge">
  <title>{{ project_name }}</title>
</head>

<body>
  <div id="root"></div>
</body>

</html>
"#;

/// Jest setup file wiring the Enzyme adapter.
pub const SETUP_TESTS_JS: &str = r#"import Enzyme from 'enzyme';
import Adapter from 'enzyme-adapter-react-16';

Enzyme.configure({ adapter: new Adapter() });
"#;

/// Mock module that Jest substitutes for binary asset imports.
pub const FILE_MOCK_JS: &str = r#"// eslint-disable-next-line
module.exports = '/path/image';
"#;

pub const GITIGNORE: &str = "node_modules\n.env\ndist\n";

pub const TRAVIS_YML: &str = "language: node_js\nnode_js: node\n";

/// Root component written for in-place scaffolds.
pub const APP_JS: &str = r#"import React from 'react';

export default function App() {
  return (
    <h1>Hello, World!</h1>
  );
}
"#;

/// Snapshot test accompanying the root component. The first `npm test` run
/// records its baseline.
pub const APP_TEST_JS: &str = r#"import React from 'react';
import { shallow } from 'enzyme';
import App from './App';

describe('App', () => {
  it('renders', () => {
    const wrapper = shallow(<App />);
    expect(wrapper).toMatchSnapshot();
  });
});
"#;

/// Babel configuration: two presets, one syntax-extension plugin.
pub fn babel_config() -> serde_json::Value {
    json!({
        "presets": [
            "@babel/preset-env",
            "@babel/preset-react"
        ],
        "plugins": [
            "@babel/plugin-proposal-class-properties"
        ]
    })
}

/// ESLint configuration targeting module syntax in a browser/jest environment.
pub fn eslint_config() -> serde_json::Value {
    json!({
        "parserOptions": {
            "ecmaVersion": 9,
            "sourceType": "module"
        },
        "parser": "babel-eslint",
        "env": {
            "es6": true,
            "browser": true,
            "jest": true
        },
        "plugins": [
            "babel",
            "react"
        ],
        "extends": [
            "eslint:recommended",
            "plugin:react/recommended"
        ],
        "rules": {
            "no-console": "warn",
            "indent": [
                "error",
                2,
                {
                    "SwitchCase": 1
                }
            ],
            "quotes": [
                "error",
                "single"
            ],
            "semi": [
                "error",
                "always"
            ],
            "space-in-parens": [
                "error"
            ],
            "space-infix-ops": "error",
            "object-curly-spacing": [
                "error",
                "always"
            ],
            "comma-spacing": "error",
            "space-before-function-paren": [
                "error",
                "never"
            ],
            "eol-last": [
                "error",
                "always"
            ],
            "keyword-spacing": [
                "error",
                {
                    "before": true,
                    "after": true,
                    "overrides": {
                        "do": {
                            "after": false
                        },
                        "for": {
                            "after": false
                        },
                        "if": {
                            "after": false
                        },
                        "switch": {
                            "after": false
                        },
                        "while": {
                            "after": false
                        },
                        "catch": {
                            "after": false
                        }
                    }
                }
            ],
            "array-bracket-spacing": "error",
            "babel/no-invalid-this": 1,
            "babel/semi": 0
        }
    })
}
