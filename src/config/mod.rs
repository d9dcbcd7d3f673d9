use {
    serde::{Serialize,Deserialize},
    crate::{parse::ParseError,value::Value},
    std::fs::read_to_string,
    std::path::{Path,PathBuf},
};

/// Values to render, plus front end settings.
#[derive(Serialize,Deserialize)]
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Config {
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    pub fn split(self) -> (Vec<Value>, Settings) {
        (self.values, self.settings)
    }

    pub fn default_path(home: Option<PathBuf>) -> PathBuf {
        home.unwrap_or_default()
            .join(CONFIG_SEARCH_FOLDER[0])
            .join(CONFIG_SEARCH_FILE[0])
    }

    /// Parses `content` in the format implied by `path`'s extension.
    pub fn from_content(path: &str, content: &str) -> Result<Config, ParseError> {
        if path.ends_with(".yml") || path.ends_with(".yaml") {
            Ok(serde_yml::from_str(content)?)
        } else if path.ends_with(".toml") {
            Ok(toml::from_str(content)?)
        } else {
            match serde_json::from_str(content) {
                Ok(c) => Ok(c),
                Err(e) => {
                    // a bare list of values is accepted as well
                    match serde_json::from_str::<Vec<Value>>(content) {
                        Ok(values) => Ok(Config {
                            values,
                            settings: Settings::default(),
                        }),
                        Err(_) => Err(ParseError::SerdeJsonError(e))
                    }
                }
            }
        }
    }

    pub fn to_yaml(&self) -> Result<String, ParseError> {
        Ok(serde_yml::to_string(self)?)
    }
}

#[derive(Serialize,Deserialize)]
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Settings {
    /// Minimum verbosity, same scale as repeated `-d`.
    #[serde(default)]
    pub verbosity: u8,
}

impl<'a> TryFrom<&'a str> for Config {
    type Error = ParseError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        let path = Path::new(value);
        if !path.exists() {
            return Err(ParseError::FileNotFound(value.to_owned().into()))
        }
        if path.is_dir() {
            return Err(ParseError::PathIsDirectory(value.to_owned().into()))
        }
        let content = read_to_string(path)?;
        Self::from_content(value, &content)
    }
}

impl TryFrom<String> for Config {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

pub static CONFIG_SEARCH_FOLDER: [&'static str; 2] = [
    ".config/print_ip",
    ".config/printIp"
];
pub static CONFIG_SEARCH_FILE: [&'static str; 4] = [
    "config.yaml",
    "config.json",
    "config.toml",
    "values.json",
];
