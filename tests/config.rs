#![cfg(feature = "serde")]

use std::path::PathBuf;

use print_ip::config::{Config, Settings};
use print_ip::parse::ParseError;
use print_ip::Value;

const CONFIG_EXAMPLE: &str = r#"
{
  "values": [
    "i32:0x7F000001",
    "str:hello",
    "vec<u8>:10,20,30",
    "tuple<u16>:200,1,0,0"
  ],
  "settings": {
    "verbosity": 1
  }
}
"#;

fn temp_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("print_ip-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn rendered(cfg: &Config) -> Vec<String> {
    cfg.values.iter().map(|v| v.to_dotted().unwrap()).collect()
}

#[test]
fn json_config() {
    let cfg = Config::from_content("config.json", CONFIG_EXAMPLE).unwrap();
    assert_eq!(cfg.settings, Settings { verbosity: 1 });
    assert_eq!(rendered(&cfg), vec!["127.0.0.1", "hello", "10.20.30", "200.1.0.0"]);
}

#[test]
fn bare_value_list_is_a_config() {
    let cfg = Config::from_content("values.json", r#"["i8:5", "list<i32>:1,2"]"#).unwrap();
    assert_eq!(cfg.settings, Settings::default());
    assert_eq!(rendered(&cfg), vec!["5", "1.2"]);
}

#[test]
fn yaml_and_toml_configs() {
    let yaml = "values:\n  - \"u32:0x0A000001\"\n  - \"str:x\"\nsettings:\n  verbosity: 2\n";
    let cfg = Config::from_content("config.yaml", yaml).unwrap();
    assert_eq!(cfg.settings.verbosity, 2);
    assert_eq!(rendered(&cfg), vec!["10.0.0.1", "x"]);

    let toml = "values = [\"tuple<u8>:1,2\"]\n";
    let cfg = Config::from_content("config.toml", toml).unwrap();
    assert_eq!(cfg.settings, Settings::default());
    assert_eq!(rendered(&cfg), vec!["1.2"]);
}

#[test]
fn invalid_values_fail_the_load() {
    let err = Config::from_content("config.json", r#"{"values": ["tuple:i32:1,str:x"]}"#).unwrap_err();
    assert!(matches!(err, ParseError::SerdeJsonError(..)));
    assert!(err.to_string().contains("unsupported type shape"));

    let err = Config::from_content("config.yaml", "values:\n  - \"bool:true\"\n").unwrap_err();
    assert!(matches!(err, ParseError::SerdeYamlError(..)));

    let err = Config::from_content("config.toml", "values = [\"i32\"]\n").unwrap_err();
    assert!(matches!(err, ParseError::SerdeTomlError(..)));
}

#[test]
fn yaml_export_reads_back() {
    let cfg = Config::from_content("config.json", CONFIG_EXAMPLE).unwrap();
    let yaml = cfg.to_yaml().unwrap();
    assert!(yaml.contains("i32:2130706433"));
    assert_eq!(Config::from_content("config.yaml", &yaml).unwrap(), cfg);
}

#[test]
fn single_empty_string_containers_survive_yaml() {
    let cfg = Config::from_content(
        "config.json",
        r#"{"values": ["tuple:str:", "vec:str:", "tuple<str>:,", "vec:"]}"#,
    )
    .unwrap();
    let yaml = cfg.to_yaml().unwrap();
    let reloaded = Config::from_content("config.yaml", &yaml).unwrap();
    assert_eq!(reloaded, cfg);
    assert_eq!(rendered(&reloaded), vec!["", "", ".", ""]);
}

#[test]
fn loading_from_disk() {
    let path = temp_file("disk.json", CONFIG_EXAMPLE);
    let cfg = Config::try_from(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.values.len(), 4);
    assert_eq!(cfg.values[0], "i32:2130706433".parse::<Value>().unwrap());

    let missing = path.with_file_name("missing.json");
    assert!(matches!(
        Config::try_from(missing.to_str().unwrap().to_owned()),
        Err(ParseError::FileNotFound(..))
    ));
    assert!(matches!(
        Config::try_from(path.parent().unwrap().to_str().unwrap()),
        Err(ParseError::PathIsDirectory(..))
    ));
}

#[test]
fn default_path() {
    assert_eq!(
        Config::default_path(Some(PathBuf::from("/home/someone"))),
        PathBuf::from("/home/someone/.config/print_ip/config.yaml")
    );
}
