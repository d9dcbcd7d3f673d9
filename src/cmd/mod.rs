mod runtime_error;

use std::io::Write;
use std::path::PathBuf;

pub use runtime_error::RuntimeError;

use crate::config::{Config, CONFIG_SEARCH_FILE, CONFIG_SEARCH_FOLDER};
use crate::demo::write_demo;
#[cfg(feature = "log")]
use crate::logger::CONSOLE_LOGGER;
use crate::value::Value;
#[allow(unused_imports)]
#[cfg(not(feature = "log"))]
use crate::{error, warn, info, debug};
#[allow(unused_imports)]
#[cfg(feature = "log")]
use log::{error, warn, info, debug, LevelFilter};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "printIp",
    about = "render integers, strings, sequences and homogeneous tuples as dotted ip-like strings",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cmd {
    #[arg(long, help = "Select different config file")]
    config: Option<String>,
    #[cfg(feature = "log")]
    #[arg(short, action = clap::ArgAction::Count, help = "Set verbosity level")]
    debug: u8,
    #[arg(short, long, help = "Don't log anything")]
    quiet: bool,
    #[arg(long, help = "Render the built-in demonstration values")]
    demo: bool,
    #[arg(long, help = "Migrate from json to yaml format")]
    pub migrate_to_yaml: bool,
    #[arg(
        help = "Typed values to render, e.g. i32:0x7F000001, str:hello, vec<u8>:10,20,30, tuple<u16>:1,2",
        allow_hyphen_values = true,
    )]
    values: Vec<String>,
}

#[cfg(feature = "log")]
fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        v if v >= 2 => LevelFilter::Debug,
        1 => LevelFilter::Info,
        _ => LevelFilter::Warn,
    }
}

/// Parses every raw value before anything is rendered.
pub fn parse_values(raw: &[String]) -> Result<Vec<Value>, RuntimeError> {
    raw.iter()
        .map(|r| r.parse::<Value>().map_err(|e| RuntimeError::InvalidValue(r.clone(), e)))
        .collect()
}

/// Renders one line per value. Shapes are all checked first, so an invalid
/// value leaves `out` untouched.
pub fn render_values<W: Write + ?Sized>(values: &[Value], out: &mut W) -> Result<(), RuntimeError> {
    for v in values {
        v.validate()?;
    }
    let mut buffer = String::new();
    for v in values {
        buffer.push_str(&v.render()?);
    }
    out.write_all(buffer.as_bytes())?;
    Ok(())
}

impl Cmd {
    pub fn search_cfg(&self) -> Vec<String> {
        let home_dir = match home::home_dir() {
            Some(h) => h,
            None => {
                match users::get_current_username() {
                    Some(u) => {
                        PathBuf::from("/home").join(u)
                    }
                    None => {
                        return vec![];
                    }
                }
            }
        };

        let mut results = vec![];
        for i in CONFIG_SEARCH_FOLDER
            .iter()
            .map(|f| home_dir.join(f))
        {
            if i.exists() {
                for j in CONFIG_SEARCH_FILE.iter() {
                    let p = i.join(j);
                    if p.exists() {
                        if let Some(s) = p.to_str() {
                            results.push(s.to_owned());
                        }
                    }
                }
            }
        }

        let default = Config::default_path(Some(home_dir));
        if let Some(first) = results.first() {
            if default != PathBuf::from(first) {
                info!("using {:?}, default location is {:?}", first, default)
            }
        }
        results
    }

    pub fn load_cfg(&self) -> Result<Config, RuntimeError> {
        match &self.config {
            Some(f) => self.cfg_from_file(f),
            None => {
                info!("config not specified, searching default locations");
                let found = self.search_cfg();
                debug!("found configurations: {:?}", found);
                match found.first() {
                    Some(f) => {
                        debug!("selecting configuration: {:?}", f);
                        self.cfg_from_file(f)
                    }
                    None => Err(RuntimeError::NoConfig),
                }
            }
        }
    }

    pub fn cfg_from_file(&self, file: &str) -> Result<Config, RuntimeError> {
        Config::try_from(file).map_err(RuntimeError::from)
    }

    #[cfg(feature = "log")]
    fn init_logger(&self) {
        if log::set_logger(&CONSOLE_LOGGER).is_err() {
            debug!("logger already installed");
        }
        log::set_max_level(if self.quiet {
            LevelFilter::Off
        } else {
            level_filter(self.debug)
        });
    }

    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    fn apply_settings(&self, verbosity: u8) {
        #[cfg(feature = "log")]
        if !self.quiet && level_filter(verbosity) > log::max_level() {
            log::set_max_level(level_filter(verbosity));
            debug!("verbosity raised by configuration to {}", verbosity);
        }
    }

    pub fn main(&mut self) -> Result<(), RuntimeError> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.run(&mut lock)
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), RuntimeError> {
        #[cfg(feature = "log")]
        self.init_logger();

        if self.migrate_to_yaml {
            return self.migrate_config()
        }

        if self.demo {
            debug!("rendering demonstration values");
            write_demo(out)?;
            return Ok(())
        }

        if !self.values.is_empty() && self.config.is_none() {
            debug!("rendering {} value(s) from the command line", self.values.len());
            let values = parse_values(&self.values)?;
            return render_values(&values, out)
        }

        let (values, settings) = match self.load_cfg() {
            Ok(c) => c.split(),
            Err(RuntimeError::NoConfig) if self.values.is_empty() => {
                info!("no configuration found, rendering demonstration values");
                write_demo(out)?;
                return Ok(())
            }
            Err(e) => return Err(e),
        };
        self.apply_settings(settings.verbosity);

        // command line values follow the configured ones
        let mut values = values;
        values.extend(parse_values(&self.values)?);
        debug!("rendering {} value(s)", values.len());
        render_values(&values, out)
    }

    pub fn migrate_config(&mut self) -> Result<(), RuntimeError> {
        debug!("migrating config, json -> yaml");
        debug!("searching for all configuration");
        let found = self.search_cfg();
        for i in &found {
            if i.ends_with(".yaml") {
                info!("found yaml configuration: {:?}", i);
                warn!("a yaml configuration already exists. exiting.");
                return Ok(())
            }
        }

        debug!("configurations found: {:?}", found);
        if let Some(f) = found.iter().find(|f| f.ends_with(".json")) {
            let cfg = Config::try_from(f.as_str())?;
            let p_out = PathBuf::from(f);
            let p_out = p_out
                .parent()
                .ok_or_else(|| RuntimeError::NoSuchFile(f.clone()))?;
            let f_out = p_out.join(CONFIG_SEARCH_FILE[0]);
            let mut output = std::fs::File::create(&f_out)?;
            write!(output, "{}", cfg.to_yaml()?)?;
            info!("done creating yaml configuration: {:?}", f_out);
            Ok(())
        } else {
            Err(RuntimeError::ParseError("no json configuration found".to_owned()))
        }
    }
}
