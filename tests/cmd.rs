#![cfg(feature = "cmd")]

use clap::Parser;
use print_ip::cmd::{parse_values, render_values, Cmd, RuntimeError};

fn run(args: &[&str]) -> Result<String, RuntimeError> {
    let mut cmd = Cmd::try_parse_from(std::iter::once("printIp").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    cmd.run(&mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn renders_command_line_values() {
    assert_eq!(
        run(&["i32:0x7F000001", "vec<i32>:1,2,3,4", "str:test", "tuple<i32>:100,200,300,400"]).unwrap(),
        "127.0.0.1\n1.2.3.4\ntest\n100.200.300.400\n"
    );
    assert_eq!(run(&["i8:-1"]).unwrap(), "255\n");
}

#[test]
fn demo_flag() {
    let out = run(&["--demo"]).unwrap();
    assert_eq!(out.lines().count(), 8);
    assert!(out.starts_with("255\n0.0\n127.0.0.1\n"));
}

#[test]
fn bad_value_aborts_before_output() {
    let err = run(&["i32:1", "tuple:i32:1,str:x"]).unwrap_err();
    assert!(matches!(err, RuntimeError::InvalidValue(..)));
    assert_eq!(err.exit_code(), 6);

    let err = run(&["u8:300"]).unwrap_err();
    assert!(matches!(err, RuntimeError::InvalidValue(..)));
}

#[test]
fn explicit_config_file() {
    let dir = std::env::temp_dir().join(format!("print_ip-cmd-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "values = [\"u32:0x0A000001\"]\n").unwrap();

    let out = run(&["--config", path.to_str().unwrap(), "str:extra"]).unwrap();
    assert_eq!(out, "10.0.0.1\nextra\n");

    let missing = dir.join("missing.toml");
    let err = run(&["--config", missing.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, RuntimeError::NoSuchFile(..)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn render_values_checks_every_shape_first() {
    use print_ip::{Integer, Scalar, Value};

    let mut values = parse_values(&["i32:1".to_owned(), "str:x".to_owned()]).unwrap();
    values.push(Value::Tuple(vec![]));
    values.push(Value::Tuple(vec![Scalar::Int(Integer::U8(1))]));

    let mut out = Vec::new();
    let err = render_values(&values, &mut out).unwrap_err();
    assert!(matches!(err, RuntimeError::ShapeError(..)));
    assert_eq!(err.exit_code(), 7);
    assert!(out.is_empty());

    values.remove(2);
    render_values(&values, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0.0.0.1\nx\n1\n");
}

#[test]
fn command_metadata_comes_from_the_package() {
    use clap::CommandFactory;

    let command = Cmd::command();
    assert_eq!(command.get_name(), "printIp");
    assert_eq!(command.get_author(), Some(env!("CARGO_PKG_AUTHORS")));
}
