use std::fs;

use fair_hash::{emit, run, Error, FairHashTable, FunctionName, GeneratorConfig, InvalidArgument};

#[test]
fn run_writes_full_table() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("hash.sv");
    let config = GeneratorConfig::new(6, &path).unwrap().with_seed(1234);

    let written = run(&config).expect("failed to generate table");
    assert_eq!(written, path.as_path());

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("// Fair hash function generated for input key width = 6\n"));
    assert!(text.contains("// Total 64 entries, random seed = 1234\n"));
    assert!(text.contains("function automatic logic [5:0] fair_hash(input logic [5:0] key);\n"));

    let values = text
        .lines()
        .filter_map(|l| l.trim().strip_prefix("6'd"))
        .map(|l| {
            let value = l.rsplit("6'd").next().unwrap().trim_end_matches(';');
            value.trim().parse::<u32>().unwrap()
        })
        .collect::<Vec<_>>();
    assert_eq!(values.len(), 64, "wrong number of case branches");
    assert_eq!(values, FairHashTable::generate(6, 1234).unwrap().values());
    assert!(text.ends_with("    default : fair_hash = '0;\n  endcase\nendfunction\n"));
}

#[test]
fn two_bit_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("hash2.sv");
    run(&GeneratorConfig::new(2, &path).unwrap()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let table = FairHashTable::generate(2, 42).unwrap();
    let mut expected = String::from(
        "// Fair hash function generated for input key width = 2\n\
         // Total 4 entries, random seed = 42\n\
         \n\
         function automatic logic [1:0] fair_hash(input logic [1:0] key);\n  case (key)\n",
    );
    for (k, v) in table.entries() {
        expected.push_str(&format!("    2'd {} : fair_hash = 2'd {};\n", k, v));
    }
    expected.push_str("    default : fair_hash = '0;\n  endcase\nendfunction\n");
    assert_eq!(text, expected);
}

#[test]
fn emitting_twice_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("hash.sv");
    let table = FairHashTable::generate(10, 42).unwrap();
    let name = FunctionName::default();

    emit(&table, &name, &path).unwrap();
    let first = fs::read(&path).unwrap();
    emit(&table, &name, &path).unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second, "re-emission changed the file");
}

#[test]
fn existing_file_is_replaced() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("hash.sv");
    fs::write(&path, "stale contents that are much longer than nothing at all\n".repeat(1000)).unwrap();

    run(&GeneratorConfig::new(1, &path).unwrap()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"), "old contents survived");
    assert!(text.ends_with("endfunction\n"));
}

#[test]
fn missing_directory_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("no").join("such").join("dir").join("hash.sv");

    let err = run(&GeneratorConfig::new(4, &path).unwrap()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "unexpected error: {:?}", err);
    assert!(
        err.to_string().starts_with(&format!("i/o error writing {}: ", path.display())),
        "destination path missing from message: {}",
        err
    );
    assert!(!path.exists());
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0, "stray files left behind");
}

#[test]
fn directory_as_output_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = run(&GeneratorConfig::new(3, tmp.path()).unwrap()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "unexpected error: {:?}", err);
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0, "temporary file was not cleaned up");
}

#[test]
fn invalid_widths_are_rejected() {
    for width in [0, 17, 64] {
        let err = GeneratorConfig::new(width, "unused.sv").unwrap_err();
        assert!(
            matches!(err, Error::InvalidArgument(InvalidArgument::KeyWidth(_))),
            "width {} was not rejected: {:?}",
            width,
            err
        );
        assert!(err.to_string().contains("1 <= key_width <= 16"));
    }
}

#[test]
fn custom_name_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bank.sv");
    let config = GeneratorConfig::new(3, &path)
        .unwrap()
        .with_function_name(FunctionName::new("bank_hash").unwrap());
    run(&config).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches(" : bank_hash = ").count(), 9);
}

#[cfg(unix)]
#[test]
fn new_file_gets_regular_creation_mode() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().unwrap();
    let reference = tmp.path().join("reference.txt");
    fs::write(&reference, "").unwrap();
    let path = tmp.path().join("hash.sv");
    run(&GeneratorConfig::new(4, &path).unwrap()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, expected, "emitted file mode {:o} differs from umask default {:o}", mode, expected);
}

#[cfg(unix)]
#[test]
fn overwrite_keeps_existing_mode() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("hash.sv");
    fs::write(&path, "old").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    run(&GeneratorConfig::new(4, &path).unwrap()).unwrap();
    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640, "overwrite changed the file mode to {:o}", mode);
    assert!(fs::read_to_string(&path).unwrap().ends_with("endfunction\n"));
}
