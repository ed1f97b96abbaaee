use std::process::Command;

use randhex::{format::parse_row, BYTES_PER_ROW, NB_BYTES, NB_ROWS};

fn run() -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_randhex"))
        .output()
        .expect("could not run randhex");
    assert!(output.status.success(), "randhex exited with {}", output.status);

    String::from_utf8(output.stdout).expect("output should be valid UTF-8")
}

#[test]
fn output_shape() {
    let stdout = run();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), NB_ROWS);

    let mut nb_values = 0;
    for line in lines {
        let values = parse_row(line).unwrap_or_else(|e| panic!("bad line {:?}: {}", line, e));
        assert_eq!(values.len(), BYTES_PER_ROW, "bad line {:?}", line);
        nb_values += values.len();
    }
    assert_eq!(nb_values, NB_BYTES);
}

#[test]
fn logs_stay_out_of_stdout() {
    for line in run().lines() {
        assert!(line.starts_with("0x"), "unexpected line {:?}", line);
    }
}
