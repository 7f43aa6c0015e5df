use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*;
use std::path::Path;
use std::process::Command; // Run programs
use tempfile;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

const ABRA_BITS: &str = "01101110100010101101110";

#[test]
fn report_abracadabra() -> STDRESULT {
    let mut cmd = Command::cargo_bin("huffcode")?;
    cmd.arg("report")
        .arg("-i").arg(Path::new("tests").join("abracadabra.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("a\t5\t    0\nr\t2\t    111\n"))
        .stdout(predicate::str::contains(["Encoded String:\n",ABRA_BITS].concat()))
        .stdout(predicate::str::contains("Decoded String:\nabracadabra\n"))
        .stdout(predicate::str::contains("The original string requires 11 bytes."))
        .stdout(predicate::str::contains("The encoded string requires 3 bytes."))
        .stdout(predicate::str::contains("Difference in space required is 72.73%."));
    Ok(())
}

#[test]
fn encode_to_stdout() -> STDRESULT {
    let mut cmd = Command::cargo_bin("huffcode")?;
    cmd.arg("encode")
        .arg("-i").arg(Path::new("tests").join("abracadabra.txt"))
        .assert()
        .success()
        .stdout([ABRA_BITS,"\n"].concat());
    Ok(())
}

#[test]
fn encode_to_file() -> STDRESULT {
    let mut cmd = Command::cargo_bin("huffcode")?;
    let temp_dir = tempfile::tempdir()?;
    let out_path = temp_dir.path().join("abracadabra.bits");
    cmd.arg("encode")
        .arg("-i").arg(Path::new("tests").join("abracadabra.txt"))
        .arg("-o").arg(&out_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("encoded 11 symbols into 23 bits"));
    match std::fs::read_to_string(out_path) {
        Ok(bits) => assert_eq!(bits,ABRA_BITS),
        Err(_) => panic!("unable to read encoded output")
    }
    Ok(())
}

#[test]
fn code_table() -> STDRESULT {
    let mut cmd = Command::cargo_bin("huffcode")?;
    cmd.arg("codes")
        .arg("-i").arg(Path::new("tests").join("abracadabra.txt"))
        .assert()
        .success()
        .stdout("'a'\t0\n'c'\t100\n'd'\t101\n'b'\t110\n'r'\t111\n");
    Ok(())
}

#[test]
fn first_line_only() -> STDRESULT {
    let mut cmd = Command::cargo_bin("huffcode")?;
    cmd.arg("report")
        .arg("-i").arg(Path::new("tests").join("sam.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Decoded String:\nI am Sam. Sam I am. I do not like this Sam I am.\n\n"))
        .stdout(predicate::str::contains("second line").not());
    let mut cmd = Command::cargo_bin("huffcode")?;
    cmd.arg("report")
        .arg("-i").arg(Path::new("tests").join("sam.txt"))
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("second line is ignored unless --all is given"));
    Ok(())
}

#[test]
fn empty_input() -> STDRESULT {
    let mut cmd = Command::cargo_bin("huffcode")?;
    cmd.arg("report")
        .arg("-i").arg(Path::new("tests").join("empty.txt"))
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Input Data Is Empty!"));
    Ok(())
}

#[test]
fn missing_input() -> STDRESULT {
    let mut cmd = Command::cargo_bin("huffcode")?;
    let temp_dir = tempfile::tempdir()?;
    cmd.arg("encode")
        .arg("-i").arg(temp_dir.path().join("nothing.txt"))
        .assert()
        .failure();
    Ok(())
}
