use assert_cmd::cargo::cargo_bin_cmd;
use diceware::get_wordlist;
use predicates::str::contains;

fn stdout_of(args: &[&str]) -> String {
    let output = cargo_bin_cmd!("diceware").args(args).output().unwrap();
    assert!(output.status.success(), "diceware {:?} failed", args);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn quiet_default_prints_six_words() {
    let stdout = stdout_of(&["-q"]);
    let line = stdout.trim_end_matches('\n');

    assert_eq!(line.lines().count(), 1);
    let words: Vec<&str> = line.split(' ').collect();
    assert_eq!(words.len(), 6);
    for word in words {
        assert!(get_wordlist().contains(&word), "Unknown word \"{}\"", word);
    }
}

#[test]
fn quiet_plain_has_no_spaces() {
    let stdout = stdout_of(&["-q", "-p", "-w", "8"]);
    let line = stdout.trim_end_matches('\n');
    assert!(!line.contains(' '));
    assert!(line.len() >= 17);
}

#[test]
fn count_prints_distinct_passphrases() {
    let stdout = stdout_of(&["-q", "-n", "3", "-w", "10"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.split(' ').count() == 10));
    assert_ne!(lines[0], lines[1]);
}

#[test]
fn report_lists_settings_and_stats() {
    cargo_bin_cmd!("diceware")
        .args(["-x"])
        .assert()
        .success()
        .stdout(contains("Out[0]:"))
        .stdout(contains("Settings:"))
        .stdout(contains("Stats:"))
        .stdout(contains("8192 words"))
        .stdout(contains("Security: Strong"));
}

#[test]
fn zero_words_is_rejected() {
    cargo_bin_cmd!("diceware")
        .args(["-w", "0"])
        .assert()
        .failure()
        .stderr(contains("invalid word count 0"));
}

#[test]
fn five_words_fail_validation() {
    cargo_bin_cmd!("diceware")
        .args(["-w", "5"])
        .assert()
        .failure()
        .stderr(contains("minimum security requirements"));
}

#[test]
fn five_words_without_validation_are_weak() {
    cargo_bin_cmd!("diceware")
        .args(["-w", "5", "--no-validate"])
        .assert()
        .success()
        .stdout(contains("Security: Weak"));
}
