//! End-to-end runs of the `audio_stats` binary against `audio.wav` in a scratch directory.

mod common;

use std::process::Command;

fn run_in(dir: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_audio_stats"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run audio_stats")
}

#[test]
fn test_prints_four_statistics() {
    let dir = common::scratch_dir("cli_ok");
    common::write_float_wav(&dir.join("audio.wav"), &[1.0, 2.0, 3.0, 4.0, 5.0], 1, 44100);

    let output = run_in(&dir);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n'));
    let values: Vec<f32> = stdout
        .lines()
        .map(|line| line.parse().expect("Failed to parse statistic"))
        .collect();

    // running mean, running sd, mean, sd
    assert_eq!(values.len(), 4);
    assert!((values[0] - 3.0).abs() < 1e-6);
    assert!((values[1] - 2.0f32.sqrt()).abs() < 1e-4);
    assert!((values[2] - 3.0).abs() < 1e-6);
    assert!((values[3] - 2.0f32.sqrt()).abs() < 1e-4);
}

#[test]
fn test_truncated_file_exits_with_failure() {
    let dir = common::scratch_dir("cli_truncated");
    let path = dir.join("audio.wav");
    common::write_float_wav(&path, &common::tone(4096, 44100), 1, 44100);
    common::truncate_tail(&path, 2000 * 4);

    let output = run_in(&dir);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("audio.wav"));
    assert!(stderr.contains("instead of 4096"));
}

#[test]
fn test_missing_input_exits_with_failure() {
    let dir = common::scratch_dir("cli_missing");

    let output = run_in(&dir);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("audio.wav"));
}
