use std::process::Command;

fn coilgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_coilgen"))
}

#[test]
fn help_exits_cleanly() {
    let status = coilgen().arg("--help").status().expect("run coilgen");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn exit_code_usage_is_1_without_subcommand() {
    let status = coilgen().status().expect("run coilgen");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn exit_code_usage_is_1_for_missing_width() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("coil");
    let status = coilgen()
        .args(["single", out.to_string_lossy().as_ref(), "spiral"])
        .args(["-r", "2", "-R", "10", "-n", "4"])
        .status()
        .expect("run coilgen single");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn exit_code_usage_is_1_for_turns_and_spacing_together() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("coil");
    let status = coilgen()
        .args(["single", out.to_string_lossy().as_ref(), "square"])
        .args(["-r", "2", "-R", "10", "-n", "4", "-s", "0.2", "-w", "0.2"])
        .status()
        .expect("run coilgen single");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn exit_code_usage_is_1_for_unknown_coil_type() {
    let status = coilgen()
        .args(["single", "coil", "hexagon", "-r", "2", "-R", "10", "-n", "4", "-w", "0.2"])
        .status()
        .expect("run coilgen single");
    assert_eq!(status.code(), Some(1));
}

#[test]
fn exit_code_input_is_2_for_inverted_radii() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("coil");
    let status = coilgen()
        .args(["single", out.to_string_lossy().as_ref(), "spiral"])
        .args(["-r", "10", "-R", "2", "-n", "4", "-w", "0.2"])
        .status()
        .expect("run coilgen single");
    assert_eq!(status.code(), Some(2));
    assert!(!dir.path().join("coil.kicad_mod").exists());
}

#[test]
fn exit_code_input_is_2_for_missing_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.yaml");
    let status = coilgen()
        .args(["bulk", "--config", missing.to_string_lossy().as_ref()])
        .status()
        .expect("run coilgen bulk");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn exit_code_input_is_2_for_invalid_yaml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bad = dir.path().join("bad.yaml");
    std::fs::write(&bad, "coil_types: [spiral,").expect("write bad yaml");
    let status = coilgen()
        .args(["bulk", "--config", bad.to_string_lossy().as_ref()])
        .status()
        .expect("run coilgen bulk");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn exit_code_input_is_2_for_invalid_sweep() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = dir.path().join("sweep.yaml");
    std::fs::write(&cfg, "min_outer_radius_mm: 50\nmax_outer_radius_mm: 40\n").expect("write");
    let status = coilgen()
        .args(["bulk", "--config", cfg.to_string_lossy().as_ref()])
        .status()
        .expect("run coilgen bulk");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn exit_code_processing_is_3_when_output_is_blocked() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").expect("write blocker");
    let out = blocker.join("coil");
    let status = coilgen()
        .args(["single", out.to_string_lossy().as_ref(), "square"])
        .args(["-r", "2", "-R", "10", "-n", "4", "-w", "0.2"])
        .status()
        .expect("run coilgen single");
    assert_eq!(status.code(), Some(3));
}

#[test]
fn exit_code_input_is_2_for_single_point_per_turn() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("coil");
    let status = coilgen()
        .args(["single", out.to_string_lossy().as_ref(), "spiral"])
        .args(["-r", "2", "-R", "10", "-n", "4", "-w", "0.2", "--points-per-turn", "1"])
        .status()
        .expect("run coilgen single");
    assert_eq!(status.code(), Some(2));
}
