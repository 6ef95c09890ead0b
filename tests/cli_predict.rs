mod common;

use common::*;

const ASPIRIN: &str = "CC(=O)Oc1ccccc1C(=O)O";

#[test]
fn predict_with_pdb_id_and_smiles_writes_report() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1hsg", "--ligand", ASPIRIN, "--output", "results.csv",
    ]);

    assert!(result.success, "predict failed: {}", result.stderr);
    assert_output_contains!(result, "Results saved to: results.csv");
    assert_output_contains!(result, "Prediction completed in");

    let report = std::fs::read_to_string(env.project_path("results.csv")).unwrap();
    let mut lines = report.lines();
    assert_eq!(
        lines.next(),
        Some("protein,ligand,protein_type,ligand_type,output,center,box_size,affinity,docking_score,execution_time,status,pose_file")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("1HSG,"), "protein should be upper-cased: {}", row);
    assert!(row.contains(",pdb_id,smiles,"));
    assert!(row.contains("placeholder"));
}

#[test]
fn predict_output_without_extension_gets_csv() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1HSG", "--ligand", "CCO", "--output", "report",
    ]);

    assert!(result.success, "predict failed: {}", result.stderr);
    assert!(env.project_path("report.csv").exists());
    assert!(!env.project_path("report").exists());
}

#[test]
fn predict_verbose_shows_request_details() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1HSG", "--ligand", "CCO", "--output", "out.csv", "--verbose",
    ]);

    assert!(result.success);
    assert_output_contains!(result, "(Verbose Mode)");
    assert_output_contains!(result, "Box size");
}

#[test]
fn predict_with_structure_files() {
    let env = TestEnv::new();
    env.write_project_file("inputs/protein.pdb", "ATOM      1  N   ALA A   1\n");
    env.write_project_file("inputs/ligand.sdf", "ligand\n");

    let result = env.run(&[
        "predict",
        "--protein",
        "inputs/protein.pdb",
        "--ligand",
        "inputs/ligand.sdf",
        "--output",
        "out.csv",
        "--json",
    ]);

    assert!(result.success, "predict failed: {}", result.stderr);
    let events = result.json_events();
    let complete = events.iter().find(|e| e["event"] == "complete").unwrap();
    assert_eq!(complete["result"]["protein_type"], "file");
    assert_eq!(complete["result"]["ligand_type"], "file");
    assert!(complete["result"]["protein"]
        .as_str()
        .unwrap()
        .ends_with("protein.pdb"));
}

#[test]
fn pdb_id_shape_wins_over_file_in_working_directory() {
    let env = TestEnv::new();
    env.write_project_file("1abc", "not a structure\n");

    let result = env.run(&[
        "predict", "--protein", "1abc", "--ligand", "CCO", "--output", "out.csv", "--json",
    ]);

    assert!(result.success, "predict failed: {}", result.stderr);
    let events = result.json_events();
    let complete = events.iter().find(|e| e["event"] == "complete").unwrap();
    assert_eq!(complete["result"]["protein"], "1ABC");
    assert_eq!(complete["result"]["protein_type"], "pdb_id");
}

#[test]
fn predict_with_center_records_binding_site() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1HSG", "--ligand", "CCO", "--output", "out.csv", "--center",
        "10", "-2.5", "15", "--json",
    ]);

    assert!(result.success, "predict failed: {}", result.stderr);
    let events = result.json_events();
    let complete = events.iter().find(|e| e["event"] == "complete").unwrap();
    assert_eq!(complete["result"]["center"], "10 -2.5 15");
}

#[test]
fn invalid_protein_shows_error_box() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "INVALID", "--ligand", "CCO", "--output", "out.csv",
    ]);

    assert_exit_code!(result, 1);
    assert!(result.stderr.contains("ERROR"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("Invalid protein input"));
    assert!(result.stderr.contains("Suggestion:"));
    assert!(!env.project_path("out.csv").exists());
}

#[test]
fn invalid_ligand_is_rejected() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1HSG", "--ligand", "xyz", "--output", "out.csv",
    ]);

    assert_exit_code!(result, 1);
    assert!(result.stderr.contains("Invalid ligand input"));
}

#[test]
fn unsupported_protein_format_is_rejected() {
    let env = TestEnv::new();
    env.write_project_file("protein.txt", "text\n");

    let result = env.run(&[
        "predict", "--protein", "protein.txt", "--ligand", "CCO", "--output", "out.csv",
    ]);

    assert_exit_code!(result, 1);
    assert!(result.stderr.contains("Unsupported protein file format: .txt"));
}

#[test]
fn oversized_box_is_rejected() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1HSG", "--ligand", "CCO", "--output", "out.csv", "--size", "150",
    ]);

    assert_exit_code!(result, 1);
    assert!(result.stderr.contains("Binding site box size too large"));
}

#[test]
fn negative_box_size_is_an_input_error() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1HSG", "--ligand", "CCO", "--output", "out.csv", "--size", "-5",
    ]);

    assert_exit_code!(result, 1);
    assert!(result.stderr.contains("ERROR"), "stderr: {}", result.stderr);
    assert!(result.stderr.contains("must be positive"));
    assert!(!result.stderr.contains("unexpected argument"));
}

#[test]
fn missing_output_directory_is_rejected() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1HSG", "--ligand", "CCO", "--output", "missing/out.csv",
    ]);

    assert_exit_code!(result, 1);
    assert!(result.stderr.contains("Output directory does not exist"));
    assert!(!env.project_path("missing").exists());
}

#[test]
fn non_csv_output_is_rejected() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1HSG", "--ligand", "CCO", "--output", "out.json",
    ]);

    assert_exit_code!(result, 1);
    assert!(result.stderr.contains("Output file must be CSV format"));
}

#[test]
fn missing_required_arguments_is_usage_error() {
    let env = TestEnv::new();
    let result = env.run(&["predict", "--protein", "1HSG"]);

    assert_exit_code!(result, 2);
    assert!(result.stderr.contains("--ligand"));
}

#[test]
fn json_error_event_goes_to_stdout() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "INVALID", "--ligand", "CCO", "--output", "out.csv", "--json",
    ]);

    assert_exit_code!(result, 1);
    let events = result.json_events();
    let error = events.last().unwrap();
    assert_eq!(error["event"], "error");
    assert_eq!(error["kind"], "input_error");
    assert!(error["message"].as_str().unwrap().contains("INVALID"));
    assert!(error["suggestion"].is_string());
}

#[test]
fn no_save_pose_still_writes_report() {
    let env = TestEnv::new();
    let result = env.run(&[
        "predict", "--protein", "1HSG", "--ligand", "CCO", "--output", "out.csv", "--no-save-pose",
    ]);

    assert!(result.success, "predict failed: {}", result.stderr);
    assert!(env.project_path("out.csv").exists());
    assert!(!result.stdout.contains("Docking pose saved to"));
}

#[test]
fn log_file_receives_debug_output() {
    let env = TestEnv::new();
    let result = env.run(&[
        "--log-file", "run.log", "predict", "--protein", "1HSG", "--ligand", "CCO", "--output",
        "out.csv",
    ]);

    assert!(result.success, "predict failed: {}", result.stderr);
    let log = std::fs::read_to_string(env.project_path("run.log")).unwrap();
    assert!(log.contains("validating inputs"), "log was: {}", log);
}

#[test]
fn color_never_keeps_stderr_plain() {
    let env = TestEnv::new();
    let result = env.run_with_env_removed(
        &[
            "--color", "never", "predict", "--protein", "INVALID", "--ligand", "CCO", "--output",
            "out.csv",
        ],
        &[("TERM", "xterm-256color"), ("BINDIGO_COLOR", "always")],
        &["NO_COLOR"],
    );

    assert_exit_code!(result, 1);
    assert!(result.stderr.contains("Invalid protein input"));
    assert!(
        !result.stderr.contains('\u{1b}'),
        "stderr carries escape codes: {:?}",
        result.stderr
    );
}

#[test]
fn color_always_colors_the_error_box() {
    let env = TestEnv::new();
    let result = env.run_with_env_removed(
        &[
            "--color", "always", "predict", "--protein", "INVALID", "--ligand", "CCO", "--output",
            "out.csv",
        ],
        &[("TERM", "xterm-256color")],
        &["NO_COLOR"],
    );

    assert_exit_code!(result, 1);
    assert!(result.stderr.contains('\u{1b}'));
}

#[test]
fn config_color_never_keeps_stderr_plain() {
    let env = TestEnv::new();
    env.write_project_file("bindigo.toml", "[output]\ncolor = \"never\"\n");

    let result = env.run_with_env_removed(
        &["predict", "--protein", "INVALID", "--ligand", "CCO", "--output", "out.csv"],
        &[("TERM", "xterm-256color")],
        &["NO_COLOR"],
    );

    assert_exit_code!(result, 1);
    assert!(!result.stderr.contains('\u{1b}'));
}
