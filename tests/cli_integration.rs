//! Integration tests for the command-line front-end

#[cfg(feature = "cli")]
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    #[test]
    fn test_cli_text_output_works() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        let output = cmd
            .args(["1011", "-s", "AMI"])
            .output()
            .expect("Failed to execute CLI command");

        assert!(output.status.success(), "CLI command should succeed");

        let stdout = String::from_utf8(output.stdout).expect("Output should be valid UTF-8");
        assert!(stdout.contains("Bits: 1011 (4 bits)"));
        assert!(stdout.contains("AMI Encoding"));
        assert!(stdout.contains("Levels: [1, 0, -1, 1]"));
        assert!(stdout.contains(" 1 ┤"));
    }

    #[test]
    fn test_cli_default_scheme_is_nrz_l() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        cmd.arg("10")
            .assert()
            .success()
            .stdout(predicate::str::contains("NRZ-L Encoding"))
            .stdout(predicate::str::contains("Levels: [1, -1]"));
    }

    #[test]
    fn test_cli_json_output_works() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        let output = cmd
            .args(["-o", "json", "-s", "manchester", "10"])
            .output()
            .expect("Failed to execute CLI command");

        assert!(output.status.success(), "CLI command should succeed");

        let stdout = String::from_utf8(output.stdout).expect("Output should be valid UTF-8");
        let json: serde_json::Value =
            serde_json::from_str(&stdout).expect("Output should be valid JSON");

        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["bits"], "10");
        let signal = &json["data"]["signals"][0];
        assert_eq!(signal["scheme"]["name"], "Manchester");
        assert_eq!(signal["levels"], serde_json::json!([1, -1, -1, 1]));
        assert!(json["data"]["noise"].is_null());
    }

    #[test]
    fn test_cli_compare_all_schemes() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        let output = cmd
            .args(["--output", "json", "--compare", "1100"])
            .output()
            .expect("Failed to execute CLI command");

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let names: Vec<_> = json["data"]["signals"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["scheme"]["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            [
                "Unipolar",
                "NRZ-L",
                "NRZ-I",
                "RZ",
                "Manchester",
                "Differential Manchester",
                "AMI",
                "B8ZS",
                "HDB3"
            ]
        );
    }

    #[test]
    fn test_cli_seeded_noise_is_reproducible() {
        let run = || {
            let output = Command::cargo_bin("linecode")
                .unwrap()
                .args(["1010", "-o", "json", "--noise", "0.3", "--seed", "17"])
                .output()
                .expect("Failed to execute CLI command");
            assert!(output.status.success());
            serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap()
        };

        let first = run();
        assert_eq!(first["data"]["noise"]["seed"], 17);
        assert_eq!(first["data"]["noise"]["std_dev"], 0.3);
        assert_eq!(
            first["data"]["waveforms"][0]["samples"]
                .as_array()
                .unwrap()
                .len(),
            4
        );
        assert_eq!(first, run());
    }

    #[test]
    fn test_cli_hex_input() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        cmd.args(["-i", "hex", "-s", "unipolar", "A5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Bits: 10100101 (8 bits)"));
    }

    #[test]
    fn test_cli_exports_csv_and_svg() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("signal.csv");
        let svg = dir.path().join("signal.svg");

        Command::cargo_bin("linecode")
            .unwrap()
            .arg("101")
            .args(["-s", "RZ", "--labels", "--theme", "light"])
            .arg("--csv")
            .arg(&csv)
            .arg("--svg")
            .arg(&svg)
            .assert()
            .success()
            .stdout(predicate::str::contains("CSV exported to:"));

        let table = std::fs::read_to_string(&csv).unwrap();
        assert_eq!(
            table.lines().collect::<Vec<_>>(),
            ["time,level", "0,1", "1,0", "2,-1", "3,0", "4,1", "5,0"]
        );

        let document = std::fs::read_to_string(&svg).unwrap();
        assert!(document.contains("RZ Encoding"));
        assert_eq!(document.matches("class=\"bit-label\"").count(), 3);
    }

    #[test]
    fn test_cli_list_schemes() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        cmd.arg("--list-schemes")
            .assert()
            .success()
            .stdout(predicate::str::contains("Differential Manchester"))
            .stdout(predicate::str::contains("HDB3"));
    }

    #[test]
    fn test_cli_help_contains_expected_text() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        cmd.arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Encode binary sequences into line-code waveforms",
            ))
            .stdout(predicate::str::contains("Binary sequence to encode"))
            .stdout(predicate::str::contains("Output format"));
    }

    #[test]
    fn test_cli_version_works() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("linecode"))
            .stderr("");
    }

    #[test]
    fn test_cli_rejects_invalid_bits() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        cmd.arg("10201")
            .assert()
            .failure()
            .stderr(predicate::str::starts_with("Error: invalid binary sequence"))
            .stderr(predicate::str::contains("'2' at position 2"))
            .stdout(predicate::str::contains("Encoding").not());
    }

    #[test]
    fn test_cli_rejects_surrounding_whitespace() {
        for input in [" 101", "101 ", " 101 "] {
            Command::cargo_bin("linecode")
                .unwrap()
                .arg(input)
                .assert()
                .failure()
                .stderr(predicate::str::contains("invalid binary sequence"))
                .stdout(predicate::str::contains("Encoding").not());
        }
    }

    #[test]
    fn test_cli_hex_input_allows_surrounding_whitespace() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        cmd.args(["-i", "hex", "-s", "nrz-l", " 0f "])
            .assert()
            .success()
            .stdout(predicate::str::contains("Bits: 00001111 (8 bits)"));
    }

    #[test]
    fn test_cli_rejects_unknown_scheme() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        cmd.args(["-s", "2B1Q", "1010"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unsupported scheme"));
    }

    #[test]
    fn test_cli_rejects_invalid_bits_json() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        let output = cmd
            .args(["-o", "json", "01x"])
            .output()
            .expect("Failed to execute CLI command");

        assert!(!output.status.success(), "CLI command should fail");

        let stdout = String::from_utf8(output.stdout).expect("Output should be valid UTF-8");
        let json: serde_json::Value =
            serde_json::from_str(&stdout).expect("Error output should be valid JSON");

        assert_eq!(json["status"], "error");
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("invalid binary sequence"));
    }

    #[test]
    fn test_cli_rejects_negative_noise() {
        let mut cmd = Command::cargo_bin("linecode").unwrap();
        cmd.args(["1010", "--noise=-1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid noise standard deviation"));
    }
}
