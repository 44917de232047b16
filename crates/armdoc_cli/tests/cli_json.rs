#![allow(missing_docs)]

use std::process::{Command, Output};

use armdoc_testkit::{fixture_path, stdout_json};
use serde_json::json;

fn run_armdoc(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_armdoc")).args(args).output().expect("armdoc command executes")
}

fn fixture_arg(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

#[test]
fn decode_json_output_keeps_lines_and_comments() {
	let fixture = fixture_arg("storage_account.jsonc");
	let json = stdout_json(&run_armdoc(&["decode", &fixture, "--json"]));

	assert_eq!(json["contentVersion"]["raw"], "1.0.0.0");
	assert_eq!(json["$schema"]["comments"], json!([" Deploys one storage account."]));
	assert_eq!(json["parameters"]["location"]["startLine"], 12);
	assert_eq!(json["resources"].as_array().map(Vec::len), Some(2));
	assert_eq!(json["resources"][1]["tags"]["entries"]["env"]["startLine"], 49);
	assert_eq!(json["functions"], json!([]));
}

#[test]
fn resources_json_lists_rows_in_source_order() {
	let fixture = fixture_arg("storage_account.jsonc");
	let json = stdout_json(&run_armdoc(&["resources", &fixture, "--json"]));

	assert_eq!(
		json,
		json!([
			{
				"type": "Microsoft.Storage/storageAccounts",
				"name": "[parameters('storageName')]",
				"startLine": 27,
				"endLine": 42,
				"comments": []
			},
			{
				"type": "Microsoft.Network/networkSecurityGroups",
				"name": "web-nsg",
				"startLine": 43,
				"endLine": 59,
				"comments": []
			}
		])
	);
}

#[test]
fn nodes_json_exposes_ranges_and_attached_comments() {
	let fixture = fixture_arg("storage_account.jsonc");
	let json = stdout_json(&run_armdoc(&["nodes", &fixture, "--json"]));

	assert_eq!(json["kind"], "object");
	assert_eq!(json["range"]["start"], json!({"line": 1, "column": 1}));
	assert_eq!(json["range"]["end"]["line"], 67);

	let schema = &json["members"][0];
	assert_eq!(schema["key"], "$schema");
	assert_eq!(schema["value"]["comments"][0]["kind"], "comment");
	assert_eq!(schema["value"]["comments"][0]["value"], " Deploys one storage account.");
}

#[test]
fn decode_text_output_mentions_resources() {
	let fixture = fixture_arg("storage_account.jsonc");
	let output = run_armdoc(&["decode", &fixture]);
	assert!(output.status.success(), "decode should succeed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("resources: 2"));
	assert!(stdout.contains("[27-42] \"Microsoft.Storage/storageAccounts\""));
	assert!(stdout.contains("// Plain HTTP must stay disabled."));
}

#[test]
fn strict_flag_rejects_comments() {
	let fixture = fixture_arg("storage_account.jsonc");
	let output = run_armdoc(&["decode", &fixture, "--strict"]);

	assert!(!output.status.success(), "strict decode should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: comments are not allowed (found at 2:3)"), "unexpected stderr: {stderr}");
}

#[test]
fn shape_errors_exit_nonzero_with_line() {
	let fixture = fixture_arg("broken_resource.jsonc");
	let output = run_armdoc(&["resources", &fixture]);

	assert!(!output.status.success(), "broken template should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(
		stderr.contains("kind mismatch at line 5: expected resource object, got string"),
		"unexpected stderr: {stderr}"
	);
}
