use armdoc_testkit::{fixture_path, read_fixture};
use serde_json::json;

use crate::arm::jsonc::{ParseOptions, parse};
use crate::arm::{ArmError, Kind, Template, Type, decode_template};

#[test]
fn storage_fixture_decodes_with_lines_and_comments() {
	let template = Template::open(fixture_path("storage_account.jsonc")).expect("fixture decodes");

	assert!(template.schema.as_str().is_some_and(|schema| schema.ends_with("deploymentTemplate.json#")));
	assert_eq!(template.schema.metadata.comments, vec![" Deploys one storage account.".to_owned()]);
	assert_eq!(template.content_version.as_str(), Some("1.0.0.0"));
	assert!(template.api_profile.is_null());

	assert_eq!(template.parameters.len(), 2);
	let location = &template.parameters["location"];
	assert_eq!((location.metadata.start_line, location.metadata.end_line), (12, 15));
	assert_eq!(location.metadata.comments, vec![" Region for every resource. ".to_owned()]);
	assert_eq!(location.default_value.as_str(), Some("[resourceGroup().location]"));
	assert_eq!(template.parameters["storageName"].max_length.as_f64(), Some(24.0));

	assert_eq!(template.variables["skuName"].as_str(), Some("Standard_LRS"));
	assert!(template.functions.is_empty(), "function bodies are not modeled");

	assert_eq!(template.outputs["storageId"].value_type, Type::Object);
	assert_eq!(template.outputs["storageId"].metadata.start_line, 62);
}

#[test]
fn storage_fixture_resources_keep_source_order() {
	let template = Template::open(fixture_path("storage_account.jsonc")).expect("fixture decodes");

	let types: Vec<&str> = template.resources.iter().filter_map(|resource| resource.resource_type.as_str()).collect();
	assert_eq!(types, vec!["Microsoft.Storage/storageAccounts", "Microsoft.Network/networkSecurityGroups"]);

	let storage = &template.resources[0];
	assert_eq!((storage.metadata.start_line, storage.metadata.end_line), (27, 42));
	assert!(storage.tags.is_empty(), "storage account has no tags");
	let https = storage.properties.get("supportsHttpsTrafficOnly").expect("https property");
	assert_eq!(https.metadata.start_line, 38);
	assert_eq!(https.metadata.comments, vec![" Plain HTTP must stay disabled.".to_owned()]);
	assert_eq!(storage.properties.get("minimumTlsVersion").map(|value| value.metadata.start_line), Some(39));

	let nsg = &template.resources[1];
	assert_eq!((nsg.metadata.start_line, nsg.metadata.end_line), (43, 59));
	assert_eq!(nsg.tags.get("env").map(|tag| tag.metadata.start_line), Some(49));
	let rules = nsg.properties.get("securityRules").expect("security rules");
	assert_eq!(rules.value_type, Type::Array);
	assert_eq!(rules.raw[0]["properties"]["destinationPortRange"], json!("22"));

	let hits: Vec<&str> = template.resources_at_line(55).filter_map(|resource| resource.name.as_str()).collect();
	assert_eq!(hits, vec!["web-nsg"]);
}

#[test]
fn plain_json_fixture_decodes_under_strict_options() {
	let template =
		Template::open_with_options(fixture_path("empty_resources.json"), &ParseOptions::strict_json()).expect("strict fixture decodes");
	assert!(template.resources.is_empty());
	assert!(template.parameters.is_empty());
	assert!(template.outputs.is_empty());
}

#[test]
fn broken_resource_fails_without_partial_template() {
	let err = Template::open(fixture_path("broken_resource.jsonc")).expect_err("string resource rejected");
	assert!(matches!(
		err,
		ArmError::KindMismatch {
			expected: "resource object",
			found: Kind::String,
			line: 5
		}
	));
}

#[test]
fn root_must_be_object() {
	let err = Template::parse("[]").expect_err("array root rejected");
	assert!(matches!(err, ArmError::KindMismatch { expected: "template object", .. }));
}

#[test]
fn missing_file_reports_io() {
	let err = Template::open(fixture_path("does_not_exist.json")).expect_err("missing file");
	assert!(matches!(err, ArmError::Io(_)));
}

#[test]
fn functions_stay_empty_for_any_source_shape() {
	let template = Template::parse(r#"{"functions": "not even an array"}"#).expect("template decodes");
	assert!(template.functions.is_empty());
}

#[test]
fn independent_documents_decode_concurrently() {
	let text = read_fixture("storage_account.jsonc");
	let expected = Template::parse(&text).expect("fixture decodes");

	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| Template::parse(&text).expect("fixture decodes"))).collect();
		for handle in handles {
			assert_eq!(handle.join().expect("decode thread completes"), expected);
		}
	});
}

#[test]
fn template_serializes_with_schema_key() {
	let root = parse(&read_fixture("storage_account.jsonc")).expect("fixture parses");
	let template = decode_template(&root).expect("fixture decodes");
	let json = serde_json::to_value(&template).expect("template serializes");

	assert_eq!(json["$schema"]["startLine"], json!(3));
	assert_eq!(json["resources"][0]["type"]["raw"], json!("Microsoft.Storage/storageAccounts"));
	assert_eq!(json["resources"][0]["startLine"], json!(27));
	assert_eq!(json["functions"], json!([]));
}
