use super::*;
use logfwd_core::ForwardingError;
use serde_json::json;

const TEST_DESTINATION_ARN: &str =
    "arn:aws:lambda:us-moon-1:314159265358:function:testforward-test-forward";

fn service_yaml(custom_block: &str) -> String {
    format!(
        r#"
service: test-service

provider:
  name: aws
  region: us-moon-1
  stage: test-stage

custom:
  logForwarding:
{custom_block}

functions:
  testFunctionOne:
    handler: handler.one
  testFunctionTwo:
    handler: handler.two

resources:
  Resources:
    TestExistingFilter:
      Type: "AWS:Test:Filter"
"#
    )
}

fn service_with(custom_block: &str) -> ServiceDescription {
    serde_yaml::from_str(&service_yaml(custom_block)).unwrap()
}

fn destination_only() -> String {
    format!("    destinationARN: \"{TEST_DESTINATION_ARN}\"")
}

#[test]
fn test_update_merges_into_existing_resources() {
    let mut service = service_with(&destination_only());
    let outcome = update_resources(&mut service, None).unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated { declarations: 3 });

    let resources = &service.resources.as_ref().unwrap().resources;
    assert_eq!(resources.len(), 4);
    assert_eq!(
        resources["TestExistingFilter"],
        json!({"Type": "AWS:Test:Filter"})
    );
    assert_eq!(
        resources["SubscriptionFilterTestFunctionOne"],
        json!({
            "Type": "AWS::Logs::SubscriptionFilter",
            "Properties": {
                "DestinationArn": TEST_DESTINATION_ARN,
                "FilterPattern": "",
                "LogGroupName": "/aws/lambda/test-service-test-stage-testFunctionOne",
            },
            "DependsOn": ["LogForwardingLambdaPermission", "TestFunctionOneLogGroup"],
        })
    );
    assert_eq!(
        resources["LogForwardingLambdaPermission"],
        json!({
            "Type": "AWS::Lambda::Permission",
            "Properties": {
                "FunctionName": TEST_DESTINATION_ARN,
                "Action": "lambda:InvokeFunction",
                "Principal": "logs.us-moon-1.amazonaws.com",
            },
        })
    );
}

#[test]
fn test_update_initializes_absent_resource_section() {
    let mut service = service_with(&destination_only());
    service.resources = None;

    update_resources(&mut service, None).unwrap();

    let resources = &service.resources.as_ref().unwrap().resources;
    assert_eq!(resources.len(), 3);
    assert!(resources.contains_key("LogForwardingLambdaPermission"));
    assert!(resources.contains_key("SubscriptionFilterTestFunctionOne"));
    assert!(resources.contains_key("SubscriptionFilterTestFunctionTwo"));
}

#[test]
fn test_update_stage_override_changes_log_groups() {
    let mut service = service_with(&destination_only());
    update_resources(&mut service, Some("dev")).unwrap();

    let resources = &service.resources.as_ref().unwrap().resources;
    assert_eq!(
        resources["SubscriptionFilterTestFunctionOne"]["Properties"]["LogGroupName"],
        "/aws/lambda/test-service-dev-testFunctionOne"
    );
}

#[test]
fn test_update_stage_gate_leaves_template_untouched() {
    let custom = format!("{}\n    stages:\n      - production", destination_only());
    let mut service = service_with(&custom);
    let outcome = update_resources(&mut service, None).unwrap();
    assert_eq!(outcome, UpdateOutcome::SkippedStage);

    let resources = &service.resources.as_ref().unwrap().resources;
    assert_eq!(resources.len(), 1);
    assert!(resources.contains_key("TestExistingFilter"));
}

#[test]
fn test_update_stage_gate_does_not_initialize_template() {
    let custom = format!("{}\n    stages:\n      - production", destination_only());
    let mut service = service_with(&custom);
    service.resources = None;

    let outcome = update_resources(&mut service, None).unwrap();
    assert_eq!(outcome, UpdateOutcome::SkippedStage);
    assert!(service.resources.is_none());
}

#[test]
fn test_update_stage_gate_respects_override() {
    let custom = format!("{}\n    stages:\n      - production", destination_only());
    let mut service = service_with(&custom);
    let outcome = update_resources(&mut service, Some("production")).unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated { declarations: 3 });
}

#[test]
fn test_update_missing_destination_propagates() {
    let mut service = service_with("    filterPattern: \"Test Pattern\"");
    let err = update_resources(&mut service, None).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ForwardingError>(),
        Some(ForwardingError::MissingDestination)
    ));
}

#[test]
fn test_update_missing_custom_section_propagates() {
    let yaml = r#"
service: test-service
provider:
  stage: test-stage
functions:
  testFunctionOne:
    handler: handler.one
"#;
    let mut service: ServiceDescription = serde_yaml::from_str(yaml).unwrap();
    let err = update_resources(&mut service, None).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ForwardingError>(),
        Some(ForwardingError::SettingsNotConfigured)
    ));
}

#[test]
fn test_update_respects_function_overrides() {
    let yaml = format!(
        r#"
service: test-service

provider:
  region: us-moon-1
  stage: test-stage

custom:
  logForwarding:
    destinationARN: "{TEST_DESTINATION_ARN}"

functions:
  testFunctionOne:
    handler: handler.one
  testFunctionTwo:
    handler: handler.two
    logForwarding: {{}}
  testFunctionThree:
    handler: handler.three
    logForwarding:
      enabled: true
  testFunctionFour:
    handler: handler.four
    logForwarding:
      enabled: false
"#
    );
    let mut service: ServiceDescription = serde_yaml::from_str(&yaml).unwrap();
    update_resources(&mut service, None).unwrap();

    let resources = &service.resources.as_ref().unwrap().resources;
    assert!(resources.contains_key("SubscriptionFilterTestFunctionOne"));
    assert!(resources.contains_key("SubscriptionFilterTestFunctionTwo"));
    assert!(resources.contains_key("SubscriptionFilterTestFunctionThree"));
    assert!(!resources.contains_key("SubscriptionFilterTestFunctionFour"));
}

#[test]
fn test_update_uses_explicit_physical_function_name() {
    let yaml = format!(
        r#"
service: test-service

provider:
  region: us-moon-1
  stage: test-stage

custom:
  logForwarding:
    destinationARN: "{TEST_DESTINATION_ARN}"

functions:
  testFunctionOne:
    handler: handler.one
    name: custom-physical-name
"#
    );
    let mut service: ServiceDescription = serde_yaml::from_str(&yaml).unwrap();
    update_resources(&mut service, None).unwrap();

    let resources = &service.resources.as_ref().unwrap().resources;
    assert_eq!(
        resources["SubscriptionFilterTestFunctionOne"]["Properties"]["LogGroupName"],
        "/aws/lambda/custom-physical-name"
    );
}

#[test]
fn test_update_overwrites_same_keyed_declaration() {
    let mut service = service_with(&destination_only());
    service
        .resources
        .as_mut()
        .unwrap()
        .resources
        .insert(
            "SubscriptionFilterTestFunctionOne".to_string(),
            json!({"Type": "Stale"}),
        );

    update_resources(&mut service, None).unwrap();

    let resources = &service.resources.as_ref().unwrap().resources;
    assert_eq!(
        resources["SubscriptionFilterTestFunctionOne"]["Type"],
        "AWS::Logs::SubscriptionFilter"
    );
}
