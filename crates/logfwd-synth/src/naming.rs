//! Deterministic AWS naming, mirroring the provider's conventions.

/// Identifier-safe PascalCase variant of a function name.
///
/// Separators split segments and each segment's first character is
/// uppercased: `testFunctionOne` -> `TestFunctionOne`,
/// `log-shipper_v2` -> `LogShipperV2`.
pub fn normalized_function_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut upper_next = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if upper_next {
                normalized.push(ch.to_ascii_uppercase());
                upper_next = false;
            } else {
                normalized.push(ch);
            }
        } else {
            upper_next = true;
        }
    }
    normalized
}

/// Physical function name: an explicit `name` from the service file wins,
/// else the provider's `<service>-<stage>-<name>` convention.
pub fn physical_function_name(
    service: &str,
    stage: &str,
    name: &str,
    explicit: Option<&str>,
) -> String {
    match explicit {
        Some(explicit) => explicit.to_string(),
        None => format!("{service}-{stage}-{name}"),
    }
}

/// CloudWatch log group backing a Lambda function.
pub fn log_group_name(physical_name: &str) -> String {
    format!("/aws/lambda/{physical_name}")
}

/// Logical id of the function's own log-group declaration.
pub fn log_group_logical_id(function_name: &str) -> String {
    format!("{}LogGroup", normalized_function_name(function_name))
}
