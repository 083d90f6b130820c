use argmap::{
    parse_args, ArgumentParser, CoercionError, Error, Kind, OptionDefinition, OptionValue,
    ParseConfig, ParseError, Schema, SchemaError, Value,
};
use assert_matches::assert_matches;
use rstest::rstest;

fn number_multiple() -> Vec<OptionDefinition> {
    vec![OptionDefinition::number("array").multiple()]
}

#[rstest]
#[case(vec!["--array", "1", "2", "3"])]
#[case(vec!["--array", "1", "--array", "2", "--array", "3"])]
fn number_multiple_values(#[case] argv: Vec<&str>) {
    let result = parse_args(number_multiple(), &argv, ParseConfig::default()).unwrap();

    assert_eq!(result.get("array"), Some(&OptionValue::from(vec![1, 2, 3])));
    assert_ne!(
        result.get("array"),
        Some(&OptionValue::from(vec!["1", "2", "3"]))
    );
    assert_eq!(result.to_json().unwrap(), r#"{"array":[1.0,2.0,3.0]}"#);
}

#[test]
fn number_multiple_absent() {
    let result = parse_args::<&str>(number_multiple(), &[], ParseConfig::default()).unwrap();
    assert!(!result.contains("array"));
    assert_eq!(result.to_json().unwrap(), "{}");
}

#[test]
fn number_multiple_invalid() {
    let error = parse_args(
        number_multiple(),
        &["--array", "1", "two"],
        ParseConfig::default(),
    )
    .unwrap_err();

    assert_matches!(
        &error,
        Error::Parse(ParseError::Coercion(coercion)) if coercion.token() == "two" && coercion.kind() == Kind::Number
    );
    assert_eq!(
        error.to_string(),
        "Parse error: Option 'array' cannot convert 'two' to number."
    );
}

#[test]
fn strict_unknown() {
    let error = parse_args(number_multiple(), &["--other"], ParseConfig::default()).unwrap_err();
    assert_matches!(error, Error::Parse(ParseError::UnknownOption(unknown)) if unknown.token() == "--other");
}

#[test]
fn schema_invalid() {
    let error = parse_args::<&str>(
        vec![
            OptionDefinition::string("one").alias('x'),
            OptionDefinition::string("two").alias('x'),
        ],
        &[],
        ParseConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error, Error::Schema(SchemaError::DuplicateAlias('x')));
}

#[test]
fn json_schema_round_trip() {
    let schema = Schema::from_json(
        r#"[
            {"name": "verbose", "alias": "v", "type": "boolean"},
            {"name": "src", "type": "string", "multiple": true, "defaultOption": true},
            {"name": "timeout", "alias": "t", "type": "number"}
        ]"#,
    )
    .unwrap();
    let config: ParseConfig = serde_json::from_str(r#"{"partial": true}"#).unwrap();
    let parser = ArgumentParser::with_config(schema, config).unwrap();

    let result = parser
        .parse(&["one.js", "-vt", "10", "two.js", "--exclude", "three.js"])
        .unwrap();

    assert_eq!(
        result.get("verbose"),
        Some(&OptionValue::Single(Value::Boolean(true)))
    );
    assert_eq!(
        result.get("timeout"),
        Some(&OptionValue::Single(Value::Number(10.0)))
    );
    assert_eq!(
        result.get("src"),
        Some(&OptionValue::from(vec!["one.js", "two.js", "three.js"]))
    );
    assert_eq!(result.unknown(), ["--exclude"]);
    assert_eq!(
        result.to_json().unwrap(),
        r#"{"verbose":true,"src":["one.js","two.js","three.js"],"timeout":10.0,"_unknown":["--exclude"]}"#
    );
}

#[test]
fn parser_reuse() {
    let parser = ArgumentParser::new(Schema::new(number_multiple()).unwrap());
    let first = parser.parse(&["--array", "1"]).unwrap();
    let second = parser.parse(&["--array", "2"]).unwrap();

    assert_eq!(first.get("array"), Some(&OptionValue::from(vec![1])));
    assert_eq!(second.get("array"), Some(&OptionValue::from(vec![2])));
    assert_eq!(parser.parse(&["--array", "1"]).unwrap(), first);
}

#[test]
fn owned_tokens() {
    let parser = ArgumentParser::new(Schema::new(number_multiple()).unwrap());
    let argv: Vec<String> = vec!["--array".to_string(), "-4".to_string()];
    let result = parser.parse(&argv).unwrap();
    assert_eq!(result.get("array"), Some(&OptionValue::from(vec![-4])));
}

#[test]
fn coercion_error_accessors() {
    let parser = ArgumentParser::new(
        Schema::new(vec![OptionDefinition::boolean("flag").alias('f')]).unwrap(),
    );
    let error: ParseError = parser.parse(&["-f=maybe"]).unwrap_err();
    let expected: &CoercionError = match &error {
        ParseError::Coercion(coercion) => coercion,
        other => panic!("unexpected error: {other}"),
    };

    assert_eq!(expected.option(), "flag");
    assert_eq!(expected.token(), "maybe");
    assert_eq!(expected.kind(), Kind::Boolean);
}
