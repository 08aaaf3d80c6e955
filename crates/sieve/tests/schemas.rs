use sieve::prelude::*;

fn check(input: Value, schema: &SchemaNode, expected: Value) {
    assert_eq!(validate(input, schema).unwrap(), expected);
}

fn reject(input: Value, schema: &SchemaNode) {
    assert!(
        validate(input.clone(), schema).is_err(),
        "{} should be rejected",
        input
    );
}

fn typed(kind: ValueKind) -> SchemaNode {
    DescriptorBuilder::typed(kind).build().unwrap()
}

#[test]
fn test_scalar_kinds() {
    let cases = [
        (ValueKind::Text, value!("123"), value!(123)),
        (ValueKind::Integer, value!(100500), value!("100500")),
        (ValueKind::Float, value!(1.001), value!(1)),
        (ValueKind::Bool, value!(true), value!(1)),
    ];
    for (kind, good, bad) in cases {
        for schema in [SchemaNode::from(kind), typed(kind)] {
            check(good.clone(), &schema, good.clone());
            reject(bad.clone(), &schema);
        }
    }
}

#[test]
fn test_map_without_body() {
    let input = value!({"1": 2, "abc": "cde"});
    check(input.clone(), &typed(ValueKind::Map), input);
}

#[test]
fn test_map_fields() {
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .field("1", typed(ValueKind::Integer))
        .field("abc", typed(ValueKind::Text))
        .build()
        .unwrap();
    let input = value!({"1": 2, "abc": "cde"});
    check(input.clone(), &schema, input);
}

#[test]
fn test_sequences() {
    let input = value!(["1", 2, "abc", "cde"]);
    check(input.clone(), &typed(ValueKind::Array), input);

    let schema = DescriptorBuilder::typed(ValueKind::Array)
        .elements(typed(ValueKind::Text))
        .build()
        .unwrap();
    let input = value!(["1", "2", "abc", "cde"]);
    check(input.clone(), &schema, input);
}

#[test]
fn test_const_fields() {
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .field("1", DescriptorBuilder::constant("2"))
        .field("2", DescriptorBuilder::enumeration(0..100))
        .build()
        .unwrap();
    let input = value!({"1": "2", "2": 10});
    check(input.clone(), &schema, input);
    reject(value!({"1": "1", "2": 10}), &schema);
    reject(value!({"1": "2", "2": 100}), &schema);
}

#[test]
fn test_default() {
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .field("1", typed(ValueKind::Text))
        .field(
            "abc",
            DescriptorBuilder::typed(ValueKind::Text).default("default_value"),
        )
        .build()
        .unwrap();
    check(
        value!({"1": "2"}),
        &schema,
        value!({"1": "2", "abc": "default_value"}),
    );
}

fn below_five() -> Predicate {
    predicates::between(f64::NEG_INFINITY, 4.0)
}

#[test]
fn test_filter() {
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .field(
            "1",
            DescriptorBuilder::typed(ValueKind::Integer).filter(below_five()),
        )
        .build()
        .unwrap();
    check(value!({"1": 2}), &schema, value!({"1": 2}));

    let err = validate(value!({"1": 10}), &schema).unwrap_err();
    assert_eq!(err.message, r#""1" not passed filter"#);
}

#[test]
fn test_pre_call_sum() {
    let sum = Transform::try_map(|value| {
        let text = value
            .as_text()
            .ok_or_else(|| TransformError::new("expected text"))?;
        let mut total = 0i64;
        for part in text.split(',') {
            total += part
                .trim()
                .parse::<i64>()
                .map_err(|err| TransformError::new(err.to_string()))?;
        }
        Ok(Value::from(total))
    });
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .field("1", DescriptorBuilder::typed(ValueKind::Integer).pre_call(sum))
        .build()
        .unwrap();
    check(
        value!({"1": "1, 2, 3, 4, 5, 6, 7, 8, 9, 10"}),
        &schema,
        value!({"1": 55}),
    );
}

#[test]
fn test_post_call_after_checks() {
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .field(
            "1",
            DescriptorBuilder::typed(ValueKind::Integer)
                .pre_call(transforms::to_integer())
                .filter(below_five())
                .post_call(transforms::to_text()),
        )
        .build()
        .unwrap();
    check(value!({"1": "2"}), &schema, value!({"1": "2"}));
    reject(value!({"1": "7"}), &schema);
}

#[test]
fn test_blank() {
    let allowed = DescriptorBuilder::typed(ValueKind::Text)
        .blank(true)
        .build()
        .unwrap();
    check(value!(""), &allowed, value!(""));

    let rejected = DescriptorBuilder::typed(ValueKind::Text)
        .blank(false)
        .build()
        .unwrap();
    reject(value!(""), &rejected);
}

#[test]
fn test_length_bounds() {
    let max = DescriptorBuilder::typed(ValueKind::Text)
        .max_length(10)
        .build()
        .unwrap();
    check(value!("A".repeat(10)), &max, value!("A".repeat(10)));
    let err = validate(value!("A".repeat(12)), &max).unwrap_err();
    assert_eq!(err.message, r#""Top-level" > max_length (12 > 10)"#);

    let min = DescriptorBuilder::typed(ValueKind::Text)
        .min_length(10)
        .build()
        .unwrap();
    check(value!("A".repeat(10)), &min, value!("A".repeat(10)));
    reject(value!("A".repeat(9)), &min);
}

#[test]
fn test_unexpected() {
    let input = value!({"1": 2, "abc": "def"});
    let open = DescriptorBuilder::typed(ValueKind::Map)
        .field("1", typed(ValueKind::Integer))
        .unexpected(true)
        .build()
        .unwrap();
    check(input.clone(), &open, input.clone());

    let closed = DescriptorBuilder::typed(ValueKind::Map)
        .field("1", typed(ValueKind::Integer))
        .unexpected(false)
        .build()
        .unwrap();
    reject(input, &closed);
}

#[test]
fn test_any_key() {
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .any_key(typed(ValueKind::Integer))
        .unexpected(true)
        .build()
        .unwrap();
    let input = value!({"1": 2, "abc": 3});
    check(input.clone(), &schema, input);
    reject(value!({"1": 2, "abc": "3"}), &schema);
}

#[test]
fn test_nested_errmsg_masks_detail() {
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .field(
            "server",
            DescriptorBuilder::typed(ValueKind::Map)
                .field("port", ValueKind::Integer)
                .errmsg("invalid server section"),
        )
        .errmsg("invalid config")
        .build()
        .unwrap();

    let err = validate(value!({"server": {"port": "x"}}), &schema).unwrap_err();
    assert_eq!(err.message, "invalid config");
    assert_eq!(err.path.to_string(), "server.port");

    let config = Config {
        nested_errmsg: ErrmsgPolicy::Prefix,
        ..Config::default()
    };
    let err = validate_with(value!({"server": {"port": "x"}}), &schema, &config).unwrap_err();
    assert_eq!(
        err.message,
        r#"invalid config: invalid server section: "x" is not type of "integer" for port"#
    );
}

#[test]
fn test_json_document() {
    let schema = DescriptorBuilder::typed(ValueKind::Map)
        .field(
            "ids",
            DescriptorBuilder::typed(ValueKind::Array).elements(ValueKind::Integer),
        )
        .build()
        .unwrap();
    let json = serde_json::json!({"ids": [1, 2, 3]});
    assert_eq!(sieve::json::validate_json(&json, &schema).unwrap(), json);
}
