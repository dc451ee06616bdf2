use serde_json::Value;

/// Headline figure of each calculator, in lookup order.
const PRIORITY_KEYS: [&str; 7] = [
    "maturity_value",
    "final_balance",
    "periodic_payment",
    "required_corpus",
    "cagr_percent",
    "total",
    "interest",
];

/// Print just the headline number from the output, falling back to the
/// first field of the result.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(value));
}

fn headline(value: &Value) -> String {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result {
        if let Some(val) = PRIORITY_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find(|val| !val.is_null())
        {
            return format_minimal(val);
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_minimal(val));
        }
    }

    format_minimal(result)
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maturity_value_wins() {
        let out = json!({"result": {"total_invested": "600000", "maturity_value": "1161695.38"}});
        assert_eq!(headline(&out), "1161695.38");
    }

    #[test]
    fn test_simple_interest_prefers_total() {
        let out = json!({"result": {"interest": "10000", "total": "60000"}});
        assert_eq!(headline(&out), "60000");
    }

    #[test]
    fn test_unknown_result_falls_back_to_first_field() {
        let out = json!({"result": {"annual_expense": "600000"}});
        assert_eq!(headline(&out), "annual_expense: 600000");
    }
}
