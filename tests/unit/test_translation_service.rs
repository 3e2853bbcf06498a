#[cfg(test)]
mod tests {
    use flow_builder_api::models::{Field, Model, ValidationOptions};
    use flow_builder_api::services::TranslationService;
    use serde_json::json;

    #[test]
    fn test_field_type_map() {
        let cases = [
            ("primary key", "INTEGER"),
            ("string", "STRING"),
            ("long text", "TEXT"),
            ("integer", "INTEGER"),
            ("double", "DOUBLE"),
            ("big number", "BIGINT"),
            ("boolean", "BOOLEAN"),
            ("date", "DATE"),
            ("datetime", "DATETIME"),
            ("uuid", "UUID"),
            ("json", "JSON"),
            ("mapping", "MAPPING"),
        ];
        for (input, expected) in cases {
            assert_eq!(TranslationService::translate_field_type(input), expected);
        }
    }

    #[test]
    fn test_unknown_field_type_passes_through_uppercased() {
        assert_eq!(TranslationService::translate_field_type("custom"), "CUSTOM");
        assert_eq!(TranslationService::translate_field_type("geo point"), "GEO POINT");
    }

    #[test]
    fn test_translate_model_basic_shape() {
        let mut model = Model::new("Post");
        model.fields = vec![Field::new("id", "primary key"), Field::new("title", "string")];

        let value = TranslationService::translate_model(&model);
        assert_eq!(value["name"], json!("Post"));

        let fields = value["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["name"], json!("id"));
        assert_eq!(fields[0]["type"], json!("INTEGER"));
        assert_eq!(fields[0]["isPrimaryKey"], json!(true));
        assert_eq!(fields[1]["type"], json!("STRING"));
        assert_eq!(fields[1]["isPrimaryKey"], json!(false));
    }

    #[test]
    fn test_empty_default_value_becomes_null() {
        let mut model = Model::new("Post");
        let mut with_default = Field::new("status", "string");
        with_default.default_value = "draft".to_string();
        model.fields = vec![Field::new("title", "string"), with_default];

        let value = TranslationService::translate_model(&model);
        let fields = value["fields"].as_array().unwrap();
        assert_eq!(fields[0]["defaultValue"], json!(null));
        assert_eq!(fields[1]["defaultValue"], json!("draft"));
    }

    #[test]
    fn test_validation_descriptor_merges_options() {
        let mut field = Field::new("age", "integer");
        field.validation = "range".to_string();
        field.validation_options = Some(ValidationOptions {
            min: Some(0.0),
            max: Some(120.0),
            ..ValidationOptions::default()
        });

        let mut model = Model::new("Person");
        model.fields = vec![field];

        let value = TranslationService::translate_model(&model);
        let validation = &value["fields"][0]["validation"];
        assert_eq!(validation["type"], json!("range"));
        assert_eq!(validation["min"], json!(0.0));
        assert_eq!(validation["max"], json!(120.0));
        assert!(validation.get("pattern").is_none());
    }

    #[test]
    fn test_no_validation_rule_yields_null() {
        let mut model = Model::new("Person");
        model.fields = vec![Field::new("name", "string")];

        let value = TranslationService::translate_model(&model);
        assert_eq!(value["fields"][0]["validation"], json!(null));
    }

    #[test]
    fn test_mapping_key_only_present_when_set() {
        let mut mapped = Field::new("status", "mapping");
        mapped.mapping = Some("active:1,inactive:0".to_string());
        let mut model = Model::new("Account");
        model.fields = vec![Field::new("name", "string"), mapped];

        let value = TranslationService::translate_model(&model);
        let fields = value["fields"].as_array().unwrap();
        assert!(fields[0].get("mapping").is_none());
        assert_eq!(fields[1]["mapping"], json!({"active": "1", "inactive": "0"}));
    }

    #[test]
    fn test_parse_mapping_trims_whitespace() {
        let parsed = TranslationService::parse_mapping(" a : 1 , b : 2 ");
        assert_eq!(parsed.get("a"), Some(&json!("1")));
        assert_eq!(parsed.get("b"), Some(&json!("2")));
    }

    #[test]
    fn test_parse_mapping_malformed_degrades_to_empty() {
        assert!(TranslationService::parse_mapping("no-colon-here").is_empty());
        assert!(TranslationService::parse_mapping("a:1,bad").is_empty());
        assert!(TranslationService::parse_mapping("").is_empty());
    }

    #[test]
    fn test_parse_mapping_value_with_colon() {
        // Only the first colon splits; the rest belongs to the value.
        let parsed = TranslationService::parse_mapping("url:http://x");
        assert_eq!(parsed.get("url"), Some(&json!("http://x")));
    }
}
