//! Unit tests for YAML configuration loading

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use dynform::config::yaml::load_config;
    use dynform::system::mock::MockSystem;
    use std::path::PathBuf;

    #[test]
    fn load_valid_config() {
        let config_content = r#"
schema: "forms/schema.json"
uiConfig: "forms/ui.yaml"
formAction: "/register"
"#;

        let system = MockSystem::new()
            .with_file("/app/dynform.yaml", config_content.as_bytes())
            .unwrap();

        let config = load_config(&system, "/app/dynform.yaml").unwrap();

        assert_eq!(config.schema_path(), PathBuf::from("/app/forms/schema.json"));
        assert_eq!(config.ui_config_path(), PathBuf::from("/app/forms/ui.yaml"));
        assert_eq!(config.form_action, "/register");
        assert_eq!(config.back_link, "dynamicForm");
    }

    #[test]
    fn load_nonexistent_file() {
        let system = MockSystem::new();
        let result = load_config(&system, "/nonexistent/file.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Configuration file not found")
        );
    }
}
