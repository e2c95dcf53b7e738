use super::{ensure_trailing_newline, render_error};
use crate::error::Result;
use serde::Serialize;

pub const FORMAT: &str = "toml";

/// A TOML document built from a structured value.
#[derive(Debug, Clone)]
pub struct TomlFile {
    name: String,
    value: serde_json::Value,
}

impl TomlFile {
    pub fn new(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self { name: name.into(), value }
    }

    /// Builds the payload from any serializable value.
    pub fn from_serialize<T: Serialize>(name: impl Into<String>, value: &T) -> Result<Self> {
        let name = name.into();
        let value = serde_json::to_value(value)
            .map_err(|e| render_error(&name, FORMAT, e.to_string()))?;
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut serde_json::Value {
        &mut self.value
    }

    pub fn render(&self) -> Result<String> {
        if !self.value.is_object() {
            return Err(render_error(&self.name, FORMAT, "top-level value must be a table"));
        }
        let text = ::toml::to_string(&self.value)
            .map_err(|e| render_error(&self.name, FORMAT, e.to_string()))?;
        Ok(ensure_trailing_newline(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn pyproject() -> serde_json::Value {
        json!({
            "build-system": {
                "requires": ["poetry>=0.12"],
                "build-backend": "poetry.masonry.api",
            },
            "tool": {
                "poetry": {
                    "name": "my-project",
                    "version": "0.1.0",
                    "description": "It's a great project",
                    "authors": ["Joseph Egan <...>"],
                    "dependencies": {
                        "python": "^3.8",
                        "dep42": {"version": "1.0.0", "extras": ["blue", "green"]},
                    },
                    "dev-dependencies": {},
                },
            },
        })
    }

    #[test]
    fn renders_parseable_toml() {
        let file = TomlFile::new("pyproject.toml", pyproject());
        let text = file.render().unwrap();

        assert!(text.ends_with('\n') && !text.ends_with("\n\n"));
        assert!(text.contains("[tool.poetry]"));
        let parsed: serde_json::Value = ::toml::from_str(&text).unwrap();
        assert_eq!(parsed, pyproject());
    }

    #[test]
    fn scalars_after_tables_still_round_trip() {
        let value = json!({"section": {"a": 1}, "flag": true, "list": [1, 2, 3]});
        let text = TomlFile::new("x.toml", value.clone()).render().unwrap();
        let parsed: serde_json::Value = ::toml::from_str(&text).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn null_is_a_render_error() {
        let file = TomlFile::new("x.toml", json!({"key": null}));
        let err = file.render().unwrap_err();
        assert!(matches!(err, Error::RenderError { ref name, ref format, .. }
            if name == "x.toml" && format == "toml"));
    }

    #[test]
    fn non_table_top_level_is_a_render_error() {
        let err = TomlFile::new("x.toml", json!(["a"])).render().unwrap_err();
        assert!(err.to_string().contains("top-level value must be a table"));
    }

    #[test]
    fn payload_mutation_shows_in_render() {
        let mut file = TomlFile::new("x.toml", json!({"name": "before"}));
        file.value_mut()["name"] = json!("after");
        assert_eq!(file.render().unwrap(), "name = \"after\"\n");
    }

    #[test]
    fn builds_from_serializable_structs() {
        #[derive(Serialize)]
        struct Tool {
            name: String,
        }
        let file = TomlFile::from_serialize("t.toml", &Tool { name: "x".into() }).unwrap();
        assert_eq!(file.render().unwrap(), "name = \"x\"\n");
    }
}
