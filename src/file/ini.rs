use super::{ensure_trailing_newline, render_error};
use crate::error::{Error, Result};
use serde_json::Value;

pub const FORMAT: &str = "ini";

/// An INI file: a mapping of section names to flat key/value mappings.
#[derive(Debug, Clone)]
pub struct IniFile {
    name: String,
    value: Value,
}

impl IniFile {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self { name: name.into(), value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    pub fn render(&self) -> Result<String> {
        let sections = self
            .value
            .as_object()
            .ok_or_else(|| self.error("top-level value must be a mapping of sections"))?;

        let mut out = String::new();
        for (section, entries) in sections {
            if section.is_empty() || section.contains(']') || section.contains('\n') {
                return Err(self.error(format!("invalid section name '{section}'")));
            }
            let entries = entries
                .as_object()
                .ok_or_else(|| self.error(format!("section '{section}' must be a mapping")))?;

            out.push_str(&format!("[{section}]\n"));
            for (key, value) in entries {
                if !valid_key(key) {
                    return Err(self.error(format!("invalid key '{key}' in section '{section}'")));
                }
                let value = self.scalar(section, key, value)?;
                if value.lines().any(|line| line != line.trim()) {
                    return Err(self.error(format!(
                        "'{section}.{key}' has leading or trailing whitespace"
                    )));
                }
                // Continuation lines are indented so parsers fold them back.
                out.push_str(&format!("{key} = {}\n", value.replace('\n', "\n\t")));
            }
            out.push('\n');
        }
        Ok(ensure_trailing_newline(&out))
    }

    fn scalar(&self, section: &str, key: &str, value: &Value) -> Result<String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Null => Err(self.error(format!("'{section}.{key}' is null"))),
            Value::Array(_) | Value::Object(_) => Err(self.error(format!(
                "'{section}.{key}' must be a string, number or boolean"
            ))),
        }
    }

    fn error(&self, reason: impl Into<String>) -> Error {
        render_error(&self.name, FORMAT, reason)
    }
}

/// Keys a reader parses back verbatim: no delimiters, no comment or
/// section prefix, no surrounding whitespace.
fn valid_key(key: &str) -> bool {
    !key.is_empty()
        && key == key.trim()
        && !key.starts_with(['#', ';', '['])
        && !key.contains(['=', ':', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde_json::json;

    /// Minimal reader for the subset of INI written above.
    fn parse(text: &str) -> IndexMap<String, IndexMap<String, String>> {
        let mut sections: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        let mut current = String::new();
        let mut last_key = String::new();
        for line in text.lines() {
            if let Some(rest) = line.strip_prefix('\t') {
                let value = sections[&current].get_mut(&last_key).unwrap();
                value.push('\n');
                value.push_str(rest);
            } else if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current = name.to_string();
                sections.entry(current.clone()).or_default();
            } else if let Some((key, value)) = line.split_once(" = ") {
                last_key = key.to_string();
                sections[&current].insert(last_key.clone(), value.to_string());
            }
        }
        sections
    }

    #[test]
    fn renders_mypy_config() {
        let file = IniFile::new(
            ".mypy.ini",
            json!({
                "mypy": {
                    "strict": true,
                    "mypy_path": "stubs",
                    "plugins": "returns.contrib.mypy.returns_plugin",
                },
            }),
        );
        assert_eq!(
            file.render().unwrap(),
            "[mypy]\nstrict = true\nmypy_path = stubs\nplugins = returns.contrib.mypy.returns_plugin\n"
        );
    }

    #[test]
    fn sections_are_separated_by_one_blank_line() {
        let file = IniFile::new("setup.cfg", json!({"a": {"x": 1}, "b": {}}));
        assert_eq!(file.render().unwrap(), "[a]\nx = 1\n\n[b]\n");
    }

    #[test]
    fn round_trips_through_a_reader() {
        let value = json!({
            "flake8": {"max-line-length": "88", "extend-ignore": "E203"},
            "tool": {"description": "first\nsecond"},
        });
        let text = IniFile::new("setup.cfg", value).render().unwrap();
        let parsed = parse(&text);
        assert_eq!(parsed["flake8"]["max-line-length"], "88");
        assert_eq!(parsed["flake8"]["extend-ignore"], "E203");
        assert_eq!(parsed["tool"]["description"], "first\nsecond");
    }

    #[test]
    fn nested_values_are_render_errors() {
        let nested = IniFile::new("x.ini", json!({"a": {"b": {"c": "d"}}}));
        assert!(matches!(nested.render(), Err(Error::RenderError { .. })));

        let list = IniFile::new("x.ini", json!({"a": {"b": ["c"]}}));
        assert!(list.render().unwrap_err().to_string().contains("'a.b'"));

        let null = IniFile::new("x.ini", json!({"a": {"b": null}}));
        assert!(matches!(null.render(), Err(Error::RenderError { .. })));
    }

    #[test]
    fn flat_top_level_is_a_render_error() {
        let file = IniFile::new("x.ini", json!({"key": "value"}));
        let err = file.render().unwrap_err();
        assert!(err.to_string().contains("section 'key' must be a mapping"));
    }

    #[test]
    fn keys_with_delimiters_are_rejected() {
        let file = IniFile::new("x.ini", json!({"a": {"k=v": "x"}}));
        assert!(matches!(file.render(), Err(Error::RenderError { .. })));
    }

    #[test]
    fn keys_read_back_differently_are_rejected() {
        for key in ["#key", ";key", "[key", " lead", "trail ", "a=b", "a:b"] {
            let file = IniFile::new("setup.cfg", json!({ "s": { key: "x" } }));
            let err = file.render().unwrap_err();
            assert!(
                matches!(err, Error::RenderError { ref reason, .. } if reason.contains("invalid key")),
                "key {key:?} was accepted"
            );
        }
    }

    #[test]
    fn padded_values_are_rejected() {
        for value in ["  padded", "padded ", "first\n  second"] {
            let file = IniFile::new("setup.cfg", json!({ "s": { "k": value } }));
            assert!(
                matches!(file.render(), Err(Error::RenderError { .. })),
                "value {value:?} was accepted"
            );
        }
    }

    #[test]
    fn blank_continuation_lines_are_kept() {
        let file = IniFile::new("setup.cfg", json!({ "s": { "k": "first\n\nthird" } }));
        assert_eq!(file.render().unwrap(), "[s]\nk = first\n\t\n\tthird\n");
    }
}
