//! Converts an archive name template into its equivalent in shell.
//!
//! `{{ .Binary }}_{{ .Os }}` becomes `NAME=${BINARY}_${OS}`. Templates use the
//! goreleaser (Go template) action syntax; field references and simple
//! `if`/`else`/`end` blocks are lowered to tera and rendered against the shell
//! variables of the install script. Anything else is handed to tera as-is and
//! fails there.

use tera::{Context, Tera};

use crate::error::{GhScriptError, Result};

/// goreleaser's default archive name template
pub const DEFAULT_NAME_TEMPLATE: &str =
    "{{ .Binary }}_{{ .Os }}_{{ .Arch }}{{ if .Arm }}v{{ .Arm }}{{ end }}";

/// The default template with the ARM prefix moved into `ARM_GUARD`
const DEFAULT_NAME_BODY: &str = "{{ .Binary }}_{{ .Os }}_{{ .Arch }}{{ .Arm }}";

const ARM_GUARD: &str = r#"if [ ! -z "${ARM}" ]; then ARM="v$ARM"; fi"#;

const SHELL_VARIABLES: [(&str, &str); 6] = [
    ("Os", "${OS}"),
    ("Arch", "${ARCH}"),
    ("Arm", "${ARM}"),
    ("Version", "${VERSION}"),
    ("Tag", "${TAG}"),
    ("Binary", "${BINARY}"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTemplate {
    /// Empty, or exactly [`DEFAULT_NAME_TEMPLATE`]
    DefaultWithArm,
    Custom(String),
}

impl NameTemplate {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == DEFAULT_NAME_TEMPLATE {
            NameTemplate::DefaultWithArm
        } else {
            NameTemplate::Custom(raw.to_string())
        }
    }

    /// Shell statements assigning the archive name to `NAME`
    pub fn translate(&self) -> Result<String> {
        match self {
            NameTemplate::DefaultWithArm => {
                let name = render_name(DEFAULT_NAME_BODY)?;
                Ok(format!("{ARM_GUARD}\nNAME={name}"))
            }
            NameTemplate::Custom(template) => Ok(format!("NAME={}", render_name(template)?)),
        }
    }
}

/// Translate a raw name template into its `NAME=` shell assignment
pub fn translate_name_template(template: &str) -> Result<String> {
    NameTemplate::parse(template).translate()
}

fn render_name(template: &str) -> Result<String> {
    let mut context = Context::new();
    for (field, variable) in SHELL_VARIABLES {
        context.insert(field, variable);
    }

    Tera::one_off(&to_tera(template), &context, false).map_err(|source| {
        GhScriptError::NameTemplate {
            template: template.to_string(),
            source,
        }
    })
}

/// Rewrite Go template actions into tera syntax
fn to_tera(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut open_ifs = 0usize;
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        push_text(&mut out, &rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // unterminated action, let tera report it
            out.push_str(&rest[start..]);
            return out;
        };
        out.push_str(&lower_action(&after[..end], &mut open_ifs));
        rest = &after[end + 2..];
    }
    push_text(&mut out, rest);
    out
}

fn push_text(out: &mut String, text: &str) {
    if text.contains("{%") || text.contains("{#") {
        out.push_str("{% raw %}");
        out.push_str(text);
        out.push_str("{% endraw %}");
    } else {
        out.push_str(text);
    }
}

fn lower_action(action: &str, open_ifs: &mut usize) -> String {
    let (left, action) = match action.strip_prefix("- ") {
        Some(rest) => ("-", rest),
        None => ("", action),
    };
    let (right, action) = match action.strip_suffix(" -") {
        Some(rest) => ("-", rest),
        None => ("", action),
    };

    let words: Vec<&str> = action.split_whitespace().collect();
    match words.as_slice() {
        [field] if field_name(field).is_some() => {
            expression(left, field_name(field).unwrap_or_default(), right)
        }
        ["if", condition] if field_name(condition).is_some() => {
            *open_ifs += 1;
            let name = field_name(condition).unwrap_or_default();
            statement(left, &format!("if {name}"), right)
        }
        ["else"] if *open_ifs > 0 => statement(left, "else", right),
        ["end"] if *open_ifs > 0 => {
            *open_ifs -= 1;
            statement(left, "endif", right)
        }
        _ => expression(left, action.trim(), right),
    }
}

/// `.Field` -> `Field`
fn field_name(word: &str) -> Option<&str> {
    let name = word.strip_prefix('.')?;
    let mut chars = name.chars();
    let first = chars.next()?;
    if (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Some(name)
    } else {
        None
    }
}

fn expression(left: &str, body: &str, right: &str) -> String {
    format!("{{{{{left} {body} {right}}}}}")
}

fn statement(left: &str, body: &str, right: &str) -> String {
    format!("{{%{left} {body} {right}%}}")
}
