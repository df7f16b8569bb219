use indexmap::IndexMap;
use std::fmt::{Display, Formatter};

const PARAMETER_SECTION: &str = "variable in tri.inp:";

/// Value type of a `tri.inp` variable, inferred from its literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Text,
    Logical,
    Float,
    Integer,
}

impl ParameterKind {
    pub fn of_literal(literal: &str) -> Self {
        let literal = literal.trim();
        if literal.parse::<i64>().is_ok() {
            Self::Integer
        } else if literal.parse::<f64>().is_ok() {
            Self::Float
        } else if literal == ".true." || literal == ".false." {
            Self::Logical
        } else {
            Self::Text
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Logical => "logical",
            Self::Float => "float",
            Self::Integer => "integer",
        }
    }

    /// Integers are accepted wherever a float is expected; text accepts anything.
    fn accepts(self, actual: Self) -> bool {
        self == actual || self == Self::Text || (self == Self::Float && actual == Self::Integer)
    }
}

impl Display for ParameterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known `tri.inp` variables with the type of their documented default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterTable {
    parameters: IndexMap<String, ParameterKind>,
}

impl ParameterTable {
    /// Reads the variable list of the installation's `doc/tri.inp.txt`.
    ///
    /// The list starts two lines below `variable in tri.inp:` and ends at the first blank
    /// line. Returns `None` when the section is missing.
    pub fn parse(source: &str) -> Option<Self> {
        let mut lines = source.lines();
        lines.by_ref().find(|line| line.trim() == PARAMETER_SECTION)?;
        lines.next();

        let mut table = Self::default();
        for line in lines {
            let mut tokens = line.split_whitespace();
            let Some(variable) = tokens.next() else {
                break;
            };
            let variable: String = variable
                .chars()
                .filter(|ch| ch.is_alphanumeric() || *ch == '_')
                .collect();
            let kind = tokens
                .next()
                .map(ParameterKind::of_literal)
                .unwrap_or(ParameterKind::Text);
            table.parameters.insert(variable, kind);
        }
        Some(table)
    }

    pub fn insert(&mut self, variable: impl Into<String>, kind: ParameterKind) {
        self.parameters.insert(variable.into(), kind);
    }

    pub fn kind(&self, variable: &str) -> Option<ParameterKind> {
        self.parameters.get(variable).copied()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Checks free-form `key = value` directives; returns one `Line n: ...` message per problem.
///
/// `!` lines are comments. Variable names are only checked when a parameter table is known.
pub(super) fn check_additional(additional: &str, parameters: Option<&ParameterTable>) -> Vec<String> {
    let mut errors = Vec::new();
    for (index, line) in additional.split('\n').enumerate() {
        let line_nr = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('!') {
            continue;
        }

        let parts: Vec<&str> = line.split('=').map(str::trim).collect();
        let [name, value] = parts.as_slice() else {
            errors.push(format!("Line {line_nr}: Missing or too many \"=\""));
            continue;
        };

        let base = name.split('(').next().unwrap_or_default().trim();
        let expected = parameters.and_then(|table| table.kind(base));
        if parameters.is_some() && expected.is_none() {
            errors.push(format!("Line {line_nr}: Unknown variable \"{name}\""));
        }

        if name.matches('(').count() != name.matches(')').count() {
            errors.push(format!("Line {line_nr}: Parentheses do not match"));
        }

        if value.is_empty() {
            errors.push(format!("Line {line_nr}: variable \"{name}\" has no value"));
        } else if let Some(expected) = expected
            && !expected.accepts(ParameterKind::of_literal(value))
        {
            errors.push(format!(
                "Line {line_nr}: variable \"{name}\" has wrong type (should be {expected})"
            ));
        }
    }
    errors
}
