use crate::parser::tokenize_lines;

/// Argument type of a TRIDYN directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArgKind {
    Int,
    Float,
    Text,
}

impl ArgKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "str",
        }
    }

    fn of_token(token: &str) -> Self {
        if token.parse::<i64>().is_ok() {
            Self::Int
        } else if token.parse::<f64>().is_ok() {
            Self::Float
        } else {
            Self::Text
        }
    }

    fn accepts(self, token: &str) -> bool {
        match self {
            Self::Int => token.parse::<i64>().is_ok(),
            Self::Float => token.parse::<f64>().is_ok(),
            Self::Text => true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Arity {
    /// No arguments allowed.
    Flag,
    /// Type of the first argument; further arguments are free.
    Leading(ArgKind),
    Exact(&'static [ArgKind]),
}

use ArgKind::{Float, Int, Text};

const DIRECTIVES: &[(&str, Arity)] = &[
    ("cdat", Arity::Exact(&[Int, Float, Int])),
    ("geom", Arity::Exact(&[Float, Int, Float])),
    ("atda", Arity::Leading(Text)),
    ("comp", Arity::Leading(Text)),
    ("irra", Arity::Exact(&[Int, Float, Float, Float])),
    ("thrd", Arity::Leading(Int)),
    ("pspr", Arity::Leading(Int)),
    ("irrd", Arity::Exact(&[Int, Float, Float])),
    ("angd", Arity::Exact(&[Int, Int, Float, Float, Float])),
    ("coll", Arity::Exact(&[Int, Float])),
    ("rcsp", Arity::Leading(Int)),
    ("damg", Arity::Leading(Float)),
    ("cmpd", Arity::Leading(Text)),
    ("mass", Arity::Exact(&[Int, Float])),
    ("edsp", Arity::Exact(&[Int, Float])),
    ("edsc", Arity::Leading(Text)),
    ("elst", Arity::Leading(Int)),
    ("elsc", Arity::Exact(&[Int, Float])),
    ("efin", Arity::Exact(&[Int, Float])),
    ("elbk", Arity::Exact(&[Int, Float])),
    ("dens", Arity::Exact(&[Int, Float])),
    ("sbem", Arity::Leading(Text)),
    ("sbei", Arity::Exact(&[Int, Int, Float])),
    ("sbes", Arity::Leading(Float)),
    ("sbec", Arity::Leading(Float)),
    ("relx", Arity::Leading(Float)),
    ("exst", Arity::Exact(&[Int, Float, Int, Int])),
    ("qmxv", Arity::Leading(Text)),
    ("prec", Arity::Leading(Float)),
    ("fout", Arity::Exact(&[Int, Int, Int])),
    ("outp", Arity::Flag),
    ("lout", Arity::Leading(Text)),
    ("outi", Arity::Leading(Text)),
    ("dsrf", Arity::Leading(Float)),
    ("mixg", Arity::Flag),
    ("edep", Arity::Flag),
    ("outl", Arity::Leading(Text)),
    ("sclm", Arity::Leading(Text)),
    ("rand", Arity::Leading(Int)),
];

fn arity(directive: &str) -> Option<Arity> {
    DIRECTIVES
        .iter()
        .find(|(name, _)| *name == directive)
        .map(|(_, arity)| *arity)
}

/// Checks free-form TRIDYN directives; returns one `Line n: ...` message per problem.
///
/// `#` lines are comments and the numeric matrix rows following `sbem` are skipped.
pub(super) fn check_additional(additional: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let mut in_matrix = false;
    for line in tokenize_lines(additional) {
        let line_nr = line.source_line;
        if line.raw.starts_with('#') {
            continue;
        }
        if line.raw.contains('=') {
            errors.push(format!("Line {line_nr}: No \"=\" allowed"));
            continue;
        }

        let directive = line.keyword();
        if in_matrix {
            if directive.parse::<f64>().is_ok() {
                continue;
            }
            in_matrix = false;
        }
        if directive == "sbem" {
            in_matrix = true;
            continue;
        }

        let Some(arity) = arity(directive) else {
            errors.push(format!("Line {line_nr}: Unknown variable \"{directive}\""));
            continue;
        };
        let arguments = line.arguments();
        match arity {
            Arity::Flag => {
                if !arguments.is_empty() {
                    errors.push(format!(
                        "Line {line_nr}: \"{directive}\" does not take arguments"
                    ));
                }
            }
            Arity::Exact(kinds) => {
                let valid = kinds.len() == arguments.len()
                    && kinds
                        .iter()
                        .zip(arguments)
                        .all(|(kind, argument)| kind.accepts(argument));
                if !valid {
                    let expected: Vec<&str> = kinds.iter().map(|kind| kind.as_str()).collect();
                    errors.push(format!(
                        "Line {line_nr}: variable \"{directive}\" has wrong arguments (should be \"{directive} {}\")",
                        expected.join(" ")
                    ));
                }
            }
            Arity::Leading(kind) => {
                let valid = match arguments.first() {
                    Some(argument) => kind.accepts(argument),
                    None => kind == Text,
                };
                if !valid {
                    let found = arguments
                        .first()
                        .map_or(Text, |argument| ArgKind::of_token(argument));
                    errors.push(format!(
                        "Line {line_nr}: variable \"{directive}\" has wrong type (should be {}, found {})",
                        kind.as_str(),
                        found.as_str()
                    ));
                }
            }
        }
    }
    errors
}
