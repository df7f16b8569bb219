use crate::domain::DefaultAssumed;
use crate::parser::{FieldError, FieldResult, FieldResultExt, parse_int};

/// Bidirectional map between a selection enum and the integer code of one file dialect.
///
/// The forward direction is an exhaustive `match` supplied by the engine module; variants
/// the dialect does not support map to `None` and are encoded with the default code.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable<E: 'static> {
    variants: &'static [E],
    encode: fn(E) -> Option<i64>,
    default: E,
    default_code: i64,
}

impl<E: Copy + PartialEq> CodeTable<E> {
    pub const fn new(
        variants: &'static [E],
        encode: fn(E) -> Option<i64>,
        default: E,
        default_code: i64,
    ) -> Self {
        Self {
            variants,
            encode,
            default,
            default_code,
        }
    }

    pub fn code(&self, value: E) -> i64 {
        (self.encode)(value).unwrap_or(self.default_code)
    }

    /// First variant (in declaration order) that encodes to `code`.
    pub fn variant(&self, code: i64) -> Option<E> {
        self.variants
            .iter()
            .copied()
            .find(|variant| (self.encode)(*variant) == Some(code))
    }

    pub const fn default_variant(&self) -> E {
        self.default
    }

    pub const fn default_code(&self) -> i64 {
        self.default_code
    }

    pub fn parse(&self, raw: Option<&str>) -> FieldResult<E> {
        let code = parse_int(raw)?;
        self.variant(code).ok_or(FieldError::UnknownCode { code })
    }

    /// Decodes `raw`, substituting the default variant and recording `field` on failure.
    pub fn decode(&self, raw: Option<&str>, field: &str, assumed: &mut DefaultAssumed) -> E {
        self.parse(raw).or_assumed(field, self.default, assumed)
    }

    pub fn supports(&self, value: E) -> bool {
        (self.encode)(value).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::CodeTable;
    use crate::domain::DefaultAssumed;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shade {
        Light,
        Dark,
        Unsupported,
    }

    const SHADES: &[Shade] = &[Shade::Light, Shade::Dark, Shade::Unsupported];

    fn shade_code(shade: Shade) -> Option<i64> {
        match shade {
            Shade::Light => Some(0),
            Shade::Dark => Some(1),
            Shade::Unsupported => None,
        }
    }

    const TABLE: CodeTable<Shade> = CodeTable::new(SHADES, shade_code, Shade::Dark, 1);

    #[test]
    fn unsupported_variants_encode_as_default_code() {
        assert_eq!(TABLE.code(Shade::Light), 0);
        assert_eq!(TABLE.code(Shade::Unsupported), 1);
        assert!(!TABLE.supports(Shade::Unsupported));
    }

    #[test]
    fn decoding_is_total_over_the_integer_range() {
        let mut assumed = DefaultAssumed::new();
        for code in -3..=3 {
            let raw = code.to_string();
            let decoded = TABLE.decode(Some(raw.as_str()), "shade", &mut assumed);
            match code {
                0 => assert_eq!(decoded, Shade::Light),
                1 => assert_eq!(decoded, Shade::Dark),
                _ => assert_eq!(decoded, Shade::Dark),
            }
        }
        assert_eq!(assumed.len(), 5);
    }

    #[test]
    fn missing_and_malformed_codes_are_assumed() {
        let mut assumed = DefaultAssumed::new();
        assert_eq!(TABLE.decode(None, "shade", &mut assumed), Shade::Dark);
        assert_eq!(TABLE.decode(Some("x"), "shade", &mut assumed), Shade::Dark);
        assert_eq!(assumed.fields(), ["shade", "shade"]);
    }
}
