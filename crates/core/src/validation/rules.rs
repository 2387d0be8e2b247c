//! Validation rule and result types.

/// The check a [`FieldRule`] performs.
///
/// Type rules (`String`, `Number`, `Integer`, `OneOf`) ignore absent values;
/// only `Required` enforces presence. Bound rules (`LengthBetween`,
/// `AtLeast`, `Between`) ignore values of the wrong type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    Required,
    String,
    Number,
    Integer,
    /// Inclusive bounds on the UTF-16 length of a string.
    LengthBetween { min: usize, max: usize },
    AtLeast { min: f64 },
    /// Inclusive numeric bounds.
    Between { min: f64, max: f64 },
    OneOf { values: &'static [&'static str] },
}

/// One declarative rule of a schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: RuleKind,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(field: &'static str, kind: RuleKind, message: &'static str) -> Self {
        Self {
            field,
            kind,
            message,
        }
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: RuleKind,
    pub message: &'static str,
}

/// Ordered violations produced by evaluating a schema against one record.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub violations: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violation messages joined into one human-readable line.
    pub fn joined(&self, separator: &str) -> String {
        self.violations
            .iter()
            .map(|v| v.message)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
