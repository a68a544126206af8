use crate::error::Diagnostic;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A source string that produced diagnostics and therefore no trustworthy
/// tree.
pub struct ParseError {
    /// The diagnostics reported while scanning and parsing, in order.
    pub diagnostics: Vec<Diagnostic>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for diagnostic in &self.diagnostics {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
