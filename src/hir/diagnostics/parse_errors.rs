//! Forwarding of parser errors.

use crate::base::Range;
use crate::syntax::Document;

use super::{Diagnostic, DiagnosticCollector, codes};

/// One error per syntax error, one character wide at the reported start.
pub fn parse_errors(document: &Document) -> Vec<Diagnostic> {
    let mut collector = DiagnosticCollector::new(document.uri());
    for error in document.syntax_errors() {
        let start = document.line_index().position(error.range.start());
        collector.add(
            Diagnostic::error(Range::single_line(start, 1), error.message.clone())
                .with_code(codes::PARSE_ERROR),
        );
    }
    collector.into_diagnostics()
}
