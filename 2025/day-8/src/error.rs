use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum JunctionError {
    #[error("unable to read {}: {source}", path.display())]
    #[diagnostic(
        code(day8::junction::io),
        help("the junction list is expected in a file named `input` in the working directory")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse line {line} \"{text}\": {reason}")]
    #[diagnostic(
        code(day8::junction::parse),
        help("each line must hold exactly three comma-separated integers, like `162,817,812`")
    )]
    Parse {
        line: usize,
        text: String,
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("this junction")]
        span: SourceSpan,
    },
}

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum CircuitError {
    #[error("only {found} circuit(s) were formed, {wanted} are needed")]
    #[diagnostic(
        code(day8::circuit::too_few),
        help("connect fewer pairs or provide more junctions")
    )]
    TooFewCircuits { wanted: usize, found: usize },
}
