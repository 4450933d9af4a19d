//! Compilation of encoding configurations into HandBrakeCLI invocations.
//!
//! The pipeline is: convert raw JSON option values into the closed
//! [`OptionValue`] type, dispatch each configuration section through the
//! [`Section`] enum, and render tokens with the formatting rules in
//! [`format`]. The result is a [`CompiledCommand`], an ordered token list
//! that can be displayed, quoted for a shell, or handed to the process
//! supervisor.

use std::fmt;

/// Section dispatch and the command compiler.
pub mod compile;

/// Option-to-flag formatting rules.
pub mod format;

/// The closed option value type.
pub mod value;

pub use compile::{CommandCompiler, Section};
pub use value::OptionValue;

/// A fully compiled HandBrakeCLI invocation.
///
/// The first token is the binary path, followed by its arguments in the
/// order the compiler emitted them. The only mutation the supervisor ever
/// applies is the idempotent [`ensure_json_progress`](Self::ensure_json_progress)
/// append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledCommand {
    tokens: Vec<String>,
}

impl CompiledCommand {
    /// Invariant: `tokens` starts with the binary path.
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Builds a command from a program path and its arguments.
    ///
    /// For commands that did not come from [`CommandCompiler`], e.g. when
    /// driving [`run_encode`](crate::external::run_encode) directly.
    pub fn from_parts(program: impl Into<String>, args: impl IntoIterator<Item = String>) -> Self {
        let mut tokens = vec![program.into()];
        tokens.extend(args);
        Self { tokens }
    }

    /// The full token sequence, binary included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The binary path token.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// The argument tokens following the binary path.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// Appends `--json` unless it is already present.
    ///
    /// HandBrakeCLI only emits the machine-readable progress stream the
    /// supervisor parses when `--json` is set.
    pub fn ensure_json_progress(&mut self) {
        if !self.args().iter().any(|token| token == "--json") {
            self.tokens.push("--json".to_string());
        }
    }

    /// Renders the command as a single shell-quoted string.
    ///
    /// Each token is quoted individually, so splitting the string with
    /// shell rules recovers the original token list exactly.
    pub fn to_shell_string(&self) -> String {
        shell_words::join(&self.tokens)
    }

    /// Consumes the command, yielding its tokens.
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for CompiledCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_shell_string())
    }
}
