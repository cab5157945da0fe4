//! Line-based interactive prompts

use mh_core::{AnswerProvider, Answers, CoreError, CoreResult};
use std::io::{BufRead, Write};

const NAME_PROMPT: &str = "Migration name";
const SUB_DIRECTORY_PROMPT: &str = "Sub-directory (optional)";
const DDL_PROMPT: &str = "Generate DDL? (y/n)";
const DML_PROMPT: &str = "Generate DML? (y/n)";

/// Asks the interactive questions over any reader/writer pair.
pub(crate) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line.
    fn ask(&mut self, prompt: &str) -> CoreResult<String> {
        let input_error = |message: String| CoreError::Input {
            prompt: prompt.to_string(),
            message,
        };

        write!(self.output, "{prompt}: ")
            .and_then(|_| self.output.flush())
            .map_err(|e| input_error(e.to_string()))?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(input_error("unexpected end of input".to_string())),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(input_error(e.to_string())),
        }
    }

    fn confirm(&mut self, prompt: &str) -> CoreResult<bool> {
        self.ask(prompt).map(|answer| is_affirmative(&answer))
    }
}

impl<R: BufRead, W: Write> AnswerProvider for Prompter<R, W> {
    fn answers(&mut self) -> CoreResult<Answers> {
        let name = self.ask(NAME_PROMPT)?;
        let sub_directory = self.ask(SUB_DIRECTORY_PROMPT)?;
        let ddl = self.confirm(DDL_PROMPT)?;
        let dml = self.confirm(DML_PROMPT)?;
        Ok(Answers {
            name,
            sub_directory,
            ddl,
            dml,
        })
    }
}

/// `y` or `yes`, case-insensitive.
pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;
