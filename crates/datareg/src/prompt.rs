use dialoguer::Input;

use crate::prelude::*;
use crate::target::TargetOutput;

/// Everything the interactive menu needs from the operator's
/// terminal.
pub(crate) trait Prompter {
    /// Shows a numbered list of `items` and returns the chosen 1-based
    /// position. If `allow_cancel` is set, `0` is accepted as well and
    /// means "cancel".
    fn choose(
        &mut self,
        prompt: &str,
        items: &[String],
        allow_cancel: bool,
    ) -> DataregResult<usize>;

    /// Reads a line of text. Unless `allow_blank` is set, the prompt is
    /// repeated until a non-blank answer is given.
    fn text(
        &mut self,
        prompt: &str,
        allow_blank: bool,
    ) -> DataregResult<String>;

    /// Returns `true` only if the operator answers "yes".
    fn confirm(&mut self, prompt: &str) -> DataregResult<bool>;

    /// Asks for a target output. A blank answer is only accepted when
    /// `editing` is set and yields `None` (keep the current value).
    fn target_output(
        &mut self,
        editing: bool,
    ) -> DataregResult<Option<TargetOutput>>;

    /// Shows a message to the operator.
    fn show(&mut self, message: &str);
}

/// Parses the answer to a numbered menu with `len` items.
pub(crate) fn parse_choice(
    input: &str,
    len: usize,
    allow_cancel: bool,
) -> Result<usize, String> {
    let Ok(choice) = input.trim().parse::<usize>() else {
        return Err(format!("'{}' is not a number", input.trim()));
    };

    let min = if allow_cancel { 0 } else { 1 };
    if choice < min || choice > len {
        return Err(format!("enter a number between {min} and {len}"));
    }

    Ok(choice)
}

#[inline]
pub(crate) fn is_confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

fn parse_target(
    input: &str,
    editing: bool,
) -> Result<Option<TargetOutput>, String> {
    if input.trim().is_empty() && editing {
        return Ok(None);
    }

    match TargetOutput::from_choice(input) {
        Some(target) => Ok(Some(target)),
        None => Err("enter P or I".into()),
    }
}

/// A [Prompter] reading from and writing to the terminal.
#[derive(Debug, Default)]
pub(crate) struct Terminal;

impl Prompter for Terminal {
    fn choose(
        &mut self,
        prompt: &str,
        items: &[String],
        allow_cancel: bool,
    ) -> DataregResult<usize> {
        for (idx, item) in items.iter().enumerate() {
            println!("  {:>2}. {item}", idx + 1);
        }

        let prompt = if allow_cancel {
            format!("{prompt} (0 to cancel)")
        } else {
            prompt.to_string()
        };

        let len = items.len();
        let answer: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|input: &String| {
                parse_choice(input, len, allow_cancel).map(|_| ())
            })
            .interact_text()?;

        parse_choice(&answer, len, allow_cancel)
            .map_err(DataregError::Other)
    }

    fn text(
        &mut self,
        prompt: &str,
        allow_blank: bool,
    ) -> DataregResult<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_blank)
            .validate_with(|input: &String| {
                if !allow_blank && input.trim().is_empty() {
                    return Err("a value is required");
                }
                Ok(())
            })
            .interact_text()?;

        Ok(answer.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> DataregResult<bool> {
        let answer: String = Input::new()
            .with_prompt(format!("{prompt} Type 'yes' to continue"))
            .allow_empty(true)
            .interact_text()?;

        Ok(is_confirmed(&answer))
    }

    fn target_output(
        &mut self,
        editing: bool,
    ) -> DataregResult<Option<TargetOutput>> {
        let mut prompt =
            String::from("Target output: [P]aper (PDF) or [I]ETM (IADS)");
        if editing {
            prompt.push_str(", blank to keep");
        }

        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(editing)
            .validate_with(|input: &String| {
                parse_target(input, editing).map(|_| ())
            })
            .interact_text()?;

        parse_target(&answer, editing).map_err(DataregError::Other)
    }

    fn show(&mut self, message: &str) {
        println!("{message}");
    }
}
