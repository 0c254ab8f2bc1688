use std::io::{BufRead, Write};
use std::path::PathBuf;

use tagcloud_core::WordLimit;
use tagcloud_engine::TagCloudRequest;

use super::error::AppError;

const INPUT_PROMPT: &str = "Enter input file path: ";
const OUTPUT_PROMPT: &str = "Enter output file path: ";
const COUNT_PROMPT: &str = "Enter number of words to include in the tag cloud: ";

/// Asks for the input path, output path and word count, in that order.
///
/// The word count is validated here, so a bad count never touches any file.
pub fn read_request<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
) -> Result<TagCloudRequest, AppError> {
    let input_path = ask(input, prompts, INPUT_PROMPT, "input file path")?;
    let output_path = ask(input, prompts, OUTPUT_PROMPT, "output file path")?;
    let count = ask(input, prompts, COUNT_PROMPT, "number of words")?;

    let count = count.trim();
    let count: i64 = count
        .parse()
        .map_err(|_| AppError::InvalidNumber(count.to_string()))?;
    let limit = WordLimit::try_from(count)?;

    Ok(TagCloudRequest {
        input_path: PathBuf::from(input_path),
        output_path: PathBuf::from(output_path),
        limit,
    })
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    prompts: &mut W,
    prompt: &str,
    what: &'static str,
) -> Result<String, AppError> {
    write!(prompts, "{prompt}")?;
    prompts.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::MissingInput(what));
    }
    let answer = line.strip_suffix('\n').unwrap_or(&line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(answer.to_string())
}
