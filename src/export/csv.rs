use ::csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::models::Prompt;
use crate::utils::format_local_date;

/// Column titles, in output order
pub const CSV_HEADERS: [&str; 6] =
    ["UUID", "Session ID", "Timestamp", "Date", "Working Directory", "Prompt Content"];

/// Replaces commas inside prompt text
pub const FULLWIDTH_COMMA: &str = "，";

/// Render prompts as CSV with one header row
///
/// Cells are quoted only when they contain a delimiter, quote or line break; the
/// prompt content never does after [`flatten_prompt_text`] unless it holds quotes or
/// carriage returns.
pub fn render_csv(prompts: &[Prompt]) -> Result<Vec<u8>, ::csv::Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;

    for prompt in prompts {
        let date = format_local_date(&prompt.timestamp);
        let content = flatten_prompt_text(&prompt.text);
        writer.write_record([
            prompt.id.as_str(),
            prompt.session_id.as_str(),
            prompt.timestamp.as_str(),
            date.as_str(),
            prompt.working_directory.as_str(),
            content.as_str(),
        ])?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Prompt text as stored in the CSV: newlines become spaces and commas become
/// full-width commas. Lossy on purpose; the text stays readable in one cell.
pub fn flatten_prompt_text(text: &str) -> String {
    text.replace('\n', " ").replace(',', FULLWIDTH_COMMA)
}
