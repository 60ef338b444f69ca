//! services/selection_service.rs
//! Selección interactiva de campaña en la terminal.

use std::io::{BufRead, Write};

use crate::{error::SelectionError, models::campaign_model::Campaign};

const DESCRIPTION_PREVIEW_CHARS: usize = 40;

/// Lista las campañas numeradas (desde 1) y lee la elección del operador.
pub fn choose_campaign<'a, R, W>(
    campaigns: &'a [Campaign],
    input: &mut R,
    output: &mut W,
) -> Result<&'a Campaign, SelectionError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writeln!(output, "\nReady Campaigns:\n")?;
    for (i, camp) in campaigns.iter().enumerate() {
        let preview: String = camp
            .description
            .chars()
            .take(DESCRIPTION_PREVIEW_CHARS)
            .collect();
        writeln!(
            output,
            "{}. {} - {}...  (ID: {})",
            i + 1,
            camp.display_name(),
            preview,
            camp.id
        )?;
    }
    write!(
        output,
        "\n Enter the number of the campaign to generate messages for: "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    let choice: usize = answer
        .parse()
        .map_err(|_| SelectionError::NotANumber(answer.to_string()))?;

    if choice == 0 || choice > campaigns.len() {
        return Err(SelectionError::OutOfRange {
            choice,
            len: campaigns.len(),
        });
    }
    Ok(&campaigns[choice - 1])
}
