use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use gomoku_ai::*;

/// Draw the board with column letters and row numbers, highlighting the
/// winning line when one is given
///
/// Rows are numbered from the bottom of the printed board, so row 1 is
/// engine row 0 and the top line of output is row 19.
pub fn draw(engine: &Engine, highlight: Option<&[(usize, usize); WIN_LENGTH]>) -> Result<()> {
    let mut stdout = stdout();

    let last_move = engine.move_log().last().map(|entry| (entry.x, entry.y));

    let letters: String = (b'A'..b'A' + GRID_SIZE as u8).map(|c| c as char).collect();
    stdout.queue(PrintStyledContent(style(format!("   {}\n", letters))))?;

    for display_row in (1..=GRID_SIZE).rev() {
        let y = display_row - 1;
        stdout.queue(PrintStyledContent(style(format!("{:>2} ", display_row))))?;

        for x in 0..GRID_SIZE {
            let stone = engine.cell(x, y)?;
            let background = if highlight.map_or(false, |line| line.contains(&(x, y))) {
                Color::Green
            } else if last_move == Some((x, y)) {
                Color::DarkCyan
            } else {
                Color::DarkYellow
            };
            let (glyph, colour) = match stone {
                Some(Side::Black) => ("X", Color::Black),
                Some(Side::White) => ("O", Color::White),
                None => (".", background),
            };

            stdout.queue(PrintStyledContent(
                style(glyph)
                    .attribute(Attribute::Bold)
                    .on(background)
                    .with(colour),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// Parse a coordinate like `K10`: column letter A-S, then row number 1-19
pub fn parse_coord(input: &str) -> Result<(usize, usize)> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();

    let column = chars
        .next()
        .ok_or_else(|| anyhow!("empty coordinate"))?
        .to_ascii_uppercase();
    if !('A'..='S').contains(&column) {
        return Err(anyhow!("column '{}' is not between A and S", column));
    }
    let x = column as usize - 'A' as usize;

    let row: usize = chars
        .as_str()
        .parse()
        .map_err(|_| anyhow!("could not parse '{}' as a row number", chars.as_str()))?;
    if row < 1 || row > GRID_SIZE {
        return Err(anyhow!("row {} is not between 1 and {}", row, GRID_SIZE));
    }

    Ok((x, row - 1))
}

pub fn format_coord(x: usize, y: usize) -> String {
    format!("{}{}", (b'A' + x as u8) as char, y + 1)
}
