//! Interactive prompt loop
//!
//! Reads origin, destination and a travel mode per iteration until the exit
//! sentinel or end of input. Recoverable errors are reported and the loop
//! carries on; configuration errors end the session.

use std::io::{BufRead, Write};

use application::{ApplicationError, RoutePlanner, RouteRequest};
use domain::TravelMode;
use tracing::{info, warn};

use crate::table;

/// Inputs that end the session at a place prompt (case-insensitive)
const EXIT_SENTINELS: [&str; 2] = ["s", "q"];

/// Whether a place prompt answer asks to leave
fn is_exit(answer: &str) -> bool {
    EXIT_SENTINELS
        .iter()
        .any(|sentinel| answer.trim().eq_ignore_ascii_case(sentinel))
}

/// Mode menu shown before the mode prompt
fn mode_menu() -> String {
    let options = TravelMode::ALL.iter().map(|mode| {
        let note = if *mode == TravelMode::Bus {
            " - may not be available in every region"
        } else {
            ""
        };
        format!(
            "  {}. {} ({}){note}",
            mode.menu_number(),
            mode.label(),
            mode.as_str()
        )
    });

    std::iter::once("Select the travel mode:".to_string())
        .chain(options)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print `prompt` and read one line; `None` at end of input
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for a place; `None` when the user leaves or input ends
fn ask_place<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    Ok(ask(input, output, prompt)?.filter(|answer| !is_exit(answer)))
}

/// Run the prompt loop until the user exits
///
/// # Errors
///
/// Returns an error on I/O failure or when a configuration error surfaces;
/// every other planning error is printed and the loop continues.
pub async fn run<R: BufRead, W: Write>(
    planner: &RoutePlanner,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    writeln!(output, "--- Trip distance and duration calculator ---")?;
    writeln!(
        output,
        "Enter places as 'City, Country' or 'City, Province, Country', \
         e.g. 'Santiago, Chile' or 'Mendoza, Argentina'."
    )?;

    loop {
        let Some(origin) = ask_place(input, output, "\nOrigin ('s' to quit): ")? else {
            break;
        };
        let Some(destination) = ask_place(input, output, "Destination ('s' to quit): ")? else {
            break;
        };

        writeln!(output, "\n{}", mode_menu())?;
        let Some(choice) = ask(input, output, "Mode number: ")? else {
            break;
        };

        let selection = TravelMode::from_selector(&choice);
        if let Some(message) = selection.warning() {
            warn!(input = %choice, "Unrecognized travel mode, falling back to car");
            writeln!(output, "{message}")?;
        }

        let request = match RouteRequest::new(&origin, &destination, selection.mode) {
            Ok(request) => request,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            },
        };

        writeln!(
            output,
            "\nCalculating route from {} to {} by {}...",
            request.origin, request.destination, request.mode
        )?;

        match planner.plan(&request).await {
            Ok(plan) => writeln!(output, "\n{}", table::render_plan(&plan))?,
            Err(e @ ApplicationError::Configuration(_)) => return Err(e.into()),
            Err(e) => {
                writeln!(output, "Could not compute the route: {e}")?;
                writeln!(output, "Try other places or check your API key.")?;
            },
        }
    }

    info!("Interactive session ended");
    writeln!(output, "Goodbye.")?;
    Ok(())
}
