//! Interactive read-dispatch loop.

use crate::input::{parse_line, InputLine, HELP};
use crate::terminal::TerminalSurface;
use log::info;
use simpletodo_core::{EventOutcome, EventWiring, KeyValueStore};
use std::io::{BufRead, Write};

/// Reads lines from `input` until `:quit` or end of input.
pub fn run<S, W, R>(wiring: &mut EventWiring<S, TerminalSurface<W>>, input: R) -> std::io::Result<()>
where
    S: KeyValueStore,
    W: Write,
    R: BufRead,
{
    let mut handled = 0_usize;
    wiring.service_mut().surface_mut().prompt();

    for line in input.lines() {
        let parsed = parse_line(&line?);
        match &parsed {
            InputLine::Quit => break,
            InputLine::Help => wiring.service_mut().surface_mut().notice(HELP),
            InputLine::Invalid(message) => {
                let message = format!("{message} (:help lists commands)");
                wiring.service_mut().surface_mut().notice(&message);
            }
            _ => {
                let event = parsed.to_event(wiring.service().surface().last_view());
                if let Some(event) = event {
                    if wiring.dispatch(event) != EventOutcome::Ignored {
                        handled += 1;
                    }
                }
            }
        }
        wiring.service_mut().surface_mut().prompt();
    }

    info!("event=session_end module=cli status=ok handled={handled}");
    Ok(())
}
