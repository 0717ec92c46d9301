use std::collections::VecDeque;
use std::convert::Infallible;

use thiserror::Error;

use crate::PointerInput;
use crate::board::Coord;
use crate::selection::PointerSample;

/// Error when parsing a pointer script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid pointer token: '{0}'")]
pub struct ParseError(String);

/// A scriptable pointer source for driving the selection controller.
///
/// Queues one sample per tick. New script can be appended at any time for
/// interactive use; once the queue runs dry the pointer reports the button
/// released at its last position.
#[derive(Debug, Clone)]
pub struct ScriptedPointer {
    cursor: Coord,
    pending: VecDeque<PointerSample>,
}

impl Default for ScriptedPointer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedPointer {
    pub fn new() -> Self {
        Self {
            cursor: Coord::new(0, 0),
            pending: VecDeque::new(),
        }
    }

    /// Parse and queue additional script.
    ///
    /// Format, one token per tick, whitespace-separated:
    /// - `x,y` - the button is pressed with the pointer over that cell
    ///   (coordinates may be negative or past the edge)
    /// - `_` - the button is up, pointer unchanged
    ///
    /// Examples:
    /// - `"4,6 _ 4,4"` - click (4,6), release, click (4,4)
    /// - `"4,6 4,4"` - press (4,6), then drag to (4,4) while held
    ///
    /// A parse failure leaves the queued samples untouched.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let samples = parse_script(script, self.cursor)?;
        if let Some(last) = samples.last() {
            self.cursor = last.cell;
        }
        self.pending.extend(samples);
        Ok(())
    }

    /// Pop the next pending sample. Returns None when the script ran dry.
    pub fn tick(&mut self) -> Option<PointerSample> {
        self.pending.pop_front()
    }

    /// Execute all pending samples, calling the provided callback for each.
    pub fn drain<F>(&mut self, mut on_tick: F)
    where
        F: FnMut(PointerSample),
    {
        while let Some(sample) = self.tick() {
            on_tick(sample);
        }
    }
}

impl PointerInput for ScriptedPointer {
    type Error = Infallible;

    fn sample(&mut self) -> Result<PointerSample, Self::Error> {
        Ok(self.tick().unwrap_or(PointerSample {
            pressed: false,
            cell: self.cursor,
        }))
    }
}

/// Parse a pointer script into one sample per tick.
fn parse_script(script: &str, mut cursor: Coord) -> Result<Vec<PointerSample>, ParseError> {
    let mut samples = Vec::new();
    for token in script.split_whitespace() {
        let sample = match token {
            "_" => PointerSample {
                pressed: false,
                cell: cursor,
            },
            _ => {
                cursor = parse_cell(token)?;
                PointerSample {
                    pressed: true,
                    cell: cursor,
                }
            }
        };
        samples.push(sample);
    }
    Ok(samples)
}

fn parse_cell(token: &str) -> Result<Coord, ParseError> {
    let (x, y) = token
        .split_once(',')
        .ok_or_else(|| ParseError(token.to_string()))?;
    let x = x.parse().map_err(|_| ParseError(token.to_string()))?;
    let y = y.parse().map_err(|_| ParseError(token.to_string()))?;
    Ok(Coord::new(x, y))
}
