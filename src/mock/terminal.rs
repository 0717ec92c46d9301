use std::io::{self, Write};

use super::TerminalDisplay;
use crate::BoardDisplay;
use crate::board::{BOARD_SIZE, Board, Coord};
use crate::seed;
use crate::selection::{PointerSample, SelectionController};

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal interface for the chess board.
///
/// Each click is simulated as a press tick followed by a release tick, so
/// the controller sees the same edge-triggered samples the windowing
/// collaborator would deliver.
pub fn run_interactive_terminal(seed: [u8; BOARD_SIZE]) {
    let mut seed = seed;
    let mut board = Board::from_seed(&seed);
    let mut controller = SelectionController::new();
    let mut display = TerminalDisplay::new();

    clear_screen();
    draw_interface(&board, &controller, &mut display);

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        if let Err(e) = io::stdin().read_line(&mut input) {
            eprintln!("Failed to read input: {}", e);
            break;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "c" => {
                let cell = match (parts.get(1), parts.get(2)) {
                    (Some(x), Some(y)) => match (x.parse(), y.parse()) {
                        (Ok(x), Ok(y)) => Some(Coord::new(x, y)),
                        _ => None,
                    },
                    _ => None,
                };
                match cell {
                    Some(cell) => {
                        click(&mut board, &mut controller, cell);
                        clear_screen();
                        draw_interface(&board, &controller, &mut display);
                    }
                    None => println!("Usage: c <x> <y>"),
                }
            }
            "load" => {
                if parts.len() < 2 {
                    println!("Usage: load <ppm-path>");
                } else {
                    match seed::load(parts[1]) {
                        Ok(loaded) => {
                            seed = loaded;
                            board = Board::from_seed(&seed);
                            controller = SelectionController::new();
                            clear_screen();
                            draw_interface(&board, &controller, &mut display);
                            println!("\n✅ Position loaded from image");
                        }
                        Err(e) => println!("❌ {e}"),
                    }
                }
            }
            "r" => {
                board = Board::from_seed(&seed);
                controller = SelectionController::new();
                clear_screen();
                draw_interface(&board, &controller, &mut display);
                println!("\n🔄 Reset to seed position");
            }
            "p" => {
                clear_screen();
                draw_interface(&board, &controller, &mut display);
            }
            "q" => break,
            _ => println!("Unknown command"),
        }
    }
}

/// Feed one click (a press tick, then a release tick) into the controller.
fn click(board: &mut Board, controller: &mut SelectionController, cell: Coord) {
    controller.tick(
        board,
        PointerSample {
            pressed: true,
            cell,
        },
    );
    controller.tick(
        board,
        PointerSample {
            pressed: false,
            cell,
        },
    );
}

/// Draws the complete interface: help text, board, and selection status.
fn draw_interface(
    board: &Board,
    controller: &SelectionController,
    display: &mut TerminalDisplay,
) {
    println!("♟️  Chess Board Click Simulator");
    println!();
    println!("Commands: c <x> <y> (click) | load <ppm> | r (reset) | p (refresh) | q (quit)");
    println!();

    if let Err(e) = display.show(&board.export()) {
        eprintln!("Failed to draw board: {e}");
    }

    match controller.selection() {
        Some(source) => println!("Selected: ({}, {})", source.x, source.y),
        None => println!("Selected: none"),
    }
}
