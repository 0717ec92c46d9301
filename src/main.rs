use click_chess::{mock, seed};

fn main() {
    let seed = match std::env::args().nth(1) {
        Some(path) => match seed::load(&path) {
            Ok(seed) => seed,
            Err(e) => {
                eprintln!("Failed to load seed image '{path}': {e}");
                return;
            }
        },
        None => seed::STARTING_POSITION,
    };

    mock::run_interactive_terminal(seed);
}
