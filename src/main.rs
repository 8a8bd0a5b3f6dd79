use std::io;

use chess_rules::console::run_console_loop;

fn main() -> io::Result<()> {
    env_logger::init();
    let stdin = io::stdin();
    run_console_loop(stdin.lock(), io::stdout())
}
