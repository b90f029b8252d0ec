use pkgtree::{
    cli::{Args, Command},
    PkgTreeError,
};
use std::process;

fn main() {
    let args = Args::parse_args();
    let command = Command::from_args(args);
    process::exit(run_command(command));
}

/// Run the command and map its outcome to an exit code
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(()) => 0,
        Err(err) => {
            report(&err);
            err.severity().exit_code()
        }
    }
}

fn report(err: &PkgTreeError) {
    eprintln!("Error: {}", err.user_message());

    if let PkgTreeError::Usage { .. } = err {
        eprintln!("\nRun 'pkgtree --help' for usage.");
    }
    if err.is_critical() {
        eprintln!("Exiting with code {} due to {}", err.severity().exit_code(), err.severity());
    }
}
