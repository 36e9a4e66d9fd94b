use std::process;

fn main() {
    if let Err(e) = rsa_cli::ui::menu::run() {
        eprintln!("Error running application: {:#}", e);
        process::exit(1);
    }
}
