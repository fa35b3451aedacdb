fn main() {
    if let Err(err) = luach_cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
