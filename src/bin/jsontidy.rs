fn main() {
    if let Err(e) = jsontidy::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
