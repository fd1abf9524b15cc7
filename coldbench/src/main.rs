fn main() {
    if let Err(e) = coldbench::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
