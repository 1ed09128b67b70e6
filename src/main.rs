fn main() {
    if let Err(e) = polar_orbit_lib::run() {
        eprintln!("[Host] {e}");
        std::process::exit(1);
    }
}
