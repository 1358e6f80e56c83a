mod app;

fn main() {
    env_logger::init();

    if let Err(err) = app::run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
