mod cli;
mod logging;

fn main() {
    logging::init();
    std::process::exit(cli::run_from_env());
}
