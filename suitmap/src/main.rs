use clap::Parser;
use suitmap::app::SuitabilityApp;

fn main() {
    env_logger::init();
    let args = SuitabilityApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
