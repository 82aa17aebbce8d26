use dioxus::logger::tracing::{info, Level};

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    info!("starting ScanForChange dashboard");
    dioxus::launch(scanforchange::App);
}
