#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    // Set up logging for development
    env_logger::init();

    // Runtime context stays entered for the save dialogs spawned while printing
    feeder_config::run_app()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
