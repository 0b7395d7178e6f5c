/// Native entry point: drive the pager over a simulated page from stdin
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io;
    use std::path::PathBuf;

    use paged_scroll::native;

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match native::load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(2);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = native::run(&config, stdin.lock(), stdout.lock()) {
        eprintln!("Driver error: {}", e);
        std::process::exit(1);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
