use cors_fix::utils::logger;

fn main() {
    logger::init_cli_logger();

    tracing::debug!("Writing CORS instructions to stdout");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = cors_fix::write_instructions(&mut out) {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::debug!("Done");
}
