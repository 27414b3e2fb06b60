use tienda::{setup_environment, tui};

fn main() -> anyhow::Result<()> {
    // 1. dotenv, configuration, logger
    let config = setup_environment()?;

    tracing::info!(data_file = %config.data_file.display(), "Tienda starting");

    // 2. Run the editor
    if let Err(e) = tui::run(&config) {
        tracing::error!("Editor error: {}", e);
        return Err(e);
    }

    Ok(())
}
