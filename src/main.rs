// Binary entry point, native only.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    use terrain_tiers::cli::CliArgs;
    use terrain_tiers::WorldGenConfig;

    env_logger::init();
    let args = CliArgs::from_env_args()?;
    let mut config = WorldGenConfig::load(&args.config_path);
    args.apply(&mut config);

    let world = terrain_tiers::run(&config)
        .with_context(|| format!("{} mode failed", config.mode))?;

    log::info!(
        "world is {}x{} tiles",
        world.heights.width(),
        world.heights.height()
    );
    for (biome, count) in world.tier_counts() {
        log::info!("{biome:?}: {count} tiles");
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is usable on wasm32; the command-line entry point is not.
}
