use std::path::Path;

use anyhow::bail;

use rasterkit::ScriptRunner;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    rasterkit::init_logging()?;

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("Usage: {} <scriptFile> <outDir>", args[0]);
    }

    tracing::debug!(
        version = rasterkit::VERSION,
        built = rasterkit::BUILD_DATE,
        "starting batch run"
    );

    let out_dir = Path::new(&args[2]);
    std::fs::create_dir_all(out_dir)?;

    let mut runner = ScriptRunner::new(out_dir);
    runner.run_file(Path::new(&args[1]))
}
