use std::path::Path;

use crate::cli::args::InitArgs;
use crate::exit_codes;
use crate::templates;

pub async fn run(args: InitArgs) -> anyhow::Result<i32> {
    write_file(&args.config, templates::CONFIG_JSON, args.force)?;
    write_file(&args.test_suite, templates::TEST_SUITE_JSON, args.force)?;

    println!("✅  Initialization complete. Run 'ngbench run' to benchmark.");
    Ok(exit_codes::SUCCESS)
}

fn write_file(path: &Path, content: &str, force: bool) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if path.exists() && !force {
        println!("   Skipped {} (exists)", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("   Created {}", path.display());
    }
    Ok(())
}
