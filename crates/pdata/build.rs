use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);

    // Render the view types for every record schema
    let files = pdatagen::generate(&pdatagen::schemas::telemetry())?;
    pdatagen::output::write_files(&out_dir, &files)?;

    // Regenerate when the schemas or the generator change
    println!("cargo:rerun-if-changed=../pdatagen/src");

    Ok(())
}
