// The custom build script, needed for embedding build information.

fn main() -> Result<(), anyhow::Error> {
    built::write_built_file()?;
    Ok(())
}
