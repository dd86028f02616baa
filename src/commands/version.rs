use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("sensorwatch version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
