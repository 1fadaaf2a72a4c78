//! Extract command implementation.

use attestdoc_artifact::extract_payload;

pub fn run(artifact: String) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(&artifact)?;
    let payload = extract_payload(&bytes)?;
    println!("{}", payload);
    Ok(())
}
