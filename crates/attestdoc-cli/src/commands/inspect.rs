//! Inspect command implementation.

use attestdoc_artifact::extract;

use crate::output;

pub fn run(artifact: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(&artifact)?;
    let record = extract(&bytes)?;

    if json {
        println!("{}", output::record_json(&record));
    } else {
        output::print_record(&record);
    }

    Ok(())
}
