// Export the OpenAPI document as JSON
//
// Usage: cargo run --bin export-openapi > docs/openapi.json
//
// Generates the document without connecting to a database or binding a port.

use eventboard_server::openapi::ApiDoc;

fn main() -> anyhow::Result<()> {
    println!("{}", ApiDoc::to_json()?);
    Ok(())
}
