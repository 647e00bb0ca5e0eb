//! Print the demo backend's OpenAPI document, or write it to the path given
//! as the first argument.

use server::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> std::io::Result<()> {
    let spec = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(std::io::Error::other)?;

    match std::env::args().nth(1) {
        Some(path) => std::fs::write(path, spec),
        None => {
            println!("{spec}");
            Ok(())
        }
    }
}
