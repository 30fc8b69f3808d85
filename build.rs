use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build timestamp and rustc version feed the footer in app.rs. Git
    // instructions are left out; the crate must build outside a checkout.
    EmitBuilder::builder()
        .build_timestamp()
        .rustc_semver()
        .emit()?;
    Ok(())
}
