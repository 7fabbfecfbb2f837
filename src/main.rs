use anyhow::Result;

fn main() -> Result<()> {
    pincode_lookup::cli::run()
}
