use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    stocksense_desktop::run().await?;
    Ok(())
}
