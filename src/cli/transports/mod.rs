//! Transports command - lists registered transport strategies

use crate::infrastructure::transport::TransportStrategyFactory;

pub async fn run() -> anyhow::Result<()> {
    super::bootstrap()?;

    for name in TransportStrategyFactory::new().available() {
        println!("{}", name);
    }

    Ok(())
}
