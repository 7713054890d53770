use anyhow::{Error, Result};
use clap::Parser;
use nagios_enqueue::{
    cli::Cli,
    clients::agent::AgentClient,
    config::Config,
    utils::{init_tracing, run},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let config = Config::load()?;
    init_tracing(&config);

    let agent_client = AgentClient::new(&config)?;
    let mut stdout = std::io::stdout().lock();

    run(cli.into_input(), &agent_client, &mut stdout).await
}
