//! Terminal storefront: fetch the catalog once, then apply commands from stdin.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use storefront_shell::command::HELP;
use storefront_shell::{Applied, CatalogClient, Command, Session, ShellConfig, render};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ShellConfig::from_env().context("failed to load storefront configuration")?;
    tracing::info!(catalog_url = %config.catalog_url, "starting storefront");

    let client = CatalogClient::new(&config).context("failed to build catalog HTTP client")?;

    let mut session = Session::new();
    let mut stdout = tokio::io::stdout();
    print(&mut stdout, &render::catalog_status(session.catalog())).await?;

    session.resolve_catalog(client.fetch_catalog().await);
    print(&mut stdout, &render::catalog_status(session.catalog())).await?;
    if session.catalog().is_loaded() {
        print(&mut stdout, &render::view(&session)).await?;
    }
    print(&mut stdout, "Type 'help' for commands.").await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let output = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => HELP.to_string(),
            Ok(Command::ShowView) => render::view(&session),
            Ok(Command::ShowCart) => render::cart(&session),
            Ok(Command::ShowCategories) => render::categories(&session),
            Ok(Command::Apply(event)) => match session.dispatch(event) {
                Applied::View => format!("{}\n{}", render::view(&session), render::status_line(&session)),
                Applied::Cart => render::cart(&session),
                Applied::Ignored => format!("Nothing changed. {}", render::status_line(&session)),
            },
            Err(storefront_shell::CommandError::Empty) => continue,
            Err(err) => format!("error: {err}"),
        };
        print(&mut stdout, &output).await?;
    }

    tracing::info!(cart_items = session.total_item_count(), "storefront session ended");
    Ok(())
}

async fn print(stdout: &mut tokio::io::Stdout, text: &str) -> anyhow::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
