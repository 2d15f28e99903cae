use anyhow::Context;
use cinequery::{Backend, MovieRow, RunConfig, row};

fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    let rows = fetch_rows(&config)?;

    let stdout = std::io::stdout();
    row::write_rows(stdout.lock(), &rows)?;
    Ok(())
}

/// Config comes from a JSON file when a path argument is given, otherwise
/// from CINEQUERY_* environment variables. Secrets are never compiled in.
fn load_config() -> anyhow::Result<RunConfig> {
    match std::env::args().nth(1) {
        Some(path) => RunConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {path}")),
        None => RunConfig::from_env().context("failed to load config from environment"),
    }
}

fn fetch_rows(config: &RunConfig) -> anyhow::Result<Vec<MovieRow>> {
    match config.backend {
        #[cfg(feature = "sqlite")]
        Backend::Sqlite => {
            let mut conn = cinequery::connect_sqlite(&config.connection.database)?;
            Ok(cinequery::runner_sqlite::movies_after(
                &mut conn,
                config.min_year,
            )?)
        }
        #[cfg(feature = "postgresql")]
        Backend::Postgresql => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let rows = runtime.block_on(async {
                let client =
                    cinequery::runner_postgresql::connect_postgres(&config.connection).await?;
                cinequery::runner_postgresql::movies_after(&client, config.min_year).await
            })?;
            Ok(rows)
        }
        #[allow(unreachable_patterns)]
        other => anyhow::bail!("backend {other:?} is not compiled into this build"),
    }
}
