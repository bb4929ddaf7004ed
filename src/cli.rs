use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use common::ModelKind;

pub mod commands;

use commands::{check, list_models, predict};

use crate::terminal::read_series_file;

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(about = "Forecast stock prices from the last 60 closing prices")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the 60 past prices come from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SeriesArgs {
    /// Comma-separated prices, e.g. "101.5,102.25,..."
    #[arg(short, long)]
    pub data: Option<String>,

    /// File holding the prices, comma-separated or one per line
    #[arg(short = 'f', long)]
    pub data_file: Option<PathBuf>,
}

impl SeriesArgs {
    /// Raw comma-separated text, exactly as the form field would hold it
    pub fn raw(&self) -> Result<String> {
        match (&self.data, &self.data_file) {
            (Some(data), _) => Ok(data.clone()),
            (None, Some(path)) => read_series_file(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            (None, None) => anyhow::bail!("either --data or --data-file is required"),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Request a forecast and write it as an HTML chart
    ///
    /// Examples:
    ///   stockcast predict --data-file prices.csv --model gru
    ///   stockcast predict -d "1,2,3,...,60" -o forecast.html
    Predict {
        #[command(flatten)]
        series: SeriesArgs,

        /// Model to run: lstm, rnn or gru
        #[arg(short, long)]
        model: Option<ModelKind>,

        /// Prediction endpoint URL
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Output path for the chart HTML
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./stockcast.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a price series without contacting the service
    Check {
        #[command(flatten)]
        series: SeriesArgs,
    },
    /// List the models the service offers
    Models,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Predict {
                series,
                model,
                endpoint,
                output,
                config,
            } => {
                predict(&series, model, endpoint, output, config.as_deref()).await?;
            }
            Commands::Check { series } => {
                check(&series)?;
            }
            Commands::Models => {
                list_models();
            }
        }
        Ok(())
    }
}
