use crate::error::invalid_input;
use anyhow::Result;
use okved_config::{AppConfig, SourceConfig};
use okved_core::LookupDto;
use okved_source::{pipeline, FileSource, HttpSource, TreeSource};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub struct LookupOptions {
    pub tree_file: Option<PathBuf>,
    pub url: Option<String>,
    pub json: bool,
}

pub fn lookup(config: &AppConfig, phone: &str, options: LookupOptions) -> Result<()> {
    let source = build_source(&config.source, options.tree_file, options.url)?;
    debug!(source = source.source_name(), "okved source selected");

    let found = pipeline::run(phone, source.as_ref())?;
    if options.json {
        print_json(&found)
    } else {
        print_lines(&found)
    }
}

fn build_source(
    config: &SourceConfig,
    tree_file: Option<PathBuf>,
    url: Option<String>,
) -> Result<Box<dyn TreeSource>> {
    if let Some(path) = tree_file {
        if path.as_os_str().is_empty() {
            return Err(invalid_input("--tree-file must not be empty"));
        }
        return Ok(Box::new(FileSource::new(path)));
    }

    let url = match url {
        Some(url) => {
            let url = url.trim();
            if url.is_empty() {
                return Err(invalid_input("--url must not be empty"));
            }
            url.to_string()
        }
        None => {
            if let Some(path) = &config.file {
                return Ok(Box::new(FileSource::new(path.clone())));
            }
            config.url.clone()
        }
    };

    Ok(Box::new(HttpSource::new(
        url,
        config.user_agent.clone(),
        Duration::from_secs(config.timeout_secs),
        Duration::from_secs(config.connect_timeout_secs),
    )))
}

fn print_lines(found: &LookupDto) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", found.phone)?;
    writeln!(stdout, "{}", found.code)?;
    writeln!(stdout, "{}", found.name)?;
    writeln!(stdout, "{}", found.match_len)?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
