use super::{emit, open_bundle};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use wavebridge_common::BridgeConfig;

#[derive(Args, Debug)]
pub struct RespondArgs {
    /// Event bundle JSON file
    pub input: PathBuf,

    /// Set the wavelet title
    #[arg(long)]
    pub title: Option<String>,

    /// Add a participant (repeatable)
    #[arg(long = "add-participant")]
    pub add_participants: Vec<String>,

    /// Remove a participant (repeatable)
    #[arg(long = "remove-participant")]
    pub remove_participants: Vec<String>,

    /// Append a reply blip with this text (repeatable)
    #[arg(long = "append-blip")]
    pub append_blips: Vec<String>,

    /// Set a data document, as NAME=VALUE (repeatable)
    #[arg(long = "datadoc", value_parser = parse_datadoc)]
    pub datadocs: Vec<(String, String)>,

    /// Write the operation bundle here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the operation bundle
    #[arg(short, long)]
    pub pretty: bool,
}

pub fn respond(args: RespondArgs, config: &BridgeConfig) -> Result<()> {
    let (mut assembler, events) = open_bundle(&args.input, config)?;

    {
        let model = assembler.model_mut();

        if let Some(title) = &args.title {
            model.wavelet().set_title(title);
        }
        for participant in &args.add_participants {
            model.wavelet().add_participant(participant);
        }
        for participant in &args.remove_participants {
            model.wavelet().remove_participant(participant);
        }
        for text in &args.append_blips {
            let blip_id = model.wavelet().append_blip();
            model.blip(&blip_id)?.document().append(text);
        }
        for (name, value) in &args.datadocs {
            model.wavelet().set_data_document(name, value);
        }
    }

    let count = assembler.model().pending_operations().len();
    emit(assembler.close_to_bytes()?, args.output.as_deref(), args.pretty)?;
    eprintln!(
        "{} {} events, recorded {} operations",
        "Responded".green().bold(),
        events.len(),
        count
    );
    Ok(())
}

fn parse_datadoc(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected NAME=VALUE, got {:?}", raw))?;
    if name.is_empty() {
        return Err(anyhow!("Data document name is empty in {:?}", raw));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datadoc() {
        assert_eq!(
            parse_datadoc("state=a=b").unwrap(),
            ("state".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_datadoc("empty=").unwrap(), ("empty".to_string(), String::new()));
        assert!(parse_datadoc("novalue").is_err());
        assert!(parse_datadoc("=x").is_err());
    }
}
