use super::{format_millis, open_bundle};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::collections::HashSet;
use std::path::PathBuf;
use wavebridge_common::BridgeConfig;
use wavebridge_editor::{Resolved, WaveModel};
use wavebridge_model::DocumentItem;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Event bundle JSON file
    pub input: PathBuf,

    /// Also print element properties and annotations
    #[arg(short, long)]
    pub detailed: bool,
}

pub fn inspect(args: InspectArgs, config: &BridgeConfig) -> Result<()> {
    let (assembler, events) = open_bundle(&args.input, config)?;
    let model = assembler.model();
    let wavelet = model.wavelet_data();

    println!("🌊 {} {}", "Wavelet".bright_blue().bold(), wavelet.key());
    println!("   Title:        {}", wavelet.title);
    println!("   Creator:      {}", wavelet.creator);
    println!("   Created:      {}", format_millis(wavelet.creation_time));
    println!("   Modified:     {}", format_millis(wavelet.last_modified_time));
    println!("   Version:      {}", wavelet.version);
    println!("   Participants: {}", wavelet.participants.join(", "));
    for (name, data) in &wavelet.data_documents {
        println!("   {} {} = {}", "datadoc".dimmed(), name, data);
    }
    println!();

    println!("📨 {} ({})", "Events".bright_blue().bold(), events.len());
    for event in &events {
        println!(
            "   {} {} by {} at {}",
            "•".green(),
            event.event_type.to_string().bright_white(),
            event.modified_by,
            format_millis(event.timestamp)
        );
        if let Some(blip_id) = event.blip_id() {
            println!("     blip: {}", blip_id);
        }
        if let Some(button) = event.button_name() {
            println!("     button: {}", button);
        }
    }
    println!();

    println!("🧵 {}", "Blips".bright_blue().bold());
    print_blip(model, model.get_root_blip(), 1, args.detailed, &mut HashSet::new());

    Ok(())
}

/// Child lists are not resolved by the codec, so `visited` stops the walk at
/// a blip that is already on the printed tree
fn print_blip<'a>(
    model: &'a WaveModel,
    blip: Resolved<'a>,
    depth: usize,
    detailed: bool,
    visited: &mut HashSet<&'a str>,
) {
    let indent = "  ".repeat(depth);

    let blip = match blip {
        Resolved::Available(blip) => blip,
        Resolved::Unavailable(id) => {
            println!("{}{} {}", indent, id.yellow(), "(not in bundle)".dimmed());
            return;
        }
        Resolved::Missing => {
            println!("{}{}", indent, "(no root blip)".dimmed());
            return;
        }
    };

    if !visited.insert(blip.blip_id.as_str()) {
        println!("{}{} {}", indent, blip.blip_id.yellow(), "(cycle)".dimmed());
        return;
    }

    println!(
        "{}{} {} v{} {}",
        indent,
        blip.blip_id.bright_white(),
        blip.creator,
        blip.version,
        format_millis(blip.last_modified_time).dimmed()
    );

    for item in blip.document.items() {
        match item {
            DocumentItem::Text(text) => println!("{}  │ {}", indent, text.trim_end()),
            DocumentItem::Element { position, element } => {
                println!("{}  ◆ @{} {}", indent, position, element.element_type().cyan());
                if detailed {
                    for (name, value) in element.properties() {
                        println!("{}      {} = {}", indent, name.dimmed(), value);
                    }
                }
            }
        }
    }

    if detailed {
        for annotation in &blip.document.annotations {
            println!(
                "{}  ✎ {} = {} [{}, {})",
                indent, annotation.name, annotation.value, annotation.range.start, annotation.range.end
            );
        }
    }

    for index in 0..blip.child_blip_ids.len() {
        print_blip(model, model.get_child(&blip.blip_id, index), depth + 1, detailed, visited);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use wavebridge_model::{BlipData, WaveletData};

    #[test]
    fn test_print_blip_stops_at_cycles() {
        let wavelet = WaveletData::new("w1", "conv+root", "b1");
        let mut root = BlipData::new("w1", "conv+root", "b1");
        root.child_blip_ids = vec!["b1".to_string(), "b2".to_string()];
        let mut reply = BlipData::new("w1", "conv+root", "b2");
        reply.child_blip_ids = vec!["b1".to_string()];

        let blips: BTreeMap<String, BlipData> = [root, reply]
            .into_iter()
            .map(|blip| (blip.blip_id.clone(), blip))
            .collect();
        let model = WaveModel::from_snapshot(wavelet, blips, "TBD_", "conv+root");

        let mut visited = HashSet::new();
        print_blip(&model, model.get_root_blip(), 1, false, &mut visited);

        assert_eq!(visited.len(), 2);
        assert!(visited.contains("b1") && visited.contains("b2"));
    }
}
