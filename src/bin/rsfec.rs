//! rsfec binary - file-level Reed-Solomon protection
//!
//! Wraps the block codec in a small container format so a protected file
//! is self-describing: decode needs no parameters beyond the file itself.

use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use log::{debug, info};
use rsfec::{BlockCodec, CodecConfig};
use std::fs;

/// Container magic for encoded files
const MAGIC: &[u8; 4] = b"RSFC";
/// Container format version
const VERSION: u8 = 1;
/// Header: magic, version, block size (LE), check symbols (LE), payload length (LE)
const HEADER_LEN: usize = 4 + 1 + 2 + 2 + 8;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = Command::new("rsfec")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon forward error correction for files")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("encode")
                .visible_alias("e")
                .about("Protect a file with Reed-Solomon check symbols")
                .arg(Arg::new("input").help("File to protect").required(true).index(1))
                .arg(
                    Arg::new("output")
                        .help("Encoded output file")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("block_size")
                        .short('s')
                        .long("block-size")
                        .help("Payload bytes per block (default: 226)")
                        .value_name("BYTES"),
                )
                .arg(
                    Arg::new("check_symbols")
                        .short('c')
                        .long("check-symbols")
                        .help("Check symbols per block (default: 16)")
                        .value_name("COUNT"),
                ),
        )
        .subcommand(
            Command::new("decode")
                .visible_alias("d")
                .about("Recover the original file from an encoded one")
                .arg(Arg::new("input").help("Encoded file").required(true).index(1))
                .arg(
                    Arg::new("output")
                        .help("Recovered output file")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("encode", sub)) => encode_command(sub),
        Some(("decode", sub)) => decode_command(sub),
        _ => unreachable!("arg_required_else_help"),
    }
}

fn parse_geometry(matches: &clap::ArgMatches) -> Result<CodecConfig> {
    let block_size = match matches.get_one::<String>("block_size") {
        Some(raw) => raw.parse::<usize>().context("invalid block size")?,
        None => CodecConfig::DEFAULT_BLOCK_SIZE,
    };
    let check_symbols = match matches.get_one::<String>("check_symbols") {
        Some(raw) => raw.parse::<usize>().context("invalid check symbol count")?,
        None => CodecConfig::DEFAULT_CHECK_SYMBOLS,
    };
    Ok(CodecConfig::new(block_size, check_symbols)?)
}

fn encode_command(matches: &clap::ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("required arg");
    let output = matches.get_one::<String>("output").expect("required arg");
    let config = parse_geometry(matches)?;

    let payload = fs::read(input).with_context(|| format!("failed to read {input}"))?;
    let codec = BlockCodec::new(config);
    let encoded = codec.encode(&payload)?;

    let mut container = Vec::with_capacity(HEADER_LEN + encoded.len());
    container.extend_from_slice(MAGIC);
    container.push(VERSION);
    container.extend_from_slice(&(config.block_size() as u16).to_le_bytes());
    container.extend_from_slice(&(config.check_symbols() as u16).to_le_bytes());
    container.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    container.extend_from_slice(&encoded);

    let preview = encoded.len().min(16);
    debug!("first codeword bytes: {}", hex::encode(&encoded[..preview]));

    fs::write(output, &container).with_context(|| format!("failed to write {output}"))?;
    info!(
        "protected {} bytes as {} ({} blocks, {} check symbols each)",
        payload.len(),
        output,
        codec.block_count(payload.len()),
        config.check_symbols(),
    );
    Ok(())
}

fn decode_command(matches: &clap::ArgMatches) -> Result<()> {
    let input = matches.get_one::<String>("input").expect("required arg");
    let output = matches.get_one::<String>("output").expect("required arg");

    let container = fs::read(input).with_context(|| format!("failed to read {input}"))?;
    if container.len() < HEADER_LEN || &container[..4] != MAGIC {
        bail!("{input} is not an rsfec container");
    }
    if container[4] != VERSION {
        bail!("unsupported container version {}", container[4]);
    }

    let block_size = u16::from_le_bytes([container[5], container[6]]) as usize;
    let check_symbols = u16::from_le_bytes([container[7], container[8]]) as usize;
    let payload_len = u64::from_le_bytes(
        container[9..17].try_into().expect("fixed-size header slice"),
    ) as usize;

    let config = CodecConfig::new(block_size, check_symbols)?;
    let codec = BlockCodec::new(config);
    let payload = codec.decode(&container[HEADER_LEN..], payload_len)?;

    fs::write(output, &payload).with_context(|| format!("failed to write {output}"))?;
    info!("recovered {} bytes to {}", payload.len(), output);
    Ok(())
}
