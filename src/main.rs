//! UVC chain parameter tool
//!
//! Prints the compiled-in parameters of a network and runs the explicit
//! genesis search used when minting new genesis constants.

use clap::{Parser, Subcommand};
use log::{error, info};
use std::process;
use std::thread;
use std::time::Duration;
use uvc_core::chainparams::{
    params, select_params, Base58Type, ChainParameters, NetworkProfile,
};
use uvc_core::constants::{CHAIN_NAME, COIN, DECIMAL_PLACES};
use uvc_core::mining::Miner;
use uvc_core::node::{resolve_genesis_with_miner, GenesisSpec, SearchPolicy};

#[derive(Debug, Parser)]
#[command(name = "uvc-params", about = "Inspect UVC network parameters")]
struct Opt {
    /// Network identifier: main, test, regtest or unittest
    #[arg(long, global = true, conflicts_with_all = ["testnet", "regtest"])]
    network: Option<NetworkProfile>,

    /// Use the test network
    #[arg(long, global = true)]
    testnet: bool,

    /// Use the regression test network
    #[arg(long, global = true)]
    regtest: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Print the full parameter set as JSON")]
    Show,
    #[command(about = "Print the genesis block and its serialized parts")]
    Genesis,
    #[command(about = "List the checkpoint table")]
    Checkpoints,
    #[command(about = "Convert the fixed seeds with fresh timestamps")]
    Seeds,
    #[command(about = "Decode an address against this network's prefixes")]
    Address {
        #[arg(help = "Base58Check encoded address")]
        address: String,
    },
    #[command(about = "Search for a genesis nonce starting from the pinned values")]
    Mine {
        #[arg(long, help = "Starting nonce")]
        nonce: Option<u32>,
        #[arg(long, help = "Starting block time")]
        time: Option<u32>,
        #[arg(long, value_parser = parse_bits, help = "Compact target, e.g. 0x1e0ffff0")]
        bits: Option<u32>,
        #[arg(long, help = "Give up after this many seconds")]
        timeout_secs: Option<u64>,
    },
}

fn parse_bits(raw: &str) -> Result<u32, String> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid bits {raw}: {e}"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::parse();

    if let Err(e) = run(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn resolve_network(opt: &Opt) -> Result<NetworkProfile, Box<dyn std::error::Error>> {
    if let Some(profile) = opt.network {
        return Ok(profile);
    }
    if opt.testnet || opt.regtest {
        return Ok(NetworkProfile::from_flags(opt.testnet, opt.regtest)?);
    }
    Ok(NetworkProfile::from_env()?.unwrap_or(NetworkProfile::Main))
}

fn run(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    let profile = resolve_network(&opt)?;
    select_params(profile);
    let params = params();

    match opt.command {
        Command::Show => {
            println!("{}", serde_json::to_string_pretty(&*params)?);
        }
        Command::Genesis => print_genesis(&params),
        Command::Checkpoints => {
            let table = params.checkpoints();
            for (height, hash) in table.iter() {
                println!("{height:>8}  {hash}");
            }
            println!("last checkpoint time:  {}", table.last_checkpoint_time());
            println!("transactions to last:  {}", table.transactions_to_last_checkpoint());
            println!("transactions per day:  {}", table.transactions_per_day());
        }
        Command::Seeds => {
            for seed in params.dns_seeds() {
                println!("dns    {} ({})", seed.host, seed.name);
            }
            for seed in params.fixed_seeds() {
                println!("fixed  {} last seen {}", seed.addr, seed.last_seen);
            }
        }
        Command::Address { address } => {
            let payload = params.decode_address(Base58Type::PubkeyAddress, &address)?;
            println!("{} address, payload {}", params.network_id(), hex::encode(payload));
        }
        Command::Mine { nonce, time, bits, timeout_secs } => {
            let pinned = params.genesis_spec();
            let start = GenesisSpec {
                nonce: nonce.unwrap_or(pinned.nonce),
                time: time.unwrap_or(pinned.time),
                bits: bits.unwrap_or(pinned.bits),
                ..pinned.clone()
            };
            mine(&start, timeout_secs)?;
        }
    }

    Ok(())
}

fn print_genesis(params: &ChainParameters) {
    let genesis = params.genesis_block();
    let header = &genesis.header;
    println!("network:      {} ({})", params.network_id(), CHAIN_NAME);
    println!("hash:         {}", params.genesis_hash());
    println!("merkle root:  {}", header.merkle_root);
    println!("time:         {}", header.time);
    println!("bits:         0x{:08x}", header.bits);
    println!("nonce:        {}", header.nonce);
    println!(
        "max money:    {}.{:0width$}",
        params.max_money_out() / COIN,
        params.max_money_out() % COIN,
        width = DECIMAL_PLACES as usize
    );
    println!("header:       {}", hex::encode(header.to_bytes()));
    for tx in &genesis.transactions {
        println!("coinbase:     {}", hex::encode(tx.to_bytes()));
    }
}

fn mine(start: &GenesisSpec, timeout_secs: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let miner = Miner::new();

    if let Some(secs) = timeout_secs {
        let stop = miner.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(secs));
            stop.stop();
        });
    }

    info!(
        "searching from time {} nonce {} bits 0x{:08x}",
        start.time, start.nonce, start.bits
    );
    let resolved = resolve_genesis_with_miner(start, SearchPolicy::Allow, &miner)?;
    let header = resolved.block.header;

    println!("time:        {}", header.time);
    println!("nonce:       {}", header.nonce);
    println!("bits:        0x{:08x}", header.bits);
    println!("hash:        {}", resolved.hash);
    println!("iterations:  {}", resolved.iterations);
    if !resolved.matches(start) {
        println!("note: differs from the pinned hash {}", start.expected_hash);
    }
    Ok(())
}
