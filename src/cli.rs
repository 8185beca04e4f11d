//! Command-line and interactive front end.
//!
//! Maps each sub-command onto one calculator operation and renders the
//! result as a table or JSON. Commands return their output as a `String` so
//! they can be tested without a terminal.

use crate::config::Config;
use crate::models::{AddressBlock, NetworkInfo};
use crate::output::{
    hosts_summary, network_info_table, subnet_table, supernet_summary, to_json, HostsReport,
    SubnetReport, SupernetReport,
};
use crate::processing::{
    collapse, describe, minimal_prefix_for, parse, parse_input, partition, PartitionBy,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::{BufRead, Write};

const NETWORK_HELP: &str =
    "Network in CIDR notation (e.g. 192.168.1.0/24) or with mask (e.g. '192.168.1.0 255.255.255.0')";

/// IP subnet calculator: network information, subnetting, sizing and supernets.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc", author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Operating mode; interactive when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Calculate network information
    Info {
        #[arg(help = NETWORK_HELP)]
        network: String,
    },
    /// Divide a network into smaller subnets
    Subnet {
        #[arg(help = NETWORK_HELP)]
        network: String,
        #[command(flatten)]
        split: SplitArgs,
        /// Maximum subnets to list (0 lists all) [default: 256, env SUBNET_CALC_LIMIT]
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Find the subnet size that fits a number of hosts
    Hosts {
        /// Number of hosts required
        #[arg(allow_negative_numbers = true)]
        num_hosts: i64,
        /// Base network address to apply the calculated mask to
        #[arg(short, long)]
        base_network: Option<String>,
    },
    /// Collapse networks into the smallest covering supernet(s)
    Supernet {
        /// One or more networks in CIDR notation
        #[arg(required = true, num_args = 1..)]
        networks: Vec<String>,
    },
    /// Enter interactive mode
    Interactive,
}

/// Mutually exclusive ways to split a network.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct SplitArgs {
    /// Number of subnets to create (must be a power of 2)
    #[arg(short, long)]
    pub num_subnets: Option<u64>,
    /// New prefix length for the subnets
    #[arg(short, long)]
    pub prefix_length: Option<u8>,
}

impl SplitArgs {
    pub fn partition_by(&self) -> Result<PartitionBy, Box<dyn Error>> {
        match (self.num_subnets, self.prefix_length) {
            (Some(count), None) => Ok(PartitionBy::Count(count)),
            (None, Some(prefix)) => Ok(PartitionBy::NewPrefix(prefix)),
            _ => Err("Either number of subnets or new prefix length must be provided".into()),
        }
    }
}

/// Run the parsed command line, printing to stdout.
pub fn run(args: &Args, config: &Config) -> Result<(), Box<dyn Error>> {
    match &args.command {
        None | Some(Command::Interactive) => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            interactive(stdin.lock(), stdout.lock(), args.json, config)
        }
        Some(command) => {
            let output = execute(command, args.json, config)?;
            println!("{}", output.trim_end());
            Ok(())
        }
    }
}

/// Run one non-interactive command and return what it would print.
pub fn execute(command: &Command, json: bool, config: &Config) -> Result<String, Box<dyn Error>> {
    log::info!("execute {command:?} json={json}");
    match command {
        Command::Info { network } => info(network, json),
        Command::Subnet {
            network,
            split,
            limit,
        } => subnet(
            network,
            split.partition_by()?,
            limit.unwrap_or(config.subnet_limit),
            json,
        ),
        Command::Hosts {
            num_hosts,
            base_network,
        } => hosts(*num_hosts, base_network.as_deref(), json),
        Command::Supernet { networks } => supernet(networks, json),
        Command::Interactive => Err("interactive mode needs a terminal, use run()".into()),
    }
}

/// Parse user text into a block, warning about loosely accepted masks.
fn parse_network(text: &str) -> Result<AddressBlock, Box<dyn Error>> {
    let input = parse_input(text)?;
    if !input.has_contiguous_mask() {
        log::warn!(
            "Mask in '{}' is not contiguous, using /{} (count of set bits)",
            text.trim(),
            input.prefix_len()
        );
    }
    let block = input.to_block()?;
    log::debug!("parsed '{}' as {block}", text.trim());
    Ok(block)
}

pub fn info(network: &str, json: bool) -> Result<String, Box<dyn Error>> {
    let info = describe(parse_network(network)?);
    if json {
        Ok(to_json(&info)?)
    } else {
        Ok(network_info_table(&info))
    }
}

pub fn subnet(
    network: &str,
    by: PartitionBy,
    limit: usize,
    json: bool,
) -> Result<String, Box<dyn Error>> {
    let block = parse_network(network)?;
    let subnets = partition(block, by)?;
    log::info!(
        "{block} split {by:?} into {} subnets of /{}",
        subnets.remaining(),
        subnets.prefix_len()
    );
    if json {
        Ok(to_json(&SubnetReport::new(block, subnets, limit))?)
    } else {
        Ok(subnet_table(subnets, limit))
    }
}

pub fn hosts(
    num_hosts: i64,
    base_network: Option<&str>,
    json: bool,
) -> Result<String, Box<dyn Error>> {
    let prefix_len = minimal_prefix_for(num_hosts)?;
    log::info!("{num_hosts} hosts fit in /{prefix_len}");

    let network = match base_network {
        Some(base) => Some(apply_mask(base, prefix_len)?),
        None => None,
    };

    if json {
        return Ok(to_json(&HostsReport::new(num_hosts, prefix_len, network))?);
    }
    let mut out = hosts_summary(num_hosts, prefix_len);
    if let Some(info) = network {
        out.push('\n');
        out.push_str(&network_info_table(&info));
    }
    Ok(out)
}

/// Describe the block of length `prefix_len` that holds `base`.
fn apply_mask(base: &str, prefix_len: u8) -> Result<NetworkInfo, Box<dyn Error>> {
    Ok(describe(parse(&format!("{}/{prefix_len}", base.trim()))?))
}

pub fn supernet<S: AsRef<str>>(networks: &[S], json: bool) -> Result<String, Box<dyn Error>> {
    let inputs = networks
        .iter()
        .map(|network| parse_network(network.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let blocks = collapse(&inputs)?;
    log::info!("collapsed {} networks into {} blocks", networks.len(), blocks.len());

    if json {
        return Ok(to_json(&SupernetReport::new(blocks))?);
    }
    let mut out = supernet_summary(&blocks);
    if let [single] = blocks.as_slice() {
        out.push('\n');
        out.push_str(&network_info_table(&describe(*single)));
    }
    Ok(out)
}

/// Menu-driven session reading answers line by line from `input`.
///
/// Ends on choice 5 or end of input. Calculation errors are printed and the
/// menu is shown again.
pub fn interactive<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    json: bool,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    log::info!("#Start interactive mode");
    let mut lines = input.lines();

    writeln!(out, "\n============================================")?;
    writeln!(out, "   IP Subnet Calculator - Interactive Mode   ")?;
    writeln!(out, "============================================\n")?;

    loop {
        writeln!(out, "Available operations:")?;
        writeln!(out, "1. Calculate Network Information")?;
        writeln!(out, "2. Divide Network into Subnets")?;
        writeln!(out, "3. Find Subnet for Host Count")?;
        writeln!(out, "4. Find Supernet")?;
        writeln!(out, "5. Exit")?;

        let Some(choice) = prompt(&mut lines, &mut out, "\nEnter your choice (1-5): ")? else {
            break;
        };

        let result = match choice.as_str() {
            "1" => interactive_info(&mut lines, &mut out, json),
            "2" => interactive_subnet(&mut lines, &mut out, json, config),
            "3" => interactive_hosts(&mut lines, &mut out, json),
            "4" => interactive_supernet(&mut lines, &mut out, json),
            "5" => {
                writeln!(out, "\nExiting IP Subnet Calculator. Goodbye!\n")?;
                break;
            }
            _ => {
                writeln!(out, "Invalid choice. Please enter a number between 1 and 5.")?;
                Ok(Some(String::new()))
            }
        };

        match result {
            Ok(Some(text)) => writeln!(out, "{text}")?,
            Ok(None) => break,
            Err(e) => {
                log::warn!("interactive choice {choice} failed: {e}");
                writeln!(out, "Error: {e}\n")?;
            }
        }
    }

    log::info!("#End interactive mode");
    Ok(())
}

type Lines<R> = std::io::Lines<R>;

/// Ask a question; `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    lines: &mut Lines<R>,
    out: &mut W,
    question: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    write!(out, "{question}")?;
    out.flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn prompt_number<R, W, T>(
    lines: &mut Lines<R>,
    out: &mut W,
    question: &str,
) -> Result<Option<T>, Box<dyn Error>>
where
    R: BufRead,
    W: Write,
    T: std::str::FromStr,
{
    match prompt(lines, out, question)? {
        Some(answer) => answer
            .parse::<T>()
            .map(Some)
            .map_err(|_| Box::<dyn Error>::from(format!("invalid number '{answer}'"))),
        None => Ok(None),
    }
}

fn interactive_info<R: BufRead, W: Write>(
    lines: &mut Lines<R>,
    out: &mut W,
    json: bool,
) -> Result<Option<String>, Box<dyn Error>> {
    let question = "Enter network (e.g. 192.168.1.0/24 or 192.168.1.0 255.255.255.0): ";
    match prompt(lines, out, question)? {
        Some(network) => info(&network, json).map(Some),
        None => Ok(None),
    }
}

fn interactive_subnet<R: BufRead, W: Write>(
    lines: &mut Lines<R>,
    out: &mut W,
    json: bool,
    config: &Config,
) -> Result<Option<String>, Box<dyn Error>> {
    let Some(network) = prompt(lines, out, "Enter network (e.g. 192.168.1.0/24): ")? else {
        return Ok(None);
    };
    let question = "Divide by (n)umber of subnets or (p)refix length? (n/p): ";
    let Some(mode) = prompt(lines, out, question)? else {
        return Ok(None);
    };

    let by = match mode.to_lowercase().as_str() {
        "n" => {
            let question = "Enter number of subnets (must be a power of 2): ";
            match prompt_number::<_, _, u64>(lines, out, question)? {
                Some(count) => PartitionBy::Count(count),
                None => return Ok(None),
            }
        }
        "p" => match prompt_number::<_, _, u8>(lines, out, "Enter new prefix length: ")? {
            Some(prefix) => PartitionBy::NewPrefix(prefix),
            None => return Ok(None),
        },
        _ => return Ok(Some("Invalid choice. Please enter 'n' or 'p'.".to_string())),
    };

    subnet(&network, by, config.subnet_limit, json).map(Some)
}

fn interactive_hosts<R: BufRead, W: Write>(
    lines: &mut Lines<R>,
    out: &mut W,
    json: bool,
) -> Result<Option<String>, Box<dyn Error>> {
    let question = "Enter number of hosts required: ";
    let Some(num_hosts) = prompt_number::<_, _, i64>(lines, out, question)? else {
        return Ok(None);
    };
    let prefix_len = minimal_prefix_for(num_hosts)?;
    if !json {
        write!(out, "{}", hosts_summary(num_hosts, prefix_len))?;
    }

    let question = "Apply this mask to a specific network? (y/n): ";
    let base = match prompt(lines, out, question)? {
        Some(answer) if answer.eq_ignore_ascii_case("y") => {
            match prompt(lines, out, "Enter base network IP (e.g. 192.168.1.0): ")? {
                Some(base) => Some(base),
                None => return Ok(None),
            }
        }
        Some(_) => None,
        None => return Ok(None),
    };

    if json {
        return hosts(num_hosts, base.as_deref(), json).map(Some);
    }
    match base {
        Some(base) => Ok(Some(network_info_table(&apply_mask(&base, prefix_len)?))),
        None => Ok(Some(String::new())),
    }
}

fn interactive_supernet<R: BufRead, W: Write>(
    lines: &mut Lines<R>,
    out: &mut W,
    json: bool,
) -> Result<Option<String>, Box<dyn Error>> {
    let question = "Enter one or more networks separated by spaces: ";
    let Some(answer) = prompt(lines, out, question)? else {
        return Ok(None);
    };
    let networks: Vec<&str> = answer.split_whitespace().collect();
    supernet(&networks, json).map(Some)
}
