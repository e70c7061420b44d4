//! Resolve command.
//!
//! Prints the effective color a render pass would multiply pixels by.

use anyhow::Result;
use clap::Args;
use tint_ops::resolve_effective_color;
use tracing::trace;

use super::ParamArgs;

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Print the parameter set as JSON as well
    #[arg(long)]
    pub json: bool,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs, verbose: u8) -> Result<()> {
    trace!(?args, "resolve::run");
    let params = args.params.to_params()?;
    let color = resolve_effective_color(&params)?;

    if verbose > 0 {
        println!(
            "source {} ({:?}), strength {}, rounding {}",
            params.source.to_rgb(),
            params.source,
            params.strength,
            params.rounding
        );
    }
    println!("{color}");
    println!("{},{},{}", color.r, color.g, color.b);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&params)?);
    }
    Ok(())
}
