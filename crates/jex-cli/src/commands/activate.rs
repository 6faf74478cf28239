//! Activate command implementation.

use anyhow::Result;
use clap::Args;

use crate::config;
use crate::output;

/// Code accepted by the activation gate.
const ACTIVATION_CODE: &str = "JIKE-EXPORT-PRO";

#[derive(Args, Debug)]
pub struct ActivateArgs {
    /// Activation code
    #[arg(long)]
    pub code: String,
}

pub fn run(args: ActivateArgs) -> Result<()> {
    if args.code != ACTIVATION_CODE {
        output::error("激活码无效");
        anyhow::bail!("invalid activation code");
    }

    let mut cfg = config::load()?;
    cfg.activated = true;
    config::save(&cfg)?;

    output::success("激活成功，已解除 60 条导出上限");
    Ok(())
}
