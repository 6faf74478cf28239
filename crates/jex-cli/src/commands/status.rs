//! Status command implementation.

use anyhow::Result;
use clap::Args;

use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub fn run(_args: StatusArgs) -> Result<()> {
    let cfg = config::load()?;

    let state = if cfg.activated {
        "已激活（无导出上限）"
    } else {
        "未激活（最多导出 60 条）"
    };
    output::field("激活状态", state);

    Ok(())
}
