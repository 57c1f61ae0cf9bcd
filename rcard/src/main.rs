// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::env;

use rcard::{Args, cli};

fn main() -> Result<()> {
    let args = Args::parse_from(cli::recognized(env::args()));
    cli::run(&args)
}
