// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use colored::*;
use hsqlprobe::cli::{self, Cli};
use hsqlprobe::error::ProbeError;
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new().with_level(cli.log_level()).init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match cli::run(&cli).await {
        Ok(_) => {}
        Err(e @ ProbeError::Configuration(_)) => {
            println!("{}", e.to_string().red());
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(e.exit_code());
        }
    }
}
