// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Apiscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Apiscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Apiscope CLI entrypoint.
//!
//! Loads an OpenAPI JSON document (default `openapi.json` in the working directory), groups its
//! operations by tag, and opens the interactive outline viewer.

use std::error::Error;
use std::path::PathBuf;

use apiscope::index::EndpointIndex;
use apiscope::logging::{init_logging, LogConfig};
use apiscope::model::SpecDocument;
use apiscope::store::{SpecFile, DEFAULT_SPEC_FILENAME};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<spec-file>] [--log-file <path>]\n  {program} --demo [--log-file <path>]\n\nIf spec-file is omitted, `{DEFAULT_SPEC_FILENAME}` in the current working directory is used.\n--demo uses a built-in sample document and cannot be combined with spec-file.\n\nLogs are written only when --log-file or APISCOPE_LOG_FILE is set; APISCOPE_LOG sets the filter (default `info`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    spec_file: Option<String>,
    log_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.log_file = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.spec_file.is_some() {
                    return Err(());
                }
                options.spec_file = Some(arg);
            }
        }
    }

    if options.demo && options.spec_file.is_some() {
        return Err(());
    }

    Ok(options)
}

fn load(options: &CliOptions) -> Result<(SpecDocument, EndpointIndex), Box<dyn Error>> {
    if options.demo {
        let document = apiscope::tui::demo_document();
        let index = EndpointIndex::build(&document);
        return Ok((document, index));
    }

    let path = options.spec_file.as_deref().unwrap_or(DEFAULT_SPEC_FILENAME);
    let file = SpecFile::new(path);
    let (document, index) = EndpointIndex::load(&file)?;
    tracing::info!(
        path = %file.path().display(),
        endpoints = document.endpoints().len(),
        tags = index.tag_count(),
        "document loaded"
    );
    Ok((document, index))
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "apiscope".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let log_config = LogConfig::from_env(options.log_file.as_ref().map(PathBuf::from));
        init_logging(&log_config)?;

        let (document, index) = load(&options)?;
        if document.is_multi_server() {
            tracing::warn!(
                servers = document.servers().len(),
                primary = document.primary_server().unwrap_or_default(),
                "document declares several servers; showing the first"
            );
        }

        apiscope::tui::run(&document, &index)
    })();

    if let Err(err) = result {
        eprintln!("apiscope: {err}");
        std::process::exit(1);
    }
}
