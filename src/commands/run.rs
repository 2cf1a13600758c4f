//! Envelope mode: decode a JSON request, dispatch, encode the response

use crate::envelope;
use crate::io::write_output;
use anyhow::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

pub fn run(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let request_text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    match envelope::handle(&request_text) {
        Ok(response) => {
            write_output(&serde_json::to_string(&response)?, output.as_deref())?;
            Ok(())
        }
        Err(e) => {
            log::error!("request failed: {e}");
            let error = envelope::error_response(&e.to_string());
            write_output(&serde_json::to_string(&error)?, output.as_deref())?;
            // Single error object already emitted; signal failure without
            // a second report on stderr.
            std::process::exit(1);
        }
    }
}
