use std::process::ExitCode;

use tether_gen::{Builder, GeneratorError};

fn main() -> ExitCode {
    println!("cargo:rerun-if-changed=src/orders.rs");

    match Builder::new()
        .descriptor("src/orders.rs", "crate::orders")
        .namespace("client")
        .generate()
    {
        Ok(_) => ExitCode::SUCCESS,
        Err(GeneratorError::Diagnostics(diagnostics)) => {
            for diagnostic in &diagnostics {
                eprintln!("{}: {diagnostic}", diagnostic.kind.label());
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("tether-gen failed: {e}");
            ExitCode::FAILURE
        }
    }
}
