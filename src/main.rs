use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    unit_converter_lib::run().await
}
