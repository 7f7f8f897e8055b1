//! dashboard: terminal and IPC front end for ChurnWatch.
//!
//! Usage:
//!   dashboard --mode predict --tenure 3 --contract "Month-to-month" --region Europe
//!   dashboard --mode strategies --region "Latin America"
//!   dashboard --mode analysis --json
//!   dashboard --ipc-mode --data-dir ./data

mod render;

use anyhow::Result;
use churnwatch_core::{
    command::DashCommand,
    engine::DashEngine,
    profile::{ProfileInput, Region, YesNo},
    view::{DashView, ViewMode},
};
use std::env;
use std::io::{self, BufRead, Write};

/// Line protocol: one JSON object per line in, one per line out.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum IpcRequest {
    Quit(QuitRequest),
    Command(DashCommand),
}

#[derive(serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum QuitRequest {
    Quit,
}

#[derive(serde::Serialize)]
struct IpcResponse<'a> {
    request_id:   String,
    evaluated_at: chrono::DateTime<chrono::Utc>,
    view:         &'a DashView,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = has_flag(&args, "--ipc-mode");
    let json = has_flag(&args, "--json");
    let data_dir = arg_str(&args, "--data-dir").unwrap_or("./data");

    let engine = DashEngine::build(data_dir)?;

    if ipc_mode {
        return run_ipc_loop(&engine);
    }

    let mode: ViewMode = arg_str(&args, "--mode").unwrap_or("predict").parse()?;
    let command = match mode {
        ViewMode::SinglePrediction => DashCommand::Predict { profile: profile_from_args(&args)? },
        ViewMode::LocationStrategies => DashCommand::Strategies {
            region: arg_str(&args, "--region").unwrap_or("North America").to_string(),
        },
        ViewMode::ModelAnalysis => DashCommand::Analysis,
    };

    let view = engine.execute(command)?;
    let mut stdout = io::stdout();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&view)?)?;
    } else {
        render::write_view(&mut stdout, &view)?;
    }
    Ok(())
}

fn run_ipc_loop(engine: &DashEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("rejected IPC line: {e}");
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        let command = match request {
            IpcRequest::Quit(QuitRequest::Quit) => break,
            IpcRequest::Command(c) => c,
        };

        match engine.execute(command) {
            Ok(view) => {
                let response = IpcResponse {
                    request_id:   uuid::Uuid::new_v4().to_string(),
                    evaluated_at: chrono::Utc::now(),
                    view:         &view,
                };
                writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            }
            Err(e) => {
                log::warn!("command failed: {e}");
                write_error(&mut stdout, &e.to_string())?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{err_json}")?;
    out.flush()?;
    Ok(())
}

/// Profile flags map one-to-one onto the selector widgets.
fn profile_from_args(args: &[String]) -> Result<ProfileInput> {
    let tenure = arg_str(args, "--tenure")
        .map(|v| v.parse::<i64>())
        .transpose()
        .map_err(|e| anyhow::anyhow!("--tenure: {e}"))?;
    let monthly_charges = arg_str(args, "--monthly-charges")
        .map(|v| v.parse::<f64>())
        .transpose()
        .map_err(|e| anyhow::anyhow!("--monthly-charges: {e}"))?;

    // Validate the region up front so the error names the flag.
    let region = arg_str(args, "--region")
        .map(|r| r.parse::<Region>().map(|_| r.to_string()))
        .transpose()?;

    Ok(ProfileInput {
        tenure,
        monthly_charges,
        region,
        contract:        arg_str(args, "--contract").map(str::to_string),
        payment_method:  arg_str(args, "--payment").map(str::to_string),
        online_security: arg_str(args, "--online-security").map(str::to_string),
        multiple_lines:  arg_str(args, "--multiple-lines").map(str::to_string),
        partner:         arg_str(args, "--partner").map(|v| YesNo::Text(v.to_string())),
        dependents:      arg_str(args, "--dependents").map(|v| YesNo::Text(v.to_string())),
    })
}

fn arg_str<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
