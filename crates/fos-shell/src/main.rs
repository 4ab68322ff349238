//! fOS Shell - Main Entry Point

use anyhow::Context;
use fos_shell::common::shell_switches;
use fos_shell::content::{
    switches, ChildProcessId, CommandLine, ContentBrowserClient, FileDescriptorInfo,
    MainFunctionParams,
};
use fos_shell::{ShellConfig, ShellContentBrowserClient};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Launch plan of one child process
#[derive(Debug, Serialize)]
struct ChildLaunchReport {
    argv: Vec<String>,
    descriptors: Vec<DescriptorReport>,
}

#[derive(Debug, Serialize)]
struct DescriptorReport {
    slot: u32,
    fd: i32,
    transferred: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let command_line = CommandLine::from_env();
    let config =
        ShellConfig::from_command_line(&command_line).context("invalid shell configuration")?;
    tracing::info!("Starting fOS Shell {}", fos_shell::VERSION);

    let client = ShellContentBrowserClient::new(config);
    let main_parts =
        client.create_browser_main_parts(MainFunctionParams::new(command_line.clone()));
    main_parts.pre_main_message_loop_run()?;

    if let Some(role) = command_line.switch_value(shell_switches::DUMP_CHILD_LAUNCH) {
        let report = plan_child_launch(&client, &command_line, role)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    main_parts.post_main_message_loop_run();
    Ok(())
}

/// Run the launch hooks the engine would run for a child of `role`
fn plan_child_launch(
    client: &ShellContentBrowserClient,
    browser_command_line: &CommandLine,
    role: &str,
) -> anyhow::Result<ChildLaunchReport> {
    let child_process_id = ChildProcessId::new(1);
    let mut child = CommandLine::new(browser_command_line.program());
    if !role.is_empty() {
        child.append_switch_with_value(switches::PROCESS_TYPE, role);
    }

    client.append_extra_command_line_switches(&mut child, child_process_id);

    let mut mappings = FileDescriptorInfo::new();
    client
        .get_additional_mapped_files_for_child_process(&child, child_process_id, &mut mappings)
        .with_context(|| format!("cannot launch {role} child"))?;

    Ok(ChildLaunchReport {
        argv: child.argv(),
        descriptors: mappings
            .iter()
            .map(|(slot, descriptor)| DescriptorReport {
                slot: slot.0,
                fd: descriptor.raw_fd(),
                transferred: descriptor.is_transferred(),
            })
            .collect(),
    })
}
