use clap::Parser;
use colored::Colorize;

use kq::api::{CmdResult, DispatchAction, KqApi, Listing};
use kq::error::Result;
use kq::gateway::kubectl::KubectlGateway;
use kq::gateway::ClusterGateway;
use kq::render::{render_spans, span_width, Span};

mod args;
mod router;

use args::Cli;
use router::{route, Intent};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = KqApi::new(KubectlGateway::new());

    match route(&cli.tokens) {
        Intent::Help => print_global_help(),
        Intent::AllUsage => print_all_usage(),
        Intent::FindUsage => print_find_usage(),
        Intent::FindNamespaceUsage => {
            println!("\nkq find {} {}\t-- Find namespace", "ns".green(), "<query>".blue());
        }
        Intent::FindPodUsage => {
            println!("\nkq find {} {}\t-- Find pod", "pod".green(), "<query>".blue());
        }
        Intent::PodCommandUsage { unknown } => {
            if let Some(command) = unknown {
                println!("\nUnknown command: {}", command.red());
            }
            print_pod_command_usage();
        }
        Intent::AllNamespaces => finish(&api, api.all_namespaces()?)?,
        Intent::AllPods => finish(&api, api.all_pods()?)?,
        Intent::FindNamespace { query } => finish(&api, api.find_namespace(&query)?)?,
        Intent::FindPod { query } => finish(&api, api.find_pod(&query)?)?,
        Intent::NamespacePods { query } => finish(&api, api.pods_in_namespace(&query)?)?,
        Intent::Scale {
            namespace,
            deployment,
            replicas,
        } => finish(
            &api,
            api.scale(&namespace, deployment.as_deref(), replicas.as_deref())?,
        )?,
        Intent::PodCommand {
            namespace,
            pod,
            action,
        } => finish(&api, api.pod_command(&namespace, &pod, action)?)?,
    }
    Ok(())
}

/// Render a command result, then execute its dispatch action if it carries
/// one. Dispatch hands the terminal to kubectl until it exits.
fn finish<G: ClusterGateway>(api: &KqApi<G>, result: CmdResult) -> Result<()> {
    print_result(&result);
    if let Some(action) = &result.dispatch {
        if let DispatchAction::Logs { follow: true, .. } = action {
            prompt_enter("Press enter to start streaming logs");
        }
        api.execute(action)?;
    }
    Ok(())
}

fn print_result(result: &CmdResult) {
    let color = colored::control::SHOULD_COLORIZE.should_colorize();

    if result.messages.is_empty() && matches!(result.listing, Listing::None) {
        return;
    }
    println!();
    for message in &result.messages {
        println!("{}", render_spans(&message.spans, color));
    }
    match &result.listing {
        Listing::None => {}
        Listing::Rows(rows) => {
            println!();
            for row in rows {
                println!("  {}", render_spans(row, color));
            }
        }
        Listing::Table(rows) => {
            println!();
            print_table(rows, color);
        }
    }
}

/// Two-column table; the namespace column is as wide as its longest value.
fn print_table(rows: &[(Vec<Span>, Vec<Span>)], color: bool) {
    let ns_width = rows
        .iter()
        .map(|(ns, _)| span_width(ns))
        .max()
        .unwrap_or(0)
        .max("Namespace".len());

    let header_pad = " ".repeat(ns_width - "Namespace".len() + 3);
    let header = [
        Span::heading("Namespace"),
        Span::plain(header_pad),
        Span::heading("Pod name"),
    ];
    println!("{}", render_spans(&header, color));
    println!();

    for (namespace, pod) in rows {
        let pad = " ".repeat(ns_width - span_width(namespace) + 3);
        println!(
            "{}{}{}",
            render_spans(namespace, color),
            pad,
            render_spans(pod, color)
        );
    }
}

fn prompt_enter(message: &str) {
    println!("{message}");
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}

fn print_global_help() {
    println!();
    println!(
        "{} is a fuzzy CLI companion for Kubernetes that simplifies usage of kubectl",
        "kq".green()
    );
    println!();
    println!("{}", "Basic Commands".green());
    println!();
    println!("  kq {}\t\t\t\tList of all namespaces", "all ns".green());
    println!("  kq {}\t\t\t\tList of all pods in all namespaces", "all pods".green());
    println!("  kq {} {}\t\t\tFind namespace", "find ns".green(), "<query>".blue());
    println!("  kq {} {}\t\tFind pod", "find pod".green(), "<query>".blue());
    println!("  kq {}\t\t\tList of pods in namespace", "<namespace>".blue());
    println!("  kq {} {}\t\tList of pods in namespace", "<namespace>".blue(), "pods".green());
    println!(
        "  kq {} {} {} {}\tList or scale deployments",
        "<namespace>".blue(),
        "scale".green(),
        "[<deployment>]".blue(),
        "[<count>]".blue()
    );
    println!(
        "  kq {} {} {}\t\tFetch logs from pod ({} to stream)",
        "<namespace>".blue(),
        "<pod>".blue(),
        "logs".green(),
        "-f".green()
    );
    println!(
        "  kq {} {} {}\t\tRun bash in pod",
        "<namespace>".blue(),
        "<pod>".blue(),
        "bash".green()
    );
    println!();
    println!("{}", "Fuzzy search".green());
    println!();
    println!("  Namespaces and pods match by short equivalents: queries and names are");
    println!("  compared lowercased with spaces, hyphens and underscores removed, so");
    println!("  the following commands are equal:");
    println!();
    println!("  > kq {} {}", "1234".yellow(), "redismetric".yellow());
    println!(
        "  > kq jira-{} rd-jira-5103-{}-57dff4f8b7-5c49k",
        "1234".yellow(),
        "redis-metrics".yellow()
    );
    println!();
}

fn print_all_usage() {
    println!();
    println!("kq all {}\t-- List of all namespaces", "ns".green());
    println!("kq all {}\t-- List of all pods", "pods".green());
}

fn print_find_usage() {
    println!();
    println!("kq find {} {}\t-- Find namespace", "ns".green(), "<query>".blue());
    println!("kq find {} {}\t-- Find pod", "pod".green(), "<query>".blue());
}

fn print_pod_command_usage() {
    println!();
    println!(
        "kq {} {} {}\t-- Fetch logs from pod ({} to stream)",
        "<namespace>".blue(),
        "<pod>".blue(),
        "logs".green(),
        "-f".green()
    );
    println!(
        "kq {} {} {}\t-- Run bash in pod",
        "<namespace>".blue(),
        "<pod>".blue(),
        "bash".green()
    );
    println!(
        "kq {} {} {} {}\t-- List or scale deployments",
        "<namespace>".blue(),
        "scale".green(),
        "[<deployment>]".blue(),
        "[<count>]".blue()
    );
}
