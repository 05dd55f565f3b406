use clap::Parser;

use set_icon::invocation;
use set_icon::workspace::DesktopWorkspace;

#[derive(Debug, Parser)]
#[command(name = "set-icon")]
#[command(about = "Assign custom .icns icons to files, apps, and folders")]
#[command(version)]
#[command(override_usage = "set-icon <icns-file> <file>\n       set-icon <icns-file-or-dir>...")]
struct Cli {
    /// An .icns file, the target to receive it, or a directory of .icns
    /// files named after the apps they belong to
    #[arg(required = true)]
    args: Vec<String>,
}

fn main() {
    // clap prints usage and exits non-zero when no argument is given;
    // past that point, per-target failures never change the exit status.
    let cli = Cli::parse();

    invocation::run(&cli.args, &DesktopWorkspace);
}
