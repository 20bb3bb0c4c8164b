use clap::Parser;

/// golabel — resolve Go import paths to Bazel labels inside one repository.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Import path of the repository root, e.g. `example.com/repo`.
    #[arg(long, env = "GOLABEL_ROOT_PREFIX")]
    pub root_prefix: String,

    /// Directory prepended to resolved package paths.
    #[arg(long, default_value = "", env = "GOLABEL_PATH_ROOT")]
    pub path_root: String,

    /// Repository-relative directory of the importing file.
    #[arg(long, default_value = "")]
    pub dir: String,

    /// Print one JSON object per import instead of tab-separated text.
    #[arg(long)]
    pub json: bool,

    /// Import paths to resolve.
    #[arg(required = true)]
    pub imports: Vec<String>,
}
