//! Command-line front end for the `icss-values` binary.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use icss_values::{Message, SubstitutionTargets, ValuesConfig, process_css};

use crate::error::{CliError, Result};

#[derive(Parser, Debug)]
#[command(name = "icss-values")]
#[command(about = "Resolve @value declarations into ICSS :import/:export blocks")]
pub struct Args {
    /// Stylesheet to process, or `-` for stdin
    pub input: PathBuf,

    /// Write the rewritten CSS here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scoped identifier from an earlier pass, as `name=value` (repeatable)
    #[arg(long = "scoped", value_name = "NAME=VALUE")]
    pub scoped: Vec<String>,

    /// Write the icss-value messages as JSON to this file (`-` for stdout)
    #[arg(long, value_name = "FILE")]
    pub messages: Option<PathBuf>,

    /// Placeholder prefix for imported values
    #[arg(long)]
    pub prefix: Option<String>,

    /// Plugin name recorded in emitted messages
    #[arg(long)]
    pub plugin_name: Option<String>,

    /// Do not substitute values inside selectors
    #[arg(long)]
    pub no_selectors: bool,

    /// At-rule whose params receive substitution (repeatable, replaces the defaults)
    #[arg(long = "at-rule", value_name = "NAME")]
    pub at_rules: Vec<String>,

    /// Append debug logs to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,
}

impl Args {
    pub fn config(&self) -> ValuesConfig {
        let mut config = ValuesConfig::default();
        if let Some(prefix) = &self.prefix {
            config = config.with_placeholder_prefix(prefix);
        }
        if let Some(name) = &self.plugin_name {
            config = config.with_plugin_name(name);
        }
        if self.no_selectors {
            let targets = config.targets - SubstitutionTargets::SELECTORS;
            config = config.with_targets(targets);
        }
        if !self.at_rules.is_empty() {
            config = config.with_at_rules(self.at_rules.iter().cloned());
        }
        config
    }

    pub fn scoped_messages(&self) -> Result<Vec<Message>> {
        self.scoped.iter().map(|arg| parse_scoped(arg)).collect()
    }
}

/// Parses a `name=value` pair into an `icss-scoped` message.
///
/// ```
/// use icss_values_rs::cli::parse_scoped;
/// use icss_values_rs::Message;
///
/// assert_eq!(parse_scoped("a=__scope__a").unwrap(), Message::scoped("a", "__scope__a"));
/// assert!(parse_scoped("a").is_err());
/// ```
pub fn parse_scoped(arg: &str) -> Result<Message> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() && !value.is_empty() => {
            Ok(Message::scoped(name, value))
        }
        _ => Err(CliError::InvalidScoped(arg.to_string())),
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdio(path) {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) if !is_stdio(path) => fs::write(path, contents)?,
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Runs one invocation of the binary.
pub fn run(args: &Args) -> Result<()> {
    if let Some(path) = &args.log {
        crate::log_init::init_logger(path)?;
    }

    let config = args.config();
    let input = args.scoped_messages()?;
    let source = read_input(&args.input)?;
    log::info!("processing {} ({} bytes)", args.input.display(), source.len());

    let processed = process_css(&source, &config, &input)?;
    for warning in &processed.warnings {
        eprintln!("warning: {warning}");
    }

    write_output(args.output.as_deref(), &processed.css)?;

    if let Some(path) = &args.messages {
        let mut json = serde_json::to_string_pretty(&processed.messages)?;
        json.push('\n');
        write_output(Some(path.as_path()), &json)?;
    }

    log::info!(
        "done: {} messages, {} warnings",
        processed.messages.len(),
        processed.warnings.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["icss-values", "in.css"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_default_config() {
        assert_eq!(args(&[]).config(), ValuesConfig::default());
    }

    #[test]
    fn test_flags_map_onto_config() {
        let config = args(&[
            "--prefix",
            "__v_",
            "--plugin-name",
            "mine",
            "--no-selectors",
            "--at-rule",
            "supports",
        ])
        .config();

        assert_eq!(config.placeholder_prefix, "__v_");
        assert_eq!(config.plugin_name, "mine");
        assert!(!config.targets.contains(SubstitutionTargets::SELECTORS));
        assert!(config.targets.contains(SubstitutionTargets::DECLARATIONS));
        assert_eq!(config.at_rules, vec!["supports".to_string()]);
    }

    #[test]
    fn test_scoped_arguments() {
        let parsed = args(&["--scoped", "a=__s_a", "--scoped", "b=__s_b"]);
        assert_eq!(
            parsed.scoped_messages().unwrap(),
            vec![Message::scoped("a", "__s_a"), Message::scoped("b", "__s_b")]
        );
    }

    #[test]
    fn test_invalid_scoped_argument() {
        let err = args(&["--scoped", "=x"]).scoped_messages().unwrap_err();
        assert!(matches!(err, CliError::InvalidScoped(arg) if arg == "=x"));
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = std::env::temp_dir().join(format!("icss-values-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("in.css");
        let output = dir.join("out.css");
        let messages = dir.join("messages.json");
        fs::write(&input, "@value a: red;\n.x { color: a; }").unwrap();

        let args = Args::parse_from([
            OsStr::new("icss-values"),
            input.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
            OsStr::new("--messages"),
            messages.as_os_str(),
        ]);
        run(&args).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            ":export {\n  a: red;\n}\n.x { color: red; }"
        );
        let written: Vec<Message> =
            serde_json::from_str(&fs::read_to_string(&messages).unwrap()).unwrap();
        assert_eq!(written, vec![Message::value("icss-values", "a", "red")]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
